// SPDX-FileCopyrightText: © 2025 TTKB, LLC
// SPDX-License-Identifier: BSD-3-CLAUSE

//! Solar System Planet Lookup
//!
//! This crate maps an orbital index to the name of the corresponding planet
//! of the solar system. It backs the `helloplanet` binary, which greets the
//! planet named by its command line argument.
//!
//! # Overview
//!
//! The solar system has eight planets, and this crate knows all of them by
//! their position in orbital order from the sun:
//!
//! | Index | Planet  |
//! |-------|---------|
//! | 0     | Mercury |
//! | 1     | Venus   |
//! | 2     | Earth   |
//! | 3     | Mars    |
//! | 4     | Jupiter |
//! | 5     | Saturn  |
//! | 6     | Uranus  |
//! | 7     | Neptune |
//!
//! # Quick Start
//!
//! Looking up a planet:
//!
//! ```
//! use helloplanet::planet;
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     let name = planet(2)?;
//!     assert_eq!(name, "Earth");
//!     Ok(())
//! }
//! ```
//!
//! An index outside `[0, 7]` is an error:
//!
//! ```
//! use helloplanet::planet;
//!
//! assert!(planet(8).is_err());
//! ```

use anyhow::{bail, Result};

/// The planets in orbital order from the sun. Indices into this table are
/// exactly the closed range `[0, 7]`.
const PLANETS: [&str; 8] = [
    "Mercury", "Venus", "Earth", "Mars", "Jupiter", "Saturn", "Uranus", "Neptune",
];

/// Returns the name of the planet at position `i` in orbital order, with
/// Mercury at 0 and Neptune at 7. If `i` falls outside that range an error
/// will be returned.
pub fn planet(i: i64) -> Result<&'static str> {
    if !(0..=7).contains(&i) {
        bail!("Bad index: {i}");
    }

    Ok(PLANETS[i as usize])
}
