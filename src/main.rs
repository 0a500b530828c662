// SPDX-FileCopyrightText: © 2025 TTKB, LLC
// SPDX-License-Identifier: BSD-3-CLAUSE

use anyhow::{bail, Result};
use clap::{CommandFactory, Parser};

use helloplanet::planet;

/// Greet a solar system planet by its orbital index.
#[derive(Debug, Parser)]
#[clap(name = env!("CARGO_CRATE_NAME"), version)]
#[command(version, about, long_about = None)]
pub struct App {
    /// planet index, 0 (Mercury) through 7 (Neptune)
    #[arg(required = false, allow_negative_numbers = true)]
    index: Option<i64>,
}

fn main() -> Result<()> {
    let args = App::parse();

    match args.index {
        Some(index) => greet(index)?,
        None => {
            let a = App::command().render_help();
            eprintln!("{}", a);
            bail!("Need planet index");
        }
    }

    Ok(())
}

fn greet(index: i64) -> Result<()> {
    let name = planet(index)?;
    println!("Hello {}", name);
    Ok(())
}
