//! # crisp-dm command line entry point
//!
//! ```bash
//! crisp-dm summarize data.csv --locale pt
//! crisp-dm correlate data.parquet --format json
//! crisp-dm sample
//! ```
//!
//! Set `RUST_LOG=debug` (or pass `-v`) to see what is being loaded.

#![warn(clippy::all, rust_2018_idioms)]
#![expect(clippy::print_stdout)] // Allow println! in main binary

mod cli;

use anyhow::Result;
use clap::Parser as _;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    crisp_dm::logging::init(cli.verbose)?;

    cli::run(cli)
}
