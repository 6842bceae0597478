//! plantag CLI — French delivery-schedule tag tooling.
//!
//! Encodes free-text schedule descriptions into fixed-width tag strings,
//! decodes stored tags back into rules, and preprocesses info fields into
//! their machine-parsable form.

mod commands;

use clap::Parser;
use color_eyre::eyre::Result;

use commands::Cli;

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    commands::init_tracing(&cli);
    commands::run(cli)
}
