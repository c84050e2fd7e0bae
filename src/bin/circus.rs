//! Crazy Circus in the terminal.
//!
//! Usage: circus [ANIMALS] [--seed N] [--no-so]

use circus::ring::Args;
use circus::ring::Session;
use clap::Parser;

fn main() -> anyhow::Result<()> {
    circus::log();
    Session::new(&Args::parse())?.run()
}
