use clap::Parser;

use bubbletint::cli::Cli;

fn main() -> anyhow::Result<()> {
    bubbletint::run(Cli::parse())
}
