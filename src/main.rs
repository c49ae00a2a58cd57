//! CLI entry point for the toroidal life simulator

use chronolife::io::cli::{Cli, SessionRunner};
use clap::Parser;

fn main() -> chronolife::Result<()> {
    let cli = Cli::parse();
    let mut runner = SessionRunner::new(cli);
    runner.run()
}
