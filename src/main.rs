//! CLI entry point for the right-triangle puzzle solver

use clap::Parser;
use tritri::io::cli::{Cli, SolveRunner};

fn main() -> tritri::Result<()> {
    let cli = Cli::parse();
    let runner = SolveRunner::new(cli);
    runner.run().map(|_| ())
}
