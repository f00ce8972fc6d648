use anyhow::Result;
use clap::Parser;
use functor_dispatch::cli::{execute, Cli};

fn main() -> Result<()> {
    let cli = Cli::parse();
    execute(&cli)
}
