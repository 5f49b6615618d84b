//! CLI entry point for batch shape processing

use clap::Parser;
use gridshape::io::cli::{Cli, FileProcessor};

fn main() -> gridshape::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let mut processor = FileProcessor::new(cli);
    processor.process()?;
    Ok(())
}
