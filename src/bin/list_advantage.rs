use std::io::{self, Write};

use clap::Parser;
use tracing::{info, Level};

use seqbench::{config::InsertionConfig, harness, insertion};

/// Times repeated middle insertions into a vector and a linked list.
///
/// All sizes are fixed; there are no options beyond --help and --version.
#[derive(Parser, Debug)]
#[command(author, version, long_about = None)]
struct Args {}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(Level::INFO)
        .init();
    let _args = Args::parse();

    let config = InsertionConfig::default();
    info!(
        elements = config.elements,
        insertions = config.insertions,
        "starting middle insertion comparison"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    harness::banner(&mut out, insertion::TITLE)?;
    let comparison = insertion::run(&config, &mut out)?;
    out.flush()?;

    let (winner, ratio) = comparison.verdict();
    info!(winner = winner.name(), ratio, "middle insertion comparison finished");

    Ok(())
}
