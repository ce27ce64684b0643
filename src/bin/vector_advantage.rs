use std::io::{self, Write};

use clap::Parser;
use tracing::{info, Level};

use seqbench::{access, config::AccessConfig, harness};

/// Times traversal and random access on a vector and a linked list.
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

    let config = AccessConfig::default();
    info!(
        elements = config.elements,
        accesses = config.accesses,
        reduced_accesses = config.reduced_accesses,
        seed = config.seed,
        "starting traversal and access comparison"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    harness::banner(&mut out, access::TITLE)?;
    let outcome = access::run(&config, &mut out)?;
    out.flush()?;

    let (traversal_winner, traversal_ratio) = outcome.traversal.verdict();
    let (access_winner, access_ratio) = outcome.random_access.verdict();
    info!(
        traversal_winner = traversal_winner.name(),
        traversal_ratio,
        access_winner = access_winner.name(),
        access_ratio,
        "traversal and access comparison finished"
    );

    Ok(())
}
