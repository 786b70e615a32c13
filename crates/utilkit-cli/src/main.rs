//! # utilkit CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use clap::Parser;
use serde::Serialize;
use std::fmt::Display;

use utilkit_cli::{buffer, fsm, pool};

/// utilkit component demonstrations.
///
/// Each subcommand drives one component and prints what happened.
#[derive(Parser, Debug)]
#[command(name = "utilkit", version, about)]
struct Cli {
    /// Print the report as JSON instead of text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Lease connections from a fixed-size pool.
    Pool(pool::PoolArgs),
    /// Encode and decode a record through a DataBuffer.
    Buffer(buffer::BufferArgs),
    /// Walk a door state machine.
    Fsm(fsm::FsmArgs),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Pool(args) => emit(&pool::run(args)?, cli.json),
        Commands::Buffer(args) => emit(&buffer::run(args)?, cli.json),
        Commands::Fsm(args) => emit(&fsm::run(args)?, cli.json),
    }
}

fn emit<R: Serialize + Display>(report: &R, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        println!("{report}");
    }
    Ok(())
}
