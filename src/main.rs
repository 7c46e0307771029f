use clap::{Parser, Subcommand};
use std::path::PathBuf;
use sysgraph::commands;

/// Structural analysis of directed graphs described by incidence or
/// adjacency matrices.
#[derive(Parser)]
#[command(name = "sysgraph", version, about)]
struct Cli {
    /// Emit JSON instead of human-readable output
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert an incidence matrix into an adjacency matrix and
    /// right-incidence sets
    Convert {
        /// Incidence matrix file ("N M" header + N rows)
        file: PathBuf,
    },
    /// Compute hierarchical levels of an acyclic graph
    Levels {
        /// Matrix file (adjacency by default)
        file: PathBuf,
        /// Treat the file as an incidence matrix and convert first
        #[arg(long)]
        incidence: bool,
    },
    /// Check acyclicity and list all simple cycles
    Cycles {
        /// Adjacency matrix file ("N" header + N rows)
        file: PathBuf,
    },
    /// Decompose into strongly connected subsystems and build the
    /// condensation graph
    Decompose {
        /// Adjacency matrix file ("N" header + N rows)
        file: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Convert { file } => commands::convert::run(&file, cli.json),
        Command::Levels { file, incidence } => commands::levels::run(&file, incidence, cli.json),
        Command::Cycles { file } => commands::cycles::run(&file, cli.json),
        Command::Decompose { file } => commands::decompose::run(&file, cli.json),
    }
}
