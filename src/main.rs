// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! Graphkit CLI - inspect graphs as adjacency and incidence structures

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use graphkit::commands::{self, matrix::MatrixKind, traverse::Order};
use graphkit::config;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "graphkit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Configuration file path
    #[arg(short, long, env = "GRAPHKIT_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Treat edge lists as directed
    #[arg(long, global = true, conflicts_with = "undirected")]
    directed: bool,

    /// Treat edge lists as undirected
    #[arg(long, global = true)]
    undirected: bool,

    /// Read a third column of weights from edge lists
    #[arg(long, global = true, conflicts_with = "unweighted")]
    weighted: bool,

    /// Reject weight columns in edge lists
    #[arg(long, global = true)]
    unweighted: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the adjacency list
    Show {
        /// Edge list or JSON graph document
        input: PathBuf,
    },

    /// Print an adjacency or incidence representation
    Matrix {
        /// Edge list or JSON graph document
        input: PathBuf,

        /// Representation to print
        #[arg(short, long, value_enum, default_value = "adjacency")]
        kind: MatrixKind,
    },

    /// Print the visit order from a start vertex
    Traverse {
        /// Edge list or JSON graph document
        input: PathBuf,

        /// Start vertex label
        #[arg(long)]
        from: String,

        /// Traversal order
        #[arg(long, value_enum, default_value = "bfs")]
        order: Order,
    },

    /// Find the cheapest path between two vertices
    Path {
        /// Edge list or JSON graph document
        input: PathBuf,

        /// Start vertex label
        #[arg(long)]
        from: String,

        /// Target vertex label
        #[arg(long)]
        to: String,
    },

    /// Print a topological order of a directed graph
    Topo {
        /// Edge list or JSON graph document
        input: PathBuf,
    },

    /// Export graph to various formats
    Export {
        /// Edge list or JSON graph document
        input: PathBuf,

        /// Output format (dot, json); defaults to the configured format
        #[arg(short, long)]
        format: Option<String>,

        /// Output file (stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show the effective configuration
    Config,

    /// Generate shell completions
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        shell: clap_complete::Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = config::load(cli.config.as_deref())?;
    if cli.directed || cli.undirected {
        config.directed = cli.directed;
    }
    if cli.weighted || cli.unweighted {
        config.weighted = cli.weighted;
    }

    // Initialize logging
    let level = match cli.verbose {
        0 if cli.quiet => "error",
        0 => config.log_level.as_str(),
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let options = config.graph_options();

    // Execute command
    match cli.command {
        Commands::Show { input } => commands::show::run(&input, options),
        Commands::Matrix { input, kind } => commands::matrix::run(&input, kind, options),
        Commands::Traverse { input, from, order } => {
            commands::traverse::run(&input, &from, order, options)
        }
        Commands::Path { input, from, to } => commands::path::run(&input, &from, &to, options),
        Commands::Topo { input } => commands::topo::run(&input, options),
        Commands::Export {
            input,
            format,
            output,
        } => {
            let format = format.unwrap_or_else(|| config.format.clone());
            commands::export::run(&input, &format, output, options)
        }
        Commands::Config => commands::config::run(&config),
        Commands::Completions { shell } => commands::completions::run(shell, &mut Cli::command()),
    }
}
