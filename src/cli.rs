//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands;

/// todos - serve a todo resource over HTTP
#[derive(Parser, Debug)]
#[command(
    name = "todos",
    version,
    about = "Serve a todo resource over HTTP",
    long_about = "Serve a todo resource over HTTP.\n\n\
                  Todos are addressed by path (/todos/{id}/{property}) and every\n\
                  update returns a refreshed bearer token for the caller."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file (defaults to $TODOS_CONFIG, then ~/.todos/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Interface to bind (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind (overrides config)
        #[arg(short, long)]
        port: Option<u16>,

        /// Number of worker threads (overrides config)
        #[arg(short, long)]
        workers: Option<usize>,
    },

    /// Print the effective configuration
    Config {
        /// Output as JSON instead of TOML
        #[arg(long)]
        json: bool,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let config = cli.config.as_deref();
    match cli.command {
        Some(Command::Serve {
            host,
            port,
            workers,
        }) => commands::serve(config, &commands::ServeOverrides { host, port, workers }),
        Some(Command::Config { json }) => commands::show_config(config, json),
        Some(Command::Version) => {
            println!("todos v{}", todos::VERSION);
            Ok(())
        },
        None => {
            println!("todos v{}", todos::VERSION);
            println!("\nRun 'todos --help' for usage");
            println!("Run 'todos serve' to start the server");
            Ok(())
        },
    }
}
