//! Honeyscope CLI
//!
//! Main entry point for the honeyscope command-line tool.
//! Answers honey and beekeeping questions from live search or a local corpus.

mod commands;

use clap::{Parser, Subcommand};
use commands::{AskCommand, ChatCommand, ClassifyCommand, FieldCommand, PapersCommand};
use honeyscope_core::{config::AppConfig, logging, AppResult};
use std::path::PathBuf;

/// Honeyscope - honey market, research and beekeeping answers
#[derive(Parser, Debug)]
#[command(name = "honeyscope")]
#[command(about = "Honey market, research and beekeeping answers", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to config file
    #[arg(short, long, global = true, env = "HONEYSCOPE_CONFIG")]
    config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, env = "RUST_LOG")]
    log_level: Option<String>,

    /// Enable verbose output (sets log level to debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    no_color: bool,

    /// Live search endpoint URL
    #[arg(long, global = true, env = "HONEYSCOPE_SEARCH_ENDPOINT")]
    endpoint: Option<String>,

    /// Live search engine name
    #[arg(long, global = true, env = "HONEYSCOPE_SEARCH_ENGINE")]
    engine: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Answer a single query
    Ask(AskCommand),

    /// Show the relevance verdict for a query
    Classify(ClassifyCommand),

    /// List research papers
    Papers(PapersCommand),

    /// Interactive session
    Chat(ChatCommand),

    /// Sample purity and harvest plan
    Field(FieldCommand),
}

#[tokio::main]
async fn main() -> AppResult<()> {
    // Parse command-line arguments first (needed for logging config)
    let cli = Cli::parse();

    // Load base configuration from file and environment
    let config = AppConfig::load_from(cli.config)?;

    // Apply CLI overrides
    let config = config.with_overrides(
        cli.endpoint,
        cli.engine,
        None,
        cli.log_level,
        cli.verbose,
        cli.no_color,
    );
    config.validate()?;

    // Initialize logging with final configuration
    logging::init_logging(config.log_level.as_deref(), config.no_color)?;

    tracing::info!("Honeyscope CLI starting");
    tracing::debug!("Search endpoint: {}", config.search.endpoint);
    tracing::debug!("Search engine: {}", config.search.engine);
    tracing::debug!("Live search configured: {}", config.search.is_configured());

    let command_name = match &cli.command {
        Commands::Ask(_) => "ask",
        Commands::Classify(_) => "classify",
        Commands::Papers(_) => "papers",
        Commands::Chat(_) => "chat",
        Commands::Field(_) => "field",
    };
    let _span = tracing::info_span!("command", name = command_name).entered();

    let result = match cli.command {
        Commands::Ask(cmd) => cmd.execute(&config).await,
        Commands::Classify(cmd) => cmd.execute().await,
        Commands::Papers(cmd) => cmd.execute(&config).await,
        Commands::Chat(cmd) => cmd.execute(&config).await,
        Commands::Field(cmd) => cmd.execute().await,
    };

    match &result {
        Ok(_) => tracing::info!("Command completed successfully"),
        Err(e) => tracing::error!("Command failed: {}", e),
    }

    result
}
