mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays machine-readable
    let log_filter = format!("nimbus_flags={}", cli.log_level);
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_filter)),
        )
        .init();

    match &cli.command {
        Commands::Check { feature } => commands::check_feature(&cli, *feature),
        Commands::List { query, output_type } => {
            let patterns: Vec<&str> = query.iter().map(|s| s.as_str()).collect();
            commands::list_features(&cli, &patterns, *output_type)
        }
        Commands::Copy { hint, kind, arrow } => commands::print_copy(&cli, *hint, *kind, *arrow),
        Commands::Routes => commands::print_routes(),
    }
}
