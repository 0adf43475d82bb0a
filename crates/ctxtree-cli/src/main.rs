mod commands;

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "ctxtree", about = "Display Docker build context contents in a tree format")]
#[command(version)]
struct Cli {
    /// Directory to analyze
    #[arg(long, short = 'd', default_value = ".")]
    directory: PathBuf,

    /// Maximum depth to display (-1 for unlimited)
    #[arg(long, short = 'l', default_value_t = 1, allow_negative_numbers = true)]
    depth: i32,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    commands::show_context(&cli.directory, cli.depth)
}
