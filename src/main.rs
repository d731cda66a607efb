use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use audiodeck::app::AppContext;
use audiodeck::cli::{commands, Cli, Commands};
use audiodeck::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;
    let ctx = AppContext::new(&config);

    match cli.command {
        Commands::Home { pages } => {
            commands::show_home(&ctx, pages).await?;
        }
        Commands::Search { query } => {
            commands::run_search(&ctx, &query).await?;
        }
    }

    Ok(())
}
