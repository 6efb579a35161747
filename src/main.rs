use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use selah::app::AppContext;
use selah::cli::{commands, Cli, Commands};
use selah::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let mut config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Serve { bind, db } => {
            if let Some(db) = db {
                config.database.path = Some(db);
            }
            let bind = bind.unwrap_or_else(|| config.server.bind.clone());
            let ctx = Arc::new(AppContext::new(&config)?);
            selah::http::serve(ctx, &bind).await?;
        }
        Commands::Chapter {
            book,
            chapter,
            version,
        } => {
            let ctx = AppContext::in_memory(&config)?;
            commands::chapter(&ctx, &book, chapter, &version).await?;
        }
        Commands::Search {
            query,
            version,
            book,
        } => {
            let ctx = AppContext::in_memory(&config)?;
            commands::search(&ctx, &query, &version, book.as_deref()).await?;
        }
        Commands::Votd => {
            let ctx = AppContext::in_memory(&config)?;
            commands::votd(&ctx).await?;
        }
    }

    Ok(())
}
