//! CLI entry point for learn-page

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "learn-page")]
#[command(version)]
#[command(about = "Server-rendered Learn page backed by the content API", long_about = None)]
struct Cli {
    /// Directory holding _config.yml (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the server
    #[command(alias = "s")]
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "4000")]
        port: u16,

        /// IP address to bind to
        #[arg(short, long, default_value = "localhost")]
        ip: String,

        /// Open browser automatically
        #[arg(short, long)]
        open: bool,
    },

    /// Fetch posts once and write the rendered page
    Render {
        /// Host used for canonical and preview URLs
        #[arg(long, default_value = "localhost")]
        host: String,

        /// Request path used for the canonical URL
        #[arg(long, default_value = "/learn")]
        path: String,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Fetch posts once and list them per category
    List,

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "learn_page=debug,tower_http=debug,info"
    } else {
        "learn_page=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Serve { port, ip, open } => {
            let site = learn_page::LearnSite::new(&base_dir)?;
            tracing::info!(
                endpoint = %site.config.content.endpoint,
                "Starting server at http://{}:{}",
                ip,
                port
            );
            learn_page::server::start(site, &ip, port, open).await?;
        }

        Commands::Render { host, path, output } => {
            let site = learn_page::LearnSite::new(&base_dir)?;
            learn_page::commands::render::run(&site, &host, &path, output.as_deref()).await?;
        }

        Commands::List => {
            let site = learn_page::LearnSite::new(&base_dir)?;
            learn_page::commands::list::run(&site).await?;
        }

        Commands::Version => {
            println!("learn-page version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
