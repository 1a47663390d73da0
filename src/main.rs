//! CLI entry point for site-rs

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "site-rs")]
#[command(version)]
#[command(about = "A server-rendered personal blog", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
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
    /// Start the web server
    #[command(alias = "s")]
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "4000")]
        port: u16,

        /// IP address to bind to
        #[arg(short, long, default_value = "localhost")]
        ip: String,
    },

    /// Render one page to stdout
    Render {
        /// Route path, like /blog or /blog/my-post
        #[arg(default_value = "/")]
        path: String,
    },

    /// List posts from the content source
    List,

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "site_rs=debug,info"
    } else {
        "site_rs=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Serve { port, ip } => {
            let site = site_rs::Site::new(&base_dir)?;
            tracing::info!("Starting server at http://{}:{}", ip, port);
            site_rs::server::start(&site, &ip, port).await?;
        }

        Commands::Render { path } => {
            let site = site_rs::Site::new(&base_dir)?;
            let status = site_rs::commands::render::run(&site, &path, &mut std::io::stdout()).await?;
            if !status.is_success() {
                tracing::warn!("{} rendered with status {}", path, status);
            }
        }

        Commands::List => {
            let site = site_rs::Site::new(&base_dir)?;
            site_rs::commands::list::run(&site, &mut std::io::stdout()).await?;
        }

        Commands::Version => {
            println!("site-rs version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
