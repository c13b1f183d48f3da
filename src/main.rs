//! CLI entry point for newsbox

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "newsbox")]
#[command(version)]
#[command(about = "Compile markdown news posts and preview the news widget", long_about = None)]
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
    /// Compile markdown sources into the news document
    #[command(alias = "c")]
    Compile,

    /// Compile, then serve the site directory
    #[command(alias = "s")]
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "4000")]
        port: u16,

        /// IP address to bind to
        #[arg(short, long, default_value = "localhost")]
        ip: String,
    },

    /// Fetch the news document and print the rendered regions
    View {
        /// URL of the news document (defaults to the local server path)
        #[arg(short, long)]
        url: Option<String>,

        /// Slug to select before rendering
        #[arg(short, long)]
        select: Option<String>,
    },

    /// List the records the compiler would emit
    List,

    /// Delete the compiled news document
    Clean,

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "newsbox=debug,info"
    } else {
        "newsbox=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = cli.cwd.unwrap_or_else(|| std::env::current_dir().unwrap());

    match cli.command {
        Commands::Compile => {
            let app = newsbox::Newsbox::new(&base_dir)?;
            tracing::info!("Compiling news document...");
            app.compile()?;
            println!("Compiled successfully!");
        }

        Commands::Serve { port, ip } => {
            let app = newsbox::Newsbox::new(&base_dir)?;

            // Compile first so the served document is current
            tracing::info!("Compiling news document...");
            app.compile()?;

            tracing::info!("Starting server at http://{}:{}", ip, port);
            newsbox::server::start(&app, &ip, port).await?;
        }

        Commands::View { url, select } => {
            let app = newsbox::Newsbox::new(&base_dir)?;
            newsbox::commands::view::run(&app, url.as_deref(), select.as_deref()).await?;
        }

        Commands::List => {
            let app = newsbox::Newsbox::new(&base_dir)?;
            newsbox::commands::list::run(&app)?;
        }

        Commands::Clean => {
            let app = newsbox::Newsbox::new(&base_dir)?;
            tracing::info!("Cleaning compiled output...");
            app.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::Version => {
            println!("newsbox version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
