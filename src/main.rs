//! CLI entry point for folio

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use folio::commands::new::NewPost;

#[derive(Parser)]
#[command(name = "folio")]
#[command(version)]
#[command(about = "A file-backed blog engine for a personal portfolio site", long_about = None)]
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
    /// Write a default config and seed the content directory
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// Create a new post
    New {
        /// Title of the new post
        title: String,

        /// Short description shown on the listing page
        #[arg(long)]
        description: String,

        /// Comma-separated categories
        #[arg(long)]
        categories: String,

        /// Markdown body; read from this file when prefixed with '@'
        #[arg(long)]
        content: String,

        /// Print the post instead of writing it
        #[arg(long)]
        dry_run: bool,
    },

    /// List site content
    List {
        /// Type of content to list (post, category, slug)
        #[arg(default_value = "post")]
        r#type: String,
    },

    /// Print a single post as JSON
    Show {
        /// Post slug
        slug: String,
    },

    /// Generate static files
    #[command(alias = "g")]
    Generate {
        /// Watch for file changes
        #[arg(short, long)]
        watch: bool,
    },

    /// Start a local server
    #[command(alias = "s")]
    Server {
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

    /// Clean the public folder
    Clean,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "folio=debug,info"
    } else {
        "folio=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Init { folder } => {
            let target_dir = if folder.is_absolute() {
                folder
            } else {
                base_dir.join(folder)
            };
            tracing::info!("Initializing site in {:?}", target_dir);
            let outcome = folio::commands::init::init_site(&target_dir)?;
            println!("Initialized site in {:?} ({:?})", target_dir, outcome);
        }

        Commands::New {
            title,
            description,
            categories,
            content,
            dry_run,
        } => {
            let site = folio::Folio::new(&base_dir)?;
            let content = match content.strip_prefix('@') {
                Some(path) => std::fs::read_to_string(base_dir.join(path))?,
                None => content,
            };
            let draft = NewPost {
                title,
                description,
                categories,
                content,
            };
            folio::commands::new::run(&site, &draft, dry_run)?;
        }

        Commands::List { r#type } => {
            let site = folio::Folio::new(&base_dir)?;
            site.ensure_seeded()?;
            folio::commands::list::run(&site, &r#type)?;
        }

        Commands::Show { slug } => {
            let site = folio::Folio::new(&base_dir)?;
            site.ensure_seeded()?;
            folio::commands::list::show(&site, &slug)?;
        }

        Commands::Generate { watch } => {
            let site = folio::Folio::new(&base_dir)?;
            tracing::info!("Generating static files...");
            site.generate()?;
            println!("Generated successfully!");

            if watch {
                tokio::task::spawn_blocking(move || folio::commands::generate::watch(&site))
                    .await??;
            }
        }

        Commands::Server { port, ip, open } => {
            let site = folio::Folio::new(&base_dir)?;
            tracing::info!("Starting server at http://{}:{}", ip, port);
            folio::server::start(&site, &ip, port, open).await?;
        }

        Commands::Clean => {
            let site = folio::Folio::new(&base_dir)?;
            tracing::info!("Cleaning public folder...");
            site.clean()?;
            println!("Cleaned successfully!");
        }
    }

    Ok(())
}
