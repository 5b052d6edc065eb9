//! CLI entry point for blog-catalog

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use blog_catalog::commands;
use blog_catalog::content::DataFormat;

#[derive(Parser)]
#[command(name = "blog-catalog")]
#[command(version)]
#[command(about = "Inspect, validate and export a catalog of blog posts", long_about = None)]
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
    /// List posts, featured posts, categories or tags
    #[command(alias = "ls")]
    List {
        /// Type of content to list (post, featured, category, tag)
        #[arg(default_value = "post")]
        r#type: String,

        /// Only posts in this category
        #[arg(long)]
        category: Option<String>,

        /// Only posts with this tag
        #[arg(long)]
        tag: Option<String>,

        /// Newest first by parsed date instead of catalog order
        #[arg(long)]
        by_date: bool,
    },

    /// Show one post by slug or id
    Show {
        /// Post slug, or numeric id when no post has that slug
        key: String,

        /// Treat the key as a numeric id only
        #[arg(long)]
        id: bool,

        /// Also print the HTML content
        #[arg(long)]
        content: bool,
    },

    /// Write the catalog as a loadable data file to stdout
    Export {
        /// Output format (json, yaml)
        #[arg(short, long, default_value = "json")]
        format: String,
    },

    /// Validate a post data file
    Check {
        /// Data file (.json, .yml or .yaml)
        file: PathBuf,

        /// Require every date to parse
        #[arg(long)]
        strict_dates: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "blog_catalog=debug,info"
    } else {
        "blog_catalog=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::List {
            r#type,
            category,
            tag,
            by_date,
        } => {
            let blog = blog_catalog::Blog::new(&base_dir)?;
            let catalog = blog.catalog()?;
            let options = commands::list::ListOptions {
                category,
                tag,
                by_date,
            };
            commands::list::run(&mut out, &catalog, &r#type, &options)?;
        }

        Commands::Show { key, id, content } => {
            let blog = blog_catalog::Blog::new(&base_dir)?;
            let catalog = blog.catalog()?;
            commands::show::run(&mut out, &blog, &catalog, &key, id, content)?;
        }

        Commands::Export { format } => {
            let blog = blog_catalog::Blog::new(&base_dir)?;
            let catalog = blog.catalog()?;
            let format = DataFormat::from_name(&format)?;
            commands::export::run(&mut out, &catalog, format)?;
        }

        Commands::Check { file, strict_dates } => {
            let path = if file.is_absolute() {
                file
            } else {
                base_dir.join(file)
            };
            tracing::info!("Checking {:?}", path);
            commands::check::run(&mut out, &path, strict_dates)?;
        }

        Commands::Version => {
            writeln!(out, "blog-catalog version {}", env!("CARGO_PKG_VERSION"))?;
        }
    }

    Ok(())
}
