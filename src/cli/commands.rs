//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "metatags")]
#[command(about = "Build HTML head meta, link, Open Graph, Twitter and JSON-LD tags", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Log progress to stderr (overrides METATAGS_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a starter metatags.toml
    Init {
        /// Directory to create it in (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Print the rendered tags
    Render {
        /// Manifest file (default: METATAGS_MANIFEST or nearest metatags.toml)
        #[arg(short, long)]
        manifest: Option<PathBuf>,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print a per-namespace summary instead of markup
        #[arg(short, long)]
        summary: bool,
    },

    /// Insert the rendered tags before </head> in an HTML file
    Inject {
        /// HTML page to modify
        html: PathBuf,

        /// Manifest file (default: METATAGS_MANIFEST or nearest metatags.toml)
        #[arg(short, long)]
        manifest: Option<PathBuf>,

        /// Write the result here instead of modifying the page in place
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Read back a single value (namespace: meta, og, twitter)
    Get {
        namespace: String,

        key: String,

        /// Manifest file (default: METATAGS_MANIFEST or nearest metatags.toml)
        #[arg(short, long)]
        manifest: Option<PathBuf>,
    },
}
