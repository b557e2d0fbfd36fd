use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "llmcat",
    version,
    about = "Describe, order, and render LLM model catalogs",
    propagate_version = true
)]
pub struct Cli {
    /// Override a configuration value, e.g. `--config catalog.show_hidden=true`
    #[arg(long = "config", value_name = "KEY=VALUE", global = true)]
    pub config_overrides: Vec<String>,

    /// Workspace directory containing llmcat.toml
    #[arg(long, value_name = "DIR", global = true)]
    pub workspace: Option<PathBuf>,

    /// Disable ANSI colors
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Inspect the model catalog
    Models {
        #[command(subcommand)]
        command: ModelCommands,
    },

    /// Render a source file as a highlighted code container
    Highlight {
        /// File to highlight
        file: PathBuf,

        /// Language name or extension; inferred from the file name when omitted
        #[arg(long, value_name = "TOKEN")]
        lang: Option<String>,

        /// Bundled syntect theme
        #[arg(long, value_name = "NAME")]
        theme: Option<String>,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum ModelCommands {
    /// Describe a vendor model listing in display order
    List {
        /// JSON listing to read; `-` or omitted reads stdin
        #[arg(long, value_name = "FILE")]
        input: Option<PathBuf>,

        /// Include hidden and legacy models
        #[arg(long)]
        all: bool,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Resolve a single model identifier
    Info {
        id: String,

        /// Creation time to attach, in unix seconds
        #[arg(long, default_value_t = 0)]
        created: i64,

        #[arg(long)]
        json: bool,
    },

    /// Print every built-in catalog entry, aliases marked
    Catalog {
        #[arg(long)]
        json: bool,
    },
}
