//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "dumpr")]
#[command(about = "Quick-capture notes with inline #tags, search and autosave", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new workspace
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Dump a note (use '-' to read it from stdin)
    Add {
        /// Note text; words are joined with spaces
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },

    /// List entries, newest first, optionally filtered by a search query
    List {
        /// Search words matched against content, title and tags
        query: Vec<String>,

        /// Show at most this many entries
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Show one entry
    Show {
        /// Entry id or unique id prefix
        id: String,
    },

    /// Edit an entry in your editor with autosave
    Edit {
        /// Entry id or unique id prefix
        id: String,

        /// Replace the content directly instead of opening an editor
        #[arg(long)]
        content: Option<String>,
    },

    /// Delete an entry permanently
    Delete {
        /// Entry id or unique id prefix
        id: String,

        /// Confirm the deletion
        #[arg(short, long)]
        yes: bool,
    },

    /// List tags with usage counts
    Tags,

    /// Suggest tags for text being typed
    Suggest {
        /// Text typed so far
        #[arg(allow_hyphen_values = true)]
        text: String,

        /// Cursor position in characters (default: end of text)
        #[arg(long)]
        cursor: Option<usize>,

        /// Insert this tag at the cursor and print the resulting text
        #[arg(long)]
        pick: Option<String>,

        /// Maximum number of suggestions (default: from config)
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Export all entries to a JSON file
    Export {
        /// Output file (default: dumpr-export-YYYY-MM-DD.json)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the export document instead of writing a file
        #[arg(long, conflicts_with = "output")]
        stdout: bool,
    },

    /// Import entries from a JSON export, newest update wins
    Import {
        /// Export file or JSON array of entries
        file: PathBuf,

        /// Confirm merging into this workspace
        #[arg(short, long)]
        yes: bool,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
