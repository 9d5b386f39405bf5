use clap::{Parser, Subcommand};
use std::path::PathBuf;
use uuid::Uuid;

#[derive(Parser, Debug)]
#[command(name = "knolib")]
#[command(about = "Hierarchical personal knowledge base", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to the library file (default: per-user data directory)
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the topic tree
    #[command(alias = "ls")]
    List,

    /// Show one topic: breadcrumb, content and example summaries
    #[command(alias = "s")]
    Show {
        /// Topic id
        id: Uuid,
    },

    /// Search topics by title, content or tag
    Search {
        /// Search term (case-insensitive substring)
        term: String,
    },

    /// Add a topic, at the root or under a parent
    #[command(alias = "a")]
    Add {
        /// Title of the new topic
        title: String,

        /// Parent topic id (omit for a root topic)
        #[arg(short, long)]
        parent: Option<Uuid>,
    },

    /// Delete a topic and its whole subtree
    Rm {
        /// Topic id
        id: Uuid,
    },

    /// Attach a code example to a topic
    AddExample {
        /// Owning topic id
        topic: Uuid,

        /// Name of the example
        name: String,

        /// Snippet content
        content: String,

        /// Language tag (defaults to "text")
        #[arg(short, long, default_value = "text")]
        language: String,
    },

    /// Copy the library file to a backup
    Backup {
        /// Target path (auto-named next to the library file if omitted)
        path: Option<PathBuf>,
    },

    /// Write the library to an arbitrary JSON file
    Export {
        /// Target path
        path: PathBuf,
    },

    /// Replace the library with the contents of a JSON file
    Import {
        /// Source path
        path: PathBuf,
    },

    /// Print the canonical library file path
    Path,
}
