//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "ftag")]
#[command(about = "Tag arbitrary files with arbitrary strings", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Emit DEBUG-level diagnostics
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Silence everything except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new tag database
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Given a file, print the set of associated tags
    Tags {
        /// The file to list
        file: PathBuf,
    },

    /// Given tags, print the set of matching content keys
    Get {
        /// Tags to match; a file matches if it carries any of them
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        tags: Vec<String>,
    },

    /// Given a file and a tag expression, apply the expression to the file
    Set {
        /// The file to tag
        file: PathBuf,

        /// Tag expression: TAG adds, +TAG adds, -TAG removes
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        tags: Vec<String>,
    },
}
