//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueHint};

/// Heterogeneous tagged tree with interactive first-match search by tag
#[derive(Parser, Debug)]
#[command(name = "tagtree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub debug: u8,

    /// Config file layered over the global config
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Seed for reproducible node values
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Length of random text values
    #[arg(long, global = true)]
    pub text_len: Option<usize>,

    /// Do not print nodes while the tree is constructed
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Prompt for tags until the sentinel (default)
    Search,

    /// Print every node in pre-order
    Dump,

    /// Show the hierarchy as a tree
    Tree,

    /// Look up a single tag
    Find {
        /// Tag to look up (one character)
        #[arg(value_parser = parse_tag_arg)]
        tag: char,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective config
    Show,

    /// Print config template
    Template,

    /// Show global config path
    Path,
}

fn parse_tag_arg(s: &str) -> Result<char, String> {
    crate::config::parse_tag(s).ok_or_else(|| format!("expected a single character, got {:?}", s))
}
