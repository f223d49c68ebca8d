//! CLI module - Command-line interface for Watchlist
//!
//! This module provides a structured CLI using clap for argument parsing.

mod commands;

use clap::{Parser, Subcommand};

/// Watchlist - a tiny personal movie list
#[derive(Parser)]
#[command(name = "watchlist")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server (default)
    #[command(alias = "run")]
    Serve,

    /// Initialize the database
    Initdb {
        /// Drop existing tables first
        #[arg(long)]
        drop: bool,
    },

    /// Fill the database with demo data
    Forge,

    /// Create or update the user account
    Admin {
        /// Login name (prompted when omitted)
        #[arg(long)]
        username: Option<String>,
        /// Password (prompted when omitted)
        #[arg(long)]
        password: Option<String>,
    },

    /// Create default config file
    Init,
}

pub use commands::*;
