//! This module defines the command-line interface for the application using
//! `clap`.
//!
//! It provides a `Cli` struct that represents the parsed command-line
//! arguments, and a `Commands` enum that represents the available
//! subcommands and their options.

use clap::{Parser, Subcommand};

/// Represents the parsed command-line arguments.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None, propagate_version = true, color = clap::ColorChoice::Always)]
pub struct Cli {
    /// The parsed subcommand and its options.
    #[command(subcommand)]
    pub command: Commands,
}

/// Represents the available subcommands and their options.
#[derive(Subcommand, Debug)]
#[command(about, long_about = None, color = clap::ColorChoice::Always)]
pub enum Commands {
    /// Answer a single message and exit.
    ///
    /// If the message is not provided on the command line, a default
    /// message is used.
    #[clap(name = "ask", alias = "a")]
    Ask {
        /// The message to respond to.
        message: Option<String>,

        /// Print the reply as JSON (`{"response": ..., "emotion": ...}`).
        #[arg(long)]
        json: bool,
    },

    /// Start a line-oriented conversation on stdin.
    #[clap(name = "chat", alias = "c")]
    Chat,

    /// Create the config directory with a default config and starter
    /// dataset.
    Init,
}
