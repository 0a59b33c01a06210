// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the hintrank command-line interface.
//!
//! Three subcommands: `serve` runs the HTTP API, `rank` ranks words from the
//! command line or a JSON word list, and `score` explains the score of a
//! single pair.

pub mod commands;
pub mod display;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use thiserror::Error;

use hintrank::{RankError, DEFAULT_THRESHOLD};
#[cfg(feature = "server")]
use hintrank::{DEFAULT_HOST, DEFAULT_PORT};

#[derive(Parser)]
#[command(
    name = "hintrank",
    about = "Lexical similarity ranking for word hints",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP API (POST /similar, GET /health)
    #[cfg(feature = "server")]
    Serve {
        /// Address to bind
        #[arg(long, env = "HINTRANK_HOST", default_value = DEFAULT_HOST)]
        host: String,

        /// Port to listen on
        #[arg(short, long, env = "HINTRANK_PORT", default_value_t = DEFAULT_PORT)]
        port: u16,
    },

    /// Rank candidate words against a query
    Rank {
        /// Query to compare against
        query: String,

        /// Candidate words (combined with --words-file when both are given)
        words: Vec<String>,

        /// JSON file containing an array of candidate strings
        #[arg(short = 'f', long)]
        words_file: Option<PathBuf>,

        /// Minimum score to keep (inclusive)
        #[arg(short, long, default_value_t = DEFAULT_THRESHOLD)]
        threshold: f64,

        /// Show each word's score and match tier
        #[arg(short, long)]
        scores: bool,

        /// Print at most this many words
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Explain how a single word scores against a query
    Score {
        /// Query to compare against
        query: String,

        /// Candidate word
        word: String,
    },
}

/// Failures surfaced to the user by `main`.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to read word list {}: {source}", .path.display())]
    ReadWords {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("word list {} is not a JSON array of strings: {source}", .path.display())]
    ParseWords {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Rank(#[from] RankError),

    #[error("invalid listen address '{0}'")]
    Address(String),

    #[error("server error: {0}")]
    Io(#[from] std::io::Error),
}

/// Dispatch a parsed command line.
pub fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        #[cfg(feature = "server")]
        Commands::Serve { host, port } => commands::serve(&host, port),
        Commands::Rank {
            query,
            words,
            words_file,
            threshold,
            scores,
            limit,
        } => commands::rank(commands::RankArgs {
            query,
            words,
            words_file,
            threshold,
            scores,
            limit,
        }),
        Commands::Score { query, word } => {
            commands::score(&query, &word);
            Ok(())
        }
    }
}
