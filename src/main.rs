// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use clap::Parser;
use tracing_subscriber::EnvFilter;

use hintrank::config::DEFAULT_LOG_FILTER;

mod cli;
use cli::Cli;

fn main() {
    init_tracing();

    let cli = Cli::parse();
    if let Err(e) = cli::run(cli) {
        tracing::debug!(error = ?e, "command failed");
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr so `rank` output on stdout stays pipeable.
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
