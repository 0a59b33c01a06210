// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Compile-time defaults.
//!
//! Runtime overrides come from CLI arguments and their environment variable
//! fallbacks in `cli`. There are no config files.

/// Minimum score, inclusive, for a candidate to be returned.
pub const DEFAULT_THRESHOLD: f64 = 0.1;

/// Address the HTTP server binds to.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Port the HTTP server listens on.
pub const DEFAULT_PORT: u16 = 5000;

/// Model name reported by `GET /health`.
pub const MODEL_NAME: &str = "simple-cosine-similarity";

/// Largest accepted request body. Word lists of a few thousand entries fit
/// comfortably.
pub const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Log filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "hintrank=info,tower_http=info";
