// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Request and response bodies for the REST API.

use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_THRESHOLD;
use crate::rank::Ranking;

/// Request body for `POST /similar`.
///
/// Every field is optional on the wire. Absent or `null` `query`/`words`
/// deserialize to `None` and are rejected by validation with a 400, rather
/// than by the JSON extractor with a serde message.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SimilarRequest {
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub words: Option<Vec<String>>,
    #[serde(default)]
    pub threshold: Option<f64>,
}

impl SimilarRequest {
    pub fn threshold(&self) -> f64 {
        self.threshold.unwrap_or(DEFAULT_THRESHOLD)
    }
}

/// Response body for `POST /similar`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SimilarResponse {
    pub words: Vec<String>,
    pub count: usize,
}

impl From<Ranking> for SimilarResponse {
    fn from(ranking: Ranking) -> Self {
        Self {
            words: ranking.words,
            count: ranking.count,
        }
    }
}

/// Response body for `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub model: String,
}
