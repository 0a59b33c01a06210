// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! HTTP request handlers.

use axum::extract::rejection::JsonRejection;
use axum::Json;

use super::errors::ApiError;
use super::models::{HealthResponse, SimilarRequest, SimilarResponse};
use crate::config::MODEL_NAME;
use crate::rank::rank_candidates;

/// `POST /similar`: rank `words` against `query`.
pub async fn similar(
    payload: Result<Json<SimilarRequest>, JsonRejection>,
) -> Result<Json<SimilarResponse>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::debug!(error = %rejection, "rejected /similar body");
        ApiError::from(rejection)
    })?;

    let threshold = request.threshold();
    let query = request.query.unwrap_or_default();
    let words = request.words.unwrap_or_default();

    let ranking = rank_candidates(&query, &words, threshold).map_err(|err| {
        tracing::debug!(error = %err, "invalid /similar request");
        ApiError::from(err)
    })?;

    tracing::debug!(
        query = %query,
        candidates = words.len(),
        threshold,
        kept = ranking.count,
        "ranked candidates"
    );

    Ok(Json(ranking.into()))
}

/// `GET /health`: liveness probe. Touches no scoring code.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        model: MODEL_NAME.to_string(),
    })
}
