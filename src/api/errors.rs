// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! API error types mapped to HTTP status codes.
//!
//! Every variant renders as a JSON body `{"error": "message"}`.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::error::RankError;

/// Message returned when the query or the word list is missing or empty.
pub const MISSING_INPUT_MESSAGE: &str = "Query and words are required";

/// Application-level error type that implements `IntoResponse`.
///
/// - `BadRequest` → 400
/// - `PayloadTooLarge` → 413
/// - `Internal` → 500
#[derive(Debug)]
pub enum ApiError {
    /// Missing fields, empty input, or a body that is not the expected JSON.
    BadRequest(String),
    /// Body exceeds the configured limit.
    PayloadTooLarge(String),
    /// Unexpected server error.
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            ApiError::BadRequest(msg) | ApiError::PayloadTooLarge(msg) | ApiError::Internal(msg) => {
                msg
            }
        };
        (status, axum::Json(json!({ "error": message }))).into_response()
    }
}

impl From<RankError> for ApiError {
    fn from(err: RankError) -> Self {
        if err.is_invalid_request() {
            ApiError::BadRequest(MISSING_INPUT_MESSAGE.to_string())
        } else {
            ApiError::Internal(err.to_string())
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::PayloadTooLarge(rejection.body_text())
        } else {
            ApiError::BadRequest(rejection.body_text())
        }
    }
}
