// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Errors raised by the ranking entry point.
//!
//! The scorer itself cannot fail. The only failures are requests that give it
//! nothing to work with.

use thiserror::Error;

/// Rejected ranking request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RankError {
    /// Query is empty after trimming.
    #[error("query must not be empty")]
    EmptyQuery,

    /// Candidate list is empty.
    #[error("candidate list must not be empty")]
    NoCandidates,
}

impl RankError {
    /// Every variant is a caller mistake, never a server fault.
    pub fn is_invalid_request(&self) -> bool {
        matches!(self, RankError::EmptyQuery | RankError::NoCandidates)
    }
}
