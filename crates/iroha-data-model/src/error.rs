// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Error type for building and reading query messages.

use crate::ids::IdError;
use crate::signing::SignError;
use iroha_schema::{CodecError, EnvelopeError, SchemaError};
use thiserror::Error;

/// Request building and response reading errors.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),

    #[error("Codec error: {0}")]
    Codec(#[from] CodecError),

    #[error("Envelope error: {0}")]
    Envelope(#[from] EnvelopeError),

    #[error("Signing error: {0}")]
    Sign(#[from] SignError),

    #[error("Invalid identifier: {0}")]
    Id(#[from] IdError),

    #[error("Unknown query `{0}`")]
    UnknownQuery(String),

    #[error("Query `{query}` expects {expected} argument(s), got {found}")]
    ArgumentCount {
        query: String,
        expected: usize,
        found: usize,
    },

    #[error("Query `{query}` is missing argument `{argument}`")]
    MissingArgument { query: String, argument: String },

    #[error("Query `{query}` has no argument `{argument}`")]
    UnknownArgument { query: String, argument: String },

    #[error("Unexpected shape for {0}")]
    Malformed(&'static str),
}

pub type Result<T> = std::result::Result<T, RequestError>;
