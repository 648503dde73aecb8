// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::search::client::TransportError;
use std::any::Any;
use thiserror::Error;

pub const UNKNOWN_ERROR_MESSAGE: &str = "An unknown error occurred";

/// Why a search ended in failure.
///
/// The `Display` output is the message shown to the user.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SearchFailure {
    /// Non-2xx response
    #[error("Search failed with status: {0}")]
    HttpStatus(u16),
    /// Connectivity, DNS, TLS or body read failure
    #[error("{0}")]
    Network(String),
    /// Body was not the expected JSON document
    #[error("{0}")]
    Parse(String),
    /// Any other failure that carried a message
    #[error("{0}")]
    Known(String),
    #[error("An unknown error occurred")]
    Unknown,
}

impl SearchFailure {
    /// Normalizes a panic payload caught on the fetch path.
    ///
    /// String payloads keep their message, anything else becomes [`SearchFailure::Unknown`].
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        if let Some(message) = payload.downcast_ref::<&'static str>() {
            SearchFailure::Known((*message).to_string())
        } else if let Some(message) = payload.downcast_ref::<String>() {
            SearchFailure::Known(message.clone())
        } else {
            SearchFailure::Unknown
        }
    }
}

impl From<TransportError> for SearchFailure {
    fn from(err: TransportError) -> Self {
        SearchFailure::Network(err.to_string())
    }
}

impl From<serde_json::Error> for SearchFailure {
    fn from(err: serde_json::Error) -> Self {
        SearchFailure::Parse(err.to_string())
    }
}
