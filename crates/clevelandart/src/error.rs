// SPDX-License-Identifier: GPL-3.0-or-later

use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClevelandArtError>;

#[derive(Debug, Error)]
pub enum ClevelandArtError {
    /// The request never completed (DNS, connect, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-success status. The body is not consulted.
    #[error("could not fetch data: {status}")]
    FetchFailed { status: StatusCode },

    #[error("could not decode response: {0}")]
    Decode(#[from] DecodeError),

    #[error("could not serialize query parameters: {0}")]
    Query(#[from] serde_urlencoded::ser::Error),

    /// The HTTP client could not be configured; no request was sent.
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("no matching records")]
    NoMatchingRecords,

    #[error("no record at sampled offset {offset}")]
    NoRecordAtOffset { offset: u64 },
}

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("failed to read response body: {0}")]
    Body(#[source] reqwest::Error),

    #[error("failed to parse response: {0}")]
    Json(#[from] serde_json::Error),
}
