//! Error types for stowage-fetch.

use std::io;

use http::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid backup host: {0:?}")]
    InvalidHost(String),

    #[error("fail to get backup from {url}: {message}")]
    Network { url: String, message: String },

    #[error("fail to get backup from {url}, code: {status}")]
    HttpStatus { url: String, status: StatusCode },

    #[error("backup stream interrupted: {0}")]
    Stream(#[source] io::Error),
}

pub type Result<T> = std::result::Result<T, FetchError>;
