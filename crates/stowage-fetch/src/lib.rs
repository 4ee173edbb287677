//! Backup stream requests with trailer-gated completion metadata.
//!
//! # Architecture
//!
//! This crate follows the three-layer pattern:
//! - `data` - the [`BackupStream`] handed to the pipeline and the request options
//! - `core` - pure URL preparation
//! - `effects` - the [`BackupSource`] seam and its `reqwest` implementation
//!
//! # Trailers
//!
//! A backup server only learns whether the dump succeeded after it has sent
//! the last byte, so it reports the outcome in HTTP trailers. The body of a
//! [`BackupStream`] is single-pass, and its [`PendingTrailers`] resolve to a
//! header map only after that body has been read to its end. A body that is
//! dropped early, or that fails mid-way, never delivers trailers.

mod core;
mod data;
mod effects;
mod error;

pub use self::core::{DEFAULT_BACKUP_ENDPOINT, DEFAULT_SERVER_PORT, prepare_url};
pub use self::data::{
    BackupStream, BodyStream, BoxStream, Credentials, PendingTrailers, RequestOptions,
    TrailerSender, trailer_channel,
};
pub use self::effects::BackupSource;
pub use self::error::{FetchError, Result};

#[cfg(feature = "reqwest")]
pub use self::effects::HttpSource;
