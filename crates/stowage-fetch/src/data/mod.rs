//! Immutable data types handed between the requester and the pipeline.

pub mod options;
pub mod stream;

pub use options::{Credentials, RequestOptions};
pub use stream::{BackupStream, BodyStream, BoxStream, PendingTrailers, TrailerSender, trailer_channel};
