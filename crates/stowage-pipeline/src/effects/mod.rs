//! I/O operations: the staging processes and the remote promotion.
//!
//! Remote writes go through [`RemoteStore`] so the promotion sequence can be
//! exercised without a real object store; [`Rclone`] is the production
//! implementation.

mod promote;
mod remote;
mod stage;

pub use promote::promote;
pub use remote::{Rclone, RemoteStore};
pub use stage::run_stages;
