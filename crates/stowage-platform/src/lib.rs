//! Child process plumbing for stowage pipeline stages.
//!
//! External tools (the compressor, the remote-copy client) are opaque
//! processes: bytes in on stdin, bytes out on stdout, diagnostics on stderr,
//! and an exit status that is the only success signal. [`Command`] wraps
//! `tokio::process::Command` so that every failure carries the command line
//! that produced it.

pub use command::{Child, Command};
pub use error::{Error, Result};

mod command;
mod error;
