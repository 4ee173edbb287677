use std::process::ExitStatus;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("command failed: {cmd}, source: {source}")]
    CommandFailed { cmd: String, source: std::io::Error },

    #[error("command `{cmd}` exited unsuccessfully: {status}")]
    ExitStatus { cmd: String, status: ExitStatus },

    #[error("command `{cmd}` has no captured {stream}")]
    NotCaptured { cmd: String, stream: &'static str },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
