use std::ffi::OsStr;
use std::process::{ExitStatus, Stdio};

use tokio::process::{ChildStdin, ChildStdout};
use tracing::debug;

use crate::error::{Error, Result};

/// Builder for an external tool invocation.
///
/// Keeps a printable command line next to the underlying
/// `tokio::process::Command` so errors and logs can name what ran.
#[derive(Debug)]
pub struct Command {
    inner:   tokio::process::Command,
    program: String,
    line:    String,
}

impl Command {
    pub fn new(program: impl Into<String>) -> Self {
        let program = program.into();
        Self {
            inner: tokio::process::Command::new(&program),
            line: program.clone(),
            program,
        }
    }

    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        let arg = arg.as_ref();
        self.line.push(' ');
        self.line.push_str(&arg.to_string_lossy());
        self.inner.arg(arg);
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        for arg in args {
            self = self.arg(arg);
        }
        self
    }

    pub fn stdin(mut self, cfg: impl Into<Stdio>) -> Self {
        self.inner.stdin(cfg);
        self
    }

    pub fn stdout(mut self, cfg: impl Into<Stdio>) -> Self {
        self.inner.stdout(cfg);
        self
    }

    pub fn stderr(mut self, cfg: impl Into<Stdio>) -> Self {
        self.inner.stderr(cfg);
        self
    }

    pub fn program(&self) -> &str { &self.program }

    pub fn command_line(&self) -> &str { &self.line }

    pub fn spawn(mut self) -> Result<Child> {
        debug!(command = %self.line, "spawning");
        let inner = self.inner.spawn().map_err(|e| Error::CommandFailed {
            cmd:    self.line.clone(),
            source: e,
        })?;
        Ok(Child {
            inner,
            cmd: self.line,
        })
    }

    /// Spawn the command and wait for it, mapping a non-zero exit to
    /// [`Error::ExitStatus`].
    pub async fn status(self) -> Result<()> { self.spawn()?.wait().await }
}

/// A running tool started from [`Command::spawn`].
#[derive(Debug)]
pub struct Child {
    inner: tokio::process::Child,
    cmd:   String,
}

impl Child {
    pub fn command_line(&self) -> &str { &self.cmd }

    pub fn take_stdin(&mut self) -> Result<ChildStdin> {
        self.inner.stdin.take().ok_or_else(|| Error::NotCaptured {
            cmd:    self.cmd.clone(),
            stream: "stdin",
        })
    }

    pub fn take_stdout(&mut self) -> Result<ChildStdout> {
        self.inner.stdout.take().ok_or_else(|| Error::NotCaptured {
            cmd:    self.cmd.clone(),
            stream: "stdout",
        })
    }

    /// Detach the captured stdout so it can become another command's stdin.
    pub fn pipe_stdout(&mut self) -> Result<Stdio> {
        let stdout = self.take_stdout()?;
        Ok(stdout.try_into()?)
    }

    pub async fn wait(mut self) -> Result<()> {
        let status = self.inner.wait().await.map_err(|e| Error::CommandFailed {
            cmd:    self.cmd.clone(),
            source: e,
        })?;
        check_status(&self.cmd, status)
    }
}

fn check_status(cmd: &str, status: ExitStatus) -> Result<()> {
    if status.success() {
        debug!(command = %cmd, "exited successfully");
        Ok(())
    } else {
        Err(Error::ExitStatus {
            cmd: cmd.to_string(),
            status,
        })
    }
}
