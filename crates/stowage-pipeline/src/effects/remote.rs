use std::future::Future;
use std::path::Path;
use std::process::Stdio;

use stowage_platform::Command;

/// Remote object storage addressed by `remote:path` strings.
///
/// # Implementations
///
/// - [`Rclone`]: production implementation shelling out to `rclone`
/// - Recording stores in tests, asserting the promotion order
pub trait RemoteStore: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Command that writes its stdin to `local`. It terminates the staging
    /// pipeline.
    fn receiver(&self, local: &Path) -> Command;

    /// Copy the local file to `remote`.
    fn upload(&self, local: &Path, remote: &str) -> impl Future<Output = Result<(), Self::Error>> + Send;

    /// Server-side copy of `from` onto `to`, overwriting it.
    fn copy(&self, from: &str, to: &str) -> impl Future<Output = Result<(), Self::Error>> + Send;

    /// Move `from` onto `to`. `from` no longer exists afterwards.
    fn rename(&self, from: &str, to: &str) -> impl Future<Output = Result<(), Self::Error>> + Send;
}

/// The `rclone` client.
///
/// Every invocation is `<program> <args...> <subcommand> <operands...>`, so
/// global flags such as `--config` go into `args`.
///
/// # Examples
///
/// ```
/// use std::path::Path;
///
/// use stowage_pipeline::{Rclone, RemoteStore};
///
/// let rclone = Rclone::default().config_file("/etc/rclone.conf");
/// let receiver = rclone.receiver(Path::new("/tmp/backup.gz"));
/// assert_eq!(receiver.command_line(), "rclone --config /etc/rclone.conf rcat /tmp/backup.gz");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rclone {
    program: String,
    args:    Vec<String>,
}

impl Default for Rclone {
    fn default() -> Self { Self::new("rclone") }
}

impl Rclone {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args:    Vec::new(),
        }
    }

    #[must_use]
    pub fn config_file(mut self, path: impl AsRef<Path>) -> Self {
        self.args.push("--config".to_string());
        self.args.push(path.as_ref().to_string_lossy().into_owned());
        self
    }

    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn program(&self) -> &str { &self.program }

    fn command(&self, subcommand: &str) -> Command {
        Command::new(&self.program)
            .args(&self.args)
            .arg(subcommand)
            .stderr(Stdio::inherit())
    }
}

impl RemoteStore for Rclone {
    type Error = stowage_platform::Error;

    fn receiver(&self, local: &Path) -> Command { self.command("rcat").arg(local) }

    async fn upload(&self, local: &Path, remote: &str) -> Result<(), Self::Error> {
        self.command("copyto").arg(local).arg(remote).status().await
    }

    async fn copy(&self, from: &str, to: &str) -> Result<(), Self::Error> {
        self.command("copyto").arg(from).arg(to).status().await
    }

    async fn rename(&self, from: &str, to: &str) -> Result<(), Self::Error> {
        self.command("moveto").arg(from).arg(to).status().await
    }
}
