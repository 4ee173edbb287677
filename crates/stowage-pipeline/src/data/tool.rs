use serde::{Deserialize, Serialize};
use stowage_platform::Command;

/// An external program plus the arguments it always receives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolSpec {
    pub program: String,
    #[serde(default)]
    pub args:    Vec<String>,
}

impl ToolSpec {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args:    args.into_iter().map(Into::into).collect(),
        }
    }

    /// `gzip -c`, compressing stdin to stdout.
    pub fn gzip() -> Self { Self::new("gzip", ["-c"]) }

    pub fn command(&self) -> Command { Command::new(&self.program).args(&self.args) }
}

impl Default for ToolSpec {
    fn default() -> Self { Self::gzip() }
}
