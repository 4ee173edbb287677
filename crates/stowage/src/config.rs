//! Layered configuration: defaults, then a TOML file, then `STOWAGE_*`
//! environment variables. Nested keys use `__` in the environment, e.g.
//! `STOWAGE_RCLONE__CONFIG_FILE`.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use stowage_fetch::{Credentials, DEFAULT_BACKUP_ENDPOINT, DEFAULT_SERVER_PORT, RequestOptions};
use stowage_pipeline::{BackupOptions, DEFAULT_STAGING_PATH, Rclone, ToolSpec};
use thiserror::Error;

pub const DEFAULT_CONFIG_FILE: &str = "stowage.toml";
pub const ENV_PREFIX: &str = "STOWAGE_";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file {} does not exist", .0.display())]
    Missing(PathBuf),
    #[error(transparent)]
    Figment(#[from] figment::Error),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub backup_user:     Option<String>,
    pub backup_password: Option<String>,
    pub server_port:     u16,
    pub backup_endpoint: String,
    pub staging_path:    PathBuf,
    pub compressor:      ToolSpec,
    pub rclone:          RcloneConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RcloneConfig {
    pub program:     String,
    pub config_file: Option<PathBuf>,
    pub extra_args:  Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backup_user:     None,
            backup_password: None,
            server_port:     DEFAULT_SERVER_PORT,
            backup_endpoint: DEFAULT_BACKUP_ENDPOINT.to_string(),
            staging_path:    PathBuf::from(DEFAULT_STAGING_PATH),
            compressor:      ToolSpec::gzip(),
            rclone:          RcloneConfig::default(),
        }
    }
}

impl Default for RcloneConfig {
    fn default() -> Self {
        Self {
            program:     "rclone".to_string(),
            config_file: None,
            extra_args:  Vec::new(),
        }
    }
}

impl Config {
    /// Load from `path`, or from `stowage.toml` in the working directory if
    /// it exists. An explicit path that does not exist is an error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let file = match path {
            Some(path) if !path.is_file() => return Err(ConfigError::Missing(path.to_path_buf())),
            Some(path) => path,
            None => Path::new(DEFAULT_CONFIG_FILE),
        };
        Self::from_figment(Self::figment(file))
    }

    pub fn figment(file: &Path) -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(file))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    pub fn from_figment(figment: Figment) -> Result<Self, ConfigError> {
        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.compressor.program.trim().is_empty() {
            return Err(ConfigError::Invalid("compressor.program is empty".into()));
        }
        if self.rclone.program.trim().is_empty() {
            return Err(ConfigError::Invalid("rclone.program is empty".into()));
        }
        if !self.backup_endpoint.starts_with('/') {
            return Err(ConfigError::Invalid(format!(
                "backup_endpoint {:?} must start with '/'",
                self.backup_endpoint
            )));
        }
        Ok(())
    }

    pub fn request_options(&self) -> RequestOptions {
        let options = RequestOptions::default()
            .port(self.server_port)
            .endpoint(&self.backup_endpoint);
        match &self.backup_user {
            Some(user) => options.credentials(Credentials::new(
                user,
                self.backup_password.clone().unwrap_or_default(),
            )),
            None => options,
        }
    }

    pub fn backup_options(&self) -> BackupOptions {
        BackupOptions::default()
            .staging_path(&self.staging_path)
            .compressor(self.compressor.clone())
    }

    pub fn rclone(&self) -> Rclone {
        let rclone = Rclone::new(&self.rclone.program);
        let rclone = match &self.rclone.config_file {
            Some(file) => rclone.config_file(file),
            None => rclone,
        };
        rclone.args(self.rclone.extra_args.iter().cloned())
    }
}
