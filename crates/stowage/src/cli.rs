use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

#[derive(Clone, Debug, Parser)]
#[command(name = "stowage", version = env!("CARGO_PKG_VERSION"), about, long_about = None, propagate_version = true)]
pub struct App {
    /// TOML configuration file [default: ./stowage.toml when present]
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Stream a backup from a database host and publish it to a bucket
    #[command(alias = "tb", name = "take-backup")]
    TakeBackup(TakeBackupArg),
}

#[derive(Clone, Debug, clap::Args)]
pub struct TakeBackupArg {
    /// Host serving the backup, optionally with a port
    #[arg(value_name = "SRC_HOST")]
    pub src_host: String,

    /// Final object location, e.g. s3://bucket/backups/db.gz
    #[arg(value_name = "DEST_URI")]
    pub dest_uri: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_take_backup() {
        let app = App::try_parse_from(["stowage", "-vv", "take-backup", "db1", "s3://bucket/db.gz"]).unwrap();
        assert_eq!(app.verbose, 2);
        assert!(app.config.is_none());
        let Commands::TakeBackup(arg) = app.cmd;
        assert_eq!(arg.src_host, "db1");
        assert_eq!(arg.dest_uri, "s3://bucket/db.gz");
    }

    #[test]
    fn config_flag_after_subcommand() {
        let app = App::try_parse_from(["stowage", "tb", "db1:3306", "gs://b/x.gz", "--config", "/etc/stowage.toml"])
            .unwrap();
        assert_eq!(app.config, Some(PathBuf::from("/etc/stowage.toml")));
    }

    #[test]
    fn destination_is_required() {
        assert!(App::try_parse_from(["stowage", "take-backup", "db1"]).is_err());
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        App::command().debug_assert();
    }
}
