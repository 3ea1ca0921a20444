//! Command-line flags. Every flag maps onto a `CliOverrides` field, the
//! highest-priority config layer.

use std::path::PathBuf;

use clap::Parser;
use eta_core::config::{CliOverrides, SourceKind};

#[derive(Debug, Clone, Parser)]
#[command(name = "eta")]
#[command(version, about = "Track a progress percentage and forecast when it reaches 100%", long_about = None)]
pub struct Cli {
    /// Config file (default: ./eta.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Sample source: "scrape" or "api"
    #[arg(long)]
    pub source: Option<SourceKind>,

    /// URL of the selected source
    #[arg(long)]
    pub url: Option<String>,

    /// History log path
    #[arg(long)]
    pub history: Option<PathBuf>,

    /// HTTP listen port (overrides $PORT)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Seconds between polls
    #[arg(long)]
    pub interval: Option<u64>,

    /// Serve the existing history without polling
    #[arg(long)]
    pub no_poll: bool,

    /// Refuse to load a history log with malformed lines
    #[arg(long)]
    pub strict: bool,
}

impl Cli {
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            config_path: self.config.clone(),
            source_kind: self.source,
            source_url: self.url.clone(),
            history_path: self.history.clone(),
            port: self.port,
            poll_interval_secs: self.interval,
            disable_poller: self.no_poll,
            strict: self.strict,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_flags_override_nothing() {
        let cli = Cli::try_parse_from(["eta"]).unwrap();
        let o = cli.overrides();
        assert!(o.config_path.is_none() && o.port.is_none() && o.source_kind.is_none());
        assert!(!o.disable_poller && !o.strict);
    }

    #[test]
    fn flags_map_to_overrides() {
        let cli = Cli::try_parse_from([
            "eta",
            "--source",
            "api",
            "--url",
            "http://localhost:9000/api",
            "-p",
            "9090",
            "--interval",
            "5",
            "--history",
            "/tmp/h.txt",
            "--no-poll",
            "--strict",
        ])
        .unwrap();
        let o = cli.overrides();
        assert_eq!(o.source_kind, Some(SourceKind::Api));
        assert_eq!(o.source_url.as_deref(), Some("http://localhost:9000/api"));
        assert_eq!(o.port, Some(9090));
        assert_eq!(o.poll_interval_secs, Some(5));
        assert_eq!(o.history_path, Some(PathBuf::from("/tmp/h.txt")));
        assert!(o.disable_poller);
        assert!(o.strict);
    }

    #[test]
    fn unknown_source_is_rejected() {
        assert!(Cli::try_parse_from(["eta", "--source", "rss"]).is_err());
    }
}
