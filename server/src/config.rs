use std::path::PathBuf;

use clap::Parser;

pub const DEFAULT_PORT: u16 = 8080;

pub const DEFAULT_MAX_SETTLED: u64 = 100_000;

pub const DEFAULT_MAX_MEMORY_MB: u64 = 64;

/// Server settings. Every flag falls back to a `CITYNAV_*` environment variable.
#[derive(Parser, Debug, Clone)]
#[command(name = "citynav-server")]
#[command(about = "Serve city points of interest, routes and shortest paths over HTTP")]
#[command(version)]
pub struct Config {
    /// Address to bind
    #[arg(long, env = "CITYNAV_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// HTTP port to listen on
    #[arg(short, long, env = "CITYNAV_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// JSON seed file with `nodes` and `edges`. Uses the bundled Delhi graph when unset.
    #[arg(long, env = "CITYNAV_SEED")]
    pub seed: Option<PathBuf>,

    /// Maximum nodes a single shortest-path search may settle
    #[arg(
        long,
        env = "CITYNAV_MAX_SETTLED",
        default_value_t = DEFAULT_MAX_SETTLED,
        value_parser = clap::value_parser!(u64).range(1..=10_000_000)
    )]
    pub max_settled: u64,

    /// Refuse to start if the loaded graph exceeds this many megabytes
    #[arg(
        long,
        env = "CITYNAV_MAX_MEMORY_MB",
        default_value_t = DEFAULT_MAX_MEMORY_MB,
        value_parser = clap::value_parser!(u64).range(1..=4096)
    )]
    pub max_memory_mb: u64,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn max_settled(&self) -> usize {
        usize::try_from(self.max_settled).unwrap_or(usize::MAX)
    }

    /// The memory cap in bytes, compared against the graph's exact estimate.
    pub fn max_memory_bytes(&self) -> u64 {
        self.max_memory_mb * 1024 * 1024
    }

    /// Default `EnvFilter` directives when `RUST_LOG` is not set.
    pub fn log_directives(&self) -> &'static str {
        if self.verbose {
            "citynav_server=debug,tower_http=debug"
        } else {
            "citynav_server=info,tower_http=info"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::try_parse_from(["citynav-server"]).unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.max_settled(), 100_000);
        assert_eq!(config.max_memory_mb, 64);
        assert_eq!(config.max_memory_bytes(), 64 * 1_048_576);
        assert!(config.seed.is_none());
        assert!(!config.verbose);
        assert_eq!(config.addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_flags() {
        let config = Config::try_parse_from([
            "citynav-server",
            "--host",
            "127.0.0.1",
            "-p",
            "9000",
            "--seed",
            "city.json",
            "--max-settled",
            "50",
            "-v",
        ])
        .unwrap();
        assert_eq!(config.addr(), "127.0.0.1:9000");
        assert_eq!(config.seed, Some(PathBuf::from("city.json")));
        assert_eq!(config.max_settled(), 50);
        assert_eq!(config.log_directives(), "citynav_server=debug,tower_http=debug");
    }

    #[test]
    fn test_max_settled_out_of_range() {
        assert!(Config::try_parse_from(["citynav-server", "--max-settled", "0"]).is_err());
        assert!(Config::try_parse_from(["citynav-server", "--max-memory-mb", "0"]).is_err());
    }
}
