use std::net::SocketAddr;
use std::time::Duration;

use clap::Parser;

/// Server settings, read from flags or the matching environment variables.
#[derive(Debug, Clone, Parser)]
#[command(name = "injection-demo")]
#[command(version)]
#[command(about = "Side-by-side safe and injectable HTTP endpoints", long_about = None)]
pub struct Config {
    /// Address to listen on
    #[arg(long, env = "DEMO_BIND", default_value = "127.0.0.1:3000")]
    pub bind: SocketAddr,

    /// SQLite connection URL
    #[arg(long, env = "DATABASE_URL", default_value = "sqlite::memory:")]
    pub database_url: String,

    /// Size of the connection pool
    #[arg(long, env = "DEMO_MAX_CONNECTIONS", default_value_t = 5)]
    pub max_connections: u32,

    /// Kill `/vuln/cmd` children after this many seconds (no limit when unset)
    #[arg(long, env = "DEMO_CMD_TIMEOUT_SECS")]
    pub cmd_timeout_secs: Option<u64>,

    /// Disable the permissive CORS layer
    #[arg(long, env = "DEMO_NO_CORS")]
    pub no_cors: bool,
}

impl Config {
    pub fn cmd_timeout(&self) -> Option<Duration> {
        self.cmd_timeout_secs.map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::try_parse_from(["injection-demo"]).unwrap();
        assert_eq!(config.bind, "127.0.0.1:3000".parse::<SocketAddr>().unwrap());
        assert_eq!(config.max_connections, 5);
        assert_eq!(config.cmd_timeout(), None);
        assert!(!config.no_cors);
    }

    #[test]
    fn test_flags() {
        let config = Config::try_parse_from([
            "injection-demo",
            "--bind",
            "0.0.0.0:8080",
            "--database-url",
            "sqlite://demo.db?mode=rwc",
            "--cmd-timeout-secs",
            "10",
            "--no-cors",
        ])
        .unwrap();
        assert_eq!(config.bind.port(), 8080);
        assert_eq!(config.database_url, "sqlite://demo.db?mode=rwc");
        assert_eq!(config.cmd_timeout(), Some(Duration::from_secs(10)));
        assert!(config.no_cors);
    }

    #[test]
    fn test_rejects_bad_bind() {
        assert!(Config::try_parse_from(["injection-demo", "--bind", "nope"]).is_err());
    }
}
