use std::path::PathBuf;

use anyhow::Context;
use serde::Deserialize;

/// Default cap on simultaneously handled connections.
pub const DEFAULT_MAX_CONNECTIONS: usize = 4;

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Address the listener binds, e.g. "127.0.0.1:8080".
    pub listen_addr: String,
    /// Upper bound on concurrently handled connections.
    pub max_connections: usize,
    /// Directory the web files are preloaded from.
    pub web_root: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:8080".to_string(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            web_root: PathBuf::from("site"),
        }
    }
}

impl Config {
    /// Loads configuration from the YAML file named by `KIOSK_CONFIG`
    /// (default `kiosk.yaml`), then applies env overrides. A missing file
    /// just yields the defaults; a file that fails to parse is an error.
    pub fn load() -> anyhow::Result<Self> {
        let path =
            std::env::var("KIOSK_CONFIG").unwrap_or_else(|_| "kiosk.yaml".to_string());

        let mut cfg: Config = match std::fs::read_to_string(&path) {
            Ok(text) => serde_yaml::from_str(&text)
                .with_context(|| format!("invalid config file {path}"))?,
            Err(_) => Self::default(),
        };

        if let Ok(addr) = std::env::var("KIOSK_LISTEN") {
            cfg.listen_addr = addr;
        }
        if let Ok(max) = std::env::var("KIOSK_MAX_CONNECTIONS") {
            cfg.max_connections = max
                .parse()
                .context("KIOSK_MAX_CONNECTIONS must be an integer")?;
        }
        if let Ok(root) = std::env::var("KIOSK_WEB_ROOT") {
            cfg.web_root = PathBuf::from(root);
        }

        anyhow::ensure!(cfg.max_connections > 0, "max_connections must be at least 1");

        Ok(cfg)
    }
}
