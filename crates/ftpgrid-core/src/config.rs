use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::ListerError;

/// Extensions listed when the config does not name any.
pub const DEFAULT_EXTENSIONS: [&str; 4] = [".png", ".jpg", ".jpeg", ".gif"];

/// Everything the lister needs to reach one directory on one server.
///
/// Loaded from `~/.config/ftpgrid/config.toml`; any missing key takes its default.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListerConfig {
    /// FTP server host name or address.
    pub host: String,
    /// FTP control port.
    pub port: u16,
    pub user: String,
    pub password: String,
    /// Directory to `CWD` into before listing.
    pub directory: String,
    /// Filename suffixes that count as images.
    pub extensions: Vec<String>,
    /// If false, suffixes are compared ASCII-case-insensitively.
    pub case_sensitive: bool,
    /// TCP connect timeout in seconds.
    pub connect_timeout_secs: u64,
}

impl Default for ListerConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 21,
            user: "anonymous".to_string(),
            password: String::new(),
            directory: "images".to_string(),
            extensions: DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            case_sensitive: true,
            connect_timeout_secs: 15,
        }
    }
}

// Password never reaches logs.
impl fmt::Debug for ListerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListerConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &if self.password.is_empty() { "" } else { "***" })
            .field("directory", &self.directory)
            .field("extensions", &self.extensions)
            .field("case_sensitive", &self.case_sensitive)
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .finish()
    }
}

impl ListerConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    /// Overrides host, port, credentials and directory from an
    /// `ftp://[user[:password]@]host[:port][/directory]` location.
    ///
    /// Parts absent from the location keep their current values. Userinfo is
    /// taken as written (no percent-decoding).
    pub fn apply_location(&mut self, location: &str) -> Result<(), ListerError> {
        let invalid = |reason: &str| ListerError::InvalidLocation {
            location: location.to_string(),
            reason: reason.to_string(),
        };

        let parsed = url::Url::parse(location).map_err(|e| invalid(&e.to_string()))?;
        if parsed.scheme() != "ftp" {
            return Err(invalid("scheme must be ftp"));
        }
        let host = parsed.host_str().ok_or_else(|| invalid("missing host"))?;
        self.host = host.to_string();

        if let Some(port) = parsed.port() {
            self.port = port;
        }
        if !parsed.username().is_empty() {
            self.user = parsed.username().to_string();
        }
        if let Some(password) = parsed.password() {
            self.password = password.to_string();
        }
        let dir = parsed.path().trim_matches('/');
        if !dir.is_empty() {
            self.directory = dir.to_string();
        }
        Ok(())
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("ftpgrid")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ListerConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = ListerConfig::default();
        let toml = to_toml(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from(&path)
}

pub fn to_toml(cfg: &ListerConfig) -> Result<String> {
    Ok(toml::to_string_pretty(cfg)?)
}

/// Load configuration from an explicit path. The file must exist.
pub fn load_from(path: &Path) -> Result<ListerConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: ListerConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}
