//! Configuration and credential storage.
//!
//! Handles:
//! - Base URL selection (flag, environment, saved config, default)
//! - Stored API tokens, keyed by normalized base URL
//! - HTTP timeout

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Base URL used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "https://server.x-b-e.com";

/// Configuration file name.
const CONFIG_FILE: &str = "config.json";

/// Credentials file name.
const CREDENTIALS_FILE: &str = "credentials.json";

/// Environment variable overriding the config directory.
const CONFIG_DIR_ENV: &str = "XBE_CONFIG_DIR";

/// Environment variable overriding the HTTP timeout, in seconds.
const TIMEOUT_ENV: &str = "XBE_HTTP_TIMEOUT_SECS";

const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Get the config directory path.
pub fn config_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
        if !dir.trim().is_empty() {
            return Ok(PathBuf::from(dir.trim()));
        }
    }
    ProjectDirs::from("com", "x-b-e", "xbe")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
}

/// Trim whitespace and trailing slashes so `https://a/` and `https://a` share
/// one credential.
pub fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

/// HTTP timeout from `XBE_HTTP_TIMEOUT_SECS`, falling back to 60 seconds.
pub fn http_timeout() -> Duration {
    parse_timeout(std::env::var(TIMEOUT_ENV).ok().as_deref())
}

fn parse_timeout(raw: Option<&str>) -> Duration {
    let secs = raw
        .and_then(|value| value.trim().parse::<u64>().ok())
        .filter(|secs| *secs > 0)
        .unwrap_or(DEFAULT_TIMEOUT_SECS);
    Duration::from_secs(secs)
}

/// CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Saved API base URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

impl Config {
    /// Load config from disk, or return default.
    pub fn load() -> Result<Self> {
        Self::load_in(&config_dir()?)
    }

    pub fn load_in(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE);

        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config from {:?}", path))
    }

    /// Save config to disk.
    pub fn save(&self) -> Result<()> {
        self.save_in(&config_dir()?)
    }

    pub fn save_in(&self, dir: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)?;
        write_private(dir, CONFIG_FILE, &contents)
    }

    /// Pick the base URL: explicit flag or `XBE_BASE_URL`, then saved config,
    /// then the built-in default.
    pub fn resolve_base_url(&self, explicit: Option<&str>) -> String {
        let chosen = explicit
            .filter(|url| !url.trim().is_empty())
            .or(self.base_url.as_deref().filter(|url| !url.trim().is_empty()))
            .unwrap_or(DEFAULT_BASE_URL);
        normalize_base_url(chosen)
    }
}

/// A token saved by `xbe auth login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredCredential {
    /// API token.
    pub token: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    pub saved_at: DateTime<Utc>,
}

impl StoredCredential {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            user_id: None,
            email: None,
            name: None,
            saved_at: Utc::now(),
        }
    }
}

/// Tokens on disk, keyed by normalized base URL.
#[derive(Debug, Clone, Default)]
pub struct CredentialStore {
    path: PathBuf,
    entries: BTreeMap<String, StoredCredential>,
}

impl CredentialStore {
    /// Open the store in the default config directory.
    pub fn open() -> Result<Self> {
        Self::open_in(&config_dir()?)
    }

    pub fn open_in(dir: &Path) -> Result<Self> {
        let path = dir.join(CREDENTIALS_FILE);

        if !path.exists() {
            return Ok(Self {
                path,
                entries: BTreeMap::new(),
            });
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read credentials from {:?}", path))?;
        let entries = if contents.trim().is_empty() {
            BTreeMap::new()
        } else {
            serde_json::from_str(&contents)
                .with_context(|| format!("Failed to parse credentials from {:?}", path))?
        };

        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get(&self, base_url: &str) -> Option<&StoredCredential> {
        self.entries.get(&normalize_base_url(base_url))
    }

    pub fn insert(&mut self, base_url: &str, credential: StoredCredential) {
        self.entries.insert(normalize_base_url(base_url), credential);
    }

    /// Remove the token for `base_url`. Returns whether one was stored.
    pub fn remove(&mut self, base_url: &str) -> bool {
        self.entries.remove(&normalize_base_url(base_url)).is_some()
    }

    pub fn base_urls(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Save credentials to disk.
    pub fn save(&self) -> Result<()> {
        let contents = serde_json::to_string_pretty(&self.entries)?;
        let dir = self
            .path
            .parent()
            .ok_or_else(|| anyhow::anyhow!("Invalid credentials path {:?}", self.path))?;
        write_private(dir, CREDENTIALS_FILE, &contents)
    }
}

/// Write `contents` to `dir/name`, readable only by the owner on Unix.
fn write_private(dir: &Path, name: &str, contents: &str) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create config directory {:?}", dir))?;
    let path = dir.join(name);

    #[cfg(unix)]
    {
        use std::io::Write;
        use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

        let mut file = fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .mode(0o600)
            .open(&path)
            .with_context(|| format!("Failed to open {:?}", path))?;
        file.write_all(contents.as_bytes())
            .with_context(|| format!("Failed to write {:?}", path))?;
        // mode() only applies on create
        fs::set_permissions(&path, fs::Permissions::from_mode(0o600))?;
    }

    #[cfg(not(unix))]
    {
        fs::write(&path, contents).with_context(|| format!("Failed to write {:?}", path))?;
    }

    Ok(())
}
