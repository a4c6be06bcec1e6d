//! Configuration for the operations layer.
//!
//! Precedence, lowest to highest: built-in defaults, the JSON config file,
//! environment variables (a `.env` file is honoured), then whatever the caller
//! overrides afterwards (CLI flags).

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::{OpsError, OpsResult};

/// Signup persistence backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreKind {
    /// Keep signups in process memory.
    #[default]
    Memory,
    /// Append signups to a JSON-lines file.
    Jsonl,
    /// Insert signups into a Supabase (PostgREST) table.
    Supabase,
}

impl fmt::Display for StoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StoreKind::Memory => "memory",
            StoreKind::Jsonl => "jsonl",
            StoreKind::Supabase => "supabase",
        })
    }
}

impl FromStr for StoreKind {
    type Err = OpsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(StoreKind::Memory),
            "jsonl" => Ok(StoreKind::Jsonl),
            "supabase" => Ok(StoreKind::Supabase),
            other => Err(OpsError::Config(format!("Unknown store backend: {}", other))),
        }
    }
}

/// Configuration for repmap operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding `stateOptions.json` and `districtToRep.json`.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Directory holding one `{state-key}.svg` per state.
    #[serde(default = "default_states_dir")]
    pub states_dir: PathBuf,

    /// Optional directory of static page assets served at `/`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_dir: Option<PathBuf>,

    /// Port the HTTP service listens on.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Signup persistence backend.
    #[serde(default)]
    pub store: StoreKind,

    /// Output file for the `jsonl` backend.
    #[serde(default = "default_jsonl_path")]
    pub jsonl_path: PathBuf,

    /// Supabase project URL for the `supabase` backend.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supabase_url: Option<String>,

    /// Supabase anon key for the `supabase` backend.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supabase_anon_key: Option<String>,

    /// Table receiving signups.
    #[serde(default = "default_supabase_table")]
    pub supabase_table: String,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_states_dir() -> PathBuf {
    PathBuf::from("states")
}

fn default_port() -> u16 {
    3000
}

fn default_jsonl_path() -> PathBuf {
    ProjectDirs::from("org", "repmap", "repmap")
        .map(|dirs| dirs.data_dir().join("signups.jsonl"))
        .unwrap_or_else(|| PathBuf::from("signups.jsonl"))
}

fn default_supabase_table() -> String {
    "Signups".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            states_dir: default_states_dir(),
            public_dir: None,
            port: default_port(),
            store: StoreKind::default(),
            jsonl_path: default_jsonl_path(),
            supabase_url: None,
            supabase_anon_key: None,
            supabase_table: default_supabase_table(),
        }
    }
}

/// Keys accepted by [`Config::get`] and [`Config::set`].
pub const CONFIG_KEYS: [&str; 9] = [
    "data_dir",
    "states_dir",
    "public_dir",
    "port",
    "store",
    "jsonl_path",
    "supabase_url",
    "supabase_anon_key",
    "supabase_table",
];

impl Config {
    /// Load configuration from disk with environment overrides.
    pub fn load() -> OpsResult<Self> {
        // Load .env file if present (silently ignore if missing)
        let _ = dotenvy::dotenv();

        let config = match Self::config_file_path() {
            Some(path) if path.exists() => {
                let contents = std::fs::read_to_string(&path)?;
                serde_json::from_str(&contents)?
            }
            _ => Self::default(),
        };

        config.with_env(|key| std::env::var(key).ok())
    }

    /// Apply environment overrides using `lookup` to read variables.
    pub fn with_env<F>(mut self, lookup: F) -> OpsResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = lookup("REPMAP_DATA_DIR") {
            self.data_dir = PathBuf::from(dir);
        }
        if let Some(dir) = lookup("REPMAP_STATES_DIR") {
            self.states_dir = PathBuf::from(dir);
        }
        if let Some(dir) = lookup("REPMAP_PUBLIC_DIR") {
            self.public_dir = Some(PathBuf::from(dir));
        }
        if let Some(port) = lookup("REPMAP_PORT") {
            self.set("port", &port)?;
        }
        if let Some(store) = lookup("REPMAP_STORE") {
            self.store = store.parse()?;
        }
        if let Some(path) = lookup("REPMAP_JSONL_PATH") {
            self.jsonl_path = PathBuf::from(path);
        }
        if let Some(url) = lookup("SUPABASE_URL") {
            self.supabase_url = Some(url);
        }
        if let Some(key) = lookup("SUPABASE_ANON_KEY") {
            self.supabase_anon_key = Some(key);
        }
        if let Some(table) = lookup("SUPABASE_TABLE") {
            self.supabase_table = table;
        }
        Ok(self)
    }

    /// Save configuration to disk.
    pub fn save(&self) -> OpsResult<()> {
        if let Some(path) = Self::config_file_path() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let contents = serde_json::to_string_pretty(self)?;
            std::fs::write(&path, contents)?;
        }
        Ok(())
    }

    /// Get the path to the configuration file.
    pub fn config_file_path() -> Option<PathBuf> {
        ProjectDirs::from("org", "repmap", "repmap")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Get a configuration value by key. Secrets are masked.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "data_dir" => Some(self.data_dir.display().to_string()),
            "states_dir" => Some(self.states_dir.display().to_string()),
            "public_dir" => self.public_dir.as_ref().map(|d| d.display().to_string()),
            "port" => Some(self.port.to_string()),
            "store" => Some(self.store.to_string()),
            "jsonl_path" => Some(self.jsonl_path.display().to_string()),
            "supabase_url" => self.supabase_url.clone(),
            "supabase_anon_key" => self.supabase_anon_key.as_ref().map(|_| "***".to_string()),
            "supabase_table" => Some(self.supabase_table.clone()),
            _ => None,
        }
    }

    /// Set a configuration value by key.
    pub fn set(&mut self, key: &str, value: &str) -> OpsResult<()> {
        match key {
            "data_dir" => self.data_dir = PathBuf::from(value),
            "states_dir" => self.states_dir = PathBuf::from(value),
            "public_dir" => self.public_dir = Some(PathBuf::from(value)),
            "port" => {
                self.port = value
                    .parse()
                    .map_err(|_| OpsError::Config(format!("Invalid port: {}", value)))?;
            }
            "store" => self.store = value.parse()?,
            "jsonl_path" => self.jsonl_path = PathBuf::from(value),
            "supabase_url" => self.supabase_url = Some(value.to_string()),
            "supabase_anon_key" => self.supabase_anon_key = Some(value.to_string()),
            "supabase_table" => self.supabase_table = value.to_string(),
            _ => {
                return Err(OpsError::Config(format!("Unknown config key: {}", key)));
            }
        }
        Ok(())
    }
}
