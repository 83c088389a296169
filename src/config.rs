//! Process configuration.
//!
//! Precedence: environment > config file (TOML) > defaults. The file is
//! meant for local runs; deployments set the environment directly.

use crate::errors::AppError;
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

pub const DEFAULT_DB_NAME: &str = "emogo_db";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_CONFIG_FILE: &str = "emogo.toml";

/// Raw values as they appear in the TOML file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub mongodb_uri: Option<String>,
    pub db_name: Option<String>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub static_dir: Option<PathBuf>,
    pub templates_dir: Option<PathBuf>,
}

impl FileConfig {
    /// # Errors
    /// Returns `Config` if the file cannot be read or is not valid TOML.
    pub fn read(path: &Path) -> Result<Self, AppError> {
        let s = std::fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;
        Ok(toml::from_str::<FileConfig>(&s)?)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub mongodb_uri: Option<String>,
    pub db_name: String,
    pub host: String,
    pub port: u16,
    pub static_dir: PathBuf,
    pub templates_dir: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            mongodb_uri: None,
            db_name: DEFAULT_DB_NAME.to_string(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            static_dir: PathBuf::from("static"),
            templates_dir: PathBuf::from("templates"),
        }
    }
}

impl Settings {
    /// Load from the process environment plus an optional config file.
    ///
    /// `cli_path` wins over `EMOGO_CONFIG`; with neither, `./emogo.toml` is
    /// read when it exists.
    ///
    /// # Errors
    /// Returns `Config` for an unreadable named file or a malformed value.
    pub fn load(cli_path: Option<&Path>) -> Result<Self, AppError> {
        let env = |key: &str| std::env::var(key).ok();
        let file = match config_path(cli_path, &env) {
            Some((path, true)) => Some(FileConfig::read(&path)?),
            Some((path, false)) if path.exists() => Some(FileConfig::read(&path)?),
            _ => None,
        };
        Self::from_sources(file, env)
    }

    /// Merge a parsed file with an environment lookup.
    ///
    /// # Errors
    /// Returns `Config` if `PORT` is not a valid port number.
    pub fn from_sources<F>(file: Option<FileConfig>, env: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| env(key).filter(|v| !v.trim().is_empty());
        let file = file.unwrap_or_default();
        let mut s = Settings::default();

        s.mongodb_uri = var("MONGODB_URI").or(file.mongodb_uri).filter(|v| !v.trim().is_empty());
        if let Some(v) = var("DB_NAME").or(file.db_name) {
            s.db_name = v;
        }
        if let Some(v) = var("HOST").or(file.host) {
            s.host = v;
        }
        match var("PORT") {
            Some(p) => {
                s.port = p
                    .trim()
                    .parse()
                    .map_err(|e| AppError::Config(format!("invalid PORT {p:?}: {e}")))?;
            }
            None => {
                if let Some(p) = file.port {
                    s.port = p;
                }
            }
        }
        if let Some(v) = var("EMOGO_STATIC_DIR").map(PathBuf::from).or(file.static_dir) {
            s.static_dir = v;
        }
        if let Some(v) = var("EMOGO_TEMPLATES_DIR").map(PathBuf::from).or(file.templates_dir) {
            s.templates_dir = v;
        }
        Ok(s)
    }

    /// # Errors
    /// Returns `MissingConnectionString` when no URI was configured.
    pub fn connection_string(&self) -> Result<&str, AppError> {
        self.mongodb_uri.as_deref().ok_or(AppError::MissingConnectionString)
    }

    /// # Errors
    /// Returns `Config` if host and port do not form a socket address.
    pub fn bind_addr(&self) -> Result<SocketAddr, AppError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| AppError::Config(format!("invalid bind address {}:{}: {e}", self.host, self.port)))
    }
}

/// Returns the config path and whether it was named explicitly.
fn config_path<F>(cli_path: Option<&Path>, env: &F) -> Option<(PathBuf, bool)>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(p) = cli_path {
        return Some((p.to_path_buf(), true));
    }
    if let Some(p) = env("EMOGO_CONFIG").filter(|p| !p.is_empty()) {
        return Some((PathBuf::from(p), true));
    }
    std::env::current_dir().ok().map(|cur| (cur.join(DEFAULT_CONFIG_FILE), false))
}
