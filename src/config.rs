//! API key resolution from the environment and the `.rgpt.env` file.

use std::env;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tokio::fs;

use thiserror::Error;

/// Name of the env file looked up under `$HOME`.
pub const ENV_FILE: &str = ".rgpt.env";

/// Environment variable holding the OpenAI API key.
pub const KEY_VAR: &str = "OPENAI_KEY";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
}

impl Config {
    /// Resolve the API key.
    ///
    /// A nonempty `OPENAI_KEY` in the ambient environment wins; otherwise
    /// the key is read from `$HOME/.rgpt.env`.
    pub async fn load() -> Result<Self, ConfigError> {
        if let Ok(key) = env::var(KEY_VAR)
            && !key.is_empty()
        {
            return Ok(Self { api_key: key });
        }
        let home = env::var("HOME").map_err(|_| ConfigError::NoHome)?;
        Self::load_from(Path::new(&home).join(ENV_FILE)).await
    }

    /// Read the API key from an env file at `path`.
    pub async fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = match fs::read_to_string(path).await {
            Ok(c) => c,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(ConfigError::EnvFileNotFound(path.to_path_buf()));
            }
            Err(e) => return Err(ConfigError::Io(e)),
        };
        match api_key_from(&contents) {
            Some(api_key) => Ok(Self { api_key }),
            None => Err(ConfigError::MissingKey(path.to_path_buf())),
        }
    }
}

/// Extract `OPENAI_KEY` from `KEY=VALUE` lines. Blank lines and `#`
/// comments are skipped; surrounding quotes on the value are stripped.
fn api_key_from(contents: &str) -> Option<String> {
    contents
        .lines()
        .find_map(|line| {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                return None;
            }
            let (key, value) = line.split_once('=')?;
            if key.trim() != KEY_VAR {
                return None;
            }
            let value = value.trim().trim_matches(|c| c == '"' || c == '\'');
            Some(value.to_string())
        })
        .filter(|key| !key.is_empty())
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("HOME is not set, cannot locate the env file")]
    NoHome,

    #[error("no env file at {} and {KEY_VAR} is not set", .0.display())]
    EnvFileNotFound(PathBuf),

    #[error("{KEY_VAR} is missing or empty in {}", .0.display())]
    MissingKey(PathBuf),

    #[error("failed to read env file: {0}")]
    Io(#[from] std::io::Error),
}
