//! Configuration loading for Committed.
//!
//! ```toml
//! [view]
//! focus = "author"          # author | emoji | summary
//! compatibility = "kitty"   # default | ttyd | kitty
//! colour = "dark"           # adaptive | dark | light
//! theme = "dracula"
//!
//! [commit]
//! signoff = true
//!
//! [[authors]]
//! name = "Jane Doe"
//! email = "jane@example.com"
//! ```
//!
//! Enumerated options never fail to parse; unknown tokens become `Unset`.

use std::{
    env, fs, io,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use thiserror::Error;

use committed_types::{Author, Colour, Compatibility, Focus};

const CONFIG_ENV: &str = "COMMITTED_CONFIG";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CommittedConfig {
    pub view: ViewConfig,
    pub commit: CommitConfig,
    pub authors: Vec<AuthorConfig>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub focus: Focus,
    pub compatibility: Compatibility,
    pub colour: Colour,
    /// Initial theme id. Unknown ids leave the default theme in place.
    pub theme: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CommitConfig {
    /// Append a `Signed-off-by` trailer by default.
    pub signoff: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthorConfig {
    pub name: String,
    pub email: String,
}

impl From<&AuthorConfig> for Author {
    fn from(value: &AuthorConfig) -> Self {
        Author::new(value.name.clone(), value.email.clone())
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

impl CommittedConfig {
    /// Load from the default location. A missing file is `Ok(None)`.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(None),
        }
    }

    /// Load from an explicit path. A missing file is `Ok(None)`.
    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file");
            return Ok(None);
        }

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Ok(Some(config)),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    /// Authors configured in addition to the repository's own user.
    #[must_use]
    pub fn authors(&self) -> Vec<Author> {
        self.authors
            .iter()
            .filter(|a| !a.name.is_empty() || !a.email.is_empty())
            .map(Author::from)
            .collect()
    }
}

fn config_path() -> Option<PathBuf> {
    if let Ok(path) = env::var(CONFIG_ENV)
        && !path.trim().is_empty()
    {
        return Some(PathBuf::from(path));
    }
    dirs::config_dir().map(|dir| dir.join("committed").join("config.toml"))
}
