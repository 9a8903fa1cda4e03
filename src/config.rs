use crate::domain::error::DomainError;

pub const DEFAULT_ARTIFACTS: &str = "./artifacts/bookrec.db";
pub const DEFAULT_USER_LOG: &str = "./users/user_logs.csv";

/// Runtime settings, read from `BOOKREC_*` environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// SQLite database holding the catalog and feature vectors.
    pub artifacts_path: String,
    /// CSV file the interaction log lives in.
    pub user_log_path: String,
    /// Fixed seed for shuffling a user's seed titles; random when absent.
    pub shuffle_seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            artifacts_path: DEFAULT_ARTIFACTS.into(),
            user_log_path: DEFAULT_USER_LOG.into(),
            shuffle_seed: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, DomainError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, DomainError> {
        let defaults = Self::default();
        let shuffle_seed = match lookup("BOOKREC_SHUFFLE_SEED").filter(|s| !s.trim().is_empty()) {
            Some(raw) => Some(raw.trim().parse::<u64>().map_err(|e| {
                DomainError::InvalidInput(format!("BOOKREC_SHUFFLE_SEED must be an unsigned integer: {e}"))
            })?),
            None => None,
        };

        Ok(Self {
            artifacts_path: lookup("BOOKREC_ARTIFACTS").unwrap_or(defaults.artifacts_path),
            user_log_path: lookup("BOOKREC_USER_LOG").unwrap_or(defaults.user_log_path),
            shuffle_seed,
        })
    }

    pub fn with_overrides(mut self, artifacts: Option<String>, user_log: Option<String>) -> Self {
        if let Some(path) = artifacts {
            self.artifacts_path = path;
        }
        if let Some(path) = user_log {
            self.user_log_path = path;
        }
        self
    }
}
