use crate::modules::transitions::core::decision::DecisionStatus;
use std::path::PathBuf;
use thiserror::Error;

pub const DEFAULT_STATUS_VAR: &str = "TRANSITION_GATE_DEFAULT_STATUS";
pub const RULES_PATH_VAR: &str = "TRANSITION_GATE_RULES_PATH";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} has unsupported value {value:?} (expected allow, deny or pending_approval)")]
    InvalidStatus { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    /// Status used when no rule matches a pending transition.
    pub default_status: DecisionStatus,
    pub rules_path: Option<PathBuf>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            default_status: DecisionStatus::Allow,
            rules_path: None,
        }
    }
}

impl ShellConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Blank values are treated as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let default_status = match read(DEFAULT_STATUS_VAR) {
            Some(value) => value
                .trim()
                .parse::<DecisionStatus>()
                .map_err(|_| ConfigError::InvalidStatus {
                    var: DEFAULT_STATUS_VAR,
                    value,
                })?,
            None => DecisionStatus::Allow,
        };

        Ok(Self {
            default_status,
            rules_path: read(RULES_PATH_VAR).map(PathBuf::from),
        })
    }
}
