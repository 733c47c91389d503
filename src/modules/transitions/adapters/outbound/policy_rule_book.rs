use crate::modules::transitions::adapters::outbound::policy::{
    PolicyError, PolicyVerdict, TransitionPolicy,
};
use crate::modules::transitions::core::decision::DecisionStatus;
use crate::modules::transitions::core::event::TransitionEvent;
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// One entry of a rule book. Every selector that is set must match the event.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PolicyRule {
    #[serde(default)]
    pub organization_id: Option<String>,
    #[serde(default)]
    pub project_id: Option<String>,
    #[serde(default)]
    pub metadata: BTreeMap<String, String>,
    /// Inclusive, epoch milliseconds.
    #[serde(default)]
    pub active_from: Option<i64>,
    /// Exclusive, epoch milliseconds.
    #[serde(default)]
    pub active_until: Option<i64>,
    pub status: DecisionStatus,
    #[serde(default)]
    pub reason: Option<String>,
}

impl PolicyRule {
    pub fn matches(&self, event: &TransitionEvent) -> bool {
        let organization = self
            .organization_id
            .as_deref()
            .is_none_or(|id| id == event.organization_id);
        let project = self
            .project_id
            .as_deref()
            .is_none_or(|id| id == event.project_id);
        let metadata = self
            .metadata
            .iter()
            .all(|(key, value)| event.metadata.get(key) == Some(value));
        let window = self.active_from.is_none_or(|from| event.received_at >= from)
            && self
                .active_until
                .is_none_or(|until| event.received_at < until);

        organization && project && metadata && window
    }
}

#[derive(Debug, Error)]
pub enum RuleBookError {
    #[error("failed to read rule book {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse rule book {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

#[derive(Deserialize)]
struct RuleBookFile {
    #[serde(default)]
    default_status: Option<DecisionStatus>,
    #[serde(default)]
    rules: Vec<PolicyRule>,
}

/// Ordered rules; the first match decides, otherwise `default_status` applies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleBook {
    pub default_status: DecisionStatus,
    pub rules: Vec<PolicyRule>,
}

impl RuleBook {
    pub fn new(default_status: DecisionStatus) -> Self {
        Self {
            default_status,
            rules: Vec::new(),
        }
    }

    pub fn with_rule(mut self, rule: PolicyRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// `fallback_status` is used when the document does not set `default_status`.
    pub fn from_json_str(
        raw: &str,
        fallback_status: DecisionStatus,
    ) -> Result<Self, serde_json::Error> {
        let file: RuleBookFile = serde_json::from_str(raw)?;
        Ok(Self {
            default_status: file.default_status.unwrap_or(fallback_status),
            rules: file.rules,
        })
    }

    pub fn from_json_file(
        path: &Path,
        fallback_status: DecisionStatus,
    ) -> Result<Self, RuleBookError> {
        let raw = std::fs::read_to_string(path).map_err(|source| RuleBookError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw, fallback_status).map_err(|source| RuleBookError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn evaluate(&self, event: &TransitionEvent) -> PolicyVerdict {
        match self.rules.iter().position(|rule| rule.matches(event)) {
            Some(index) => {
                let rule = &self.rules[index];
                tracing::debug!(
                    rule = index,
                    status = %rule.status,
                    organization_id = %event.organization_id,
                    project_id = %event.project_id,
                    "policy rule matched"
                );
                PolicyVerdict::new(rule.status, rule.reason.clone())
            }
            None => PolicyVerdict::new(self.default_status, None),
        }
    }
}

pub struct RuleBookPolicy {
    book: RuleBook,
    offline: bool,
}

impl RuleBookPolicy {
    pub fn new(book: RuleBook) -> Self {
        Self {
            book,
            offline: false,
        }
    }

    pub fn toggle_offline(&mut self) {
        self.offline = !self.offline;
    }
}

#[async_trait]
impl TransitionPolicy for RuleBookPolicy {
    async fn evaluate(&self, event: &TransitionEvent) -> Result<PolicyVerdict, PolicyError> {
        if self.offline {
            return Err(PolicyError::Backend("Rule book offline".into()));
        }
        Ok(self.book.evaluate(event))
    }
}
