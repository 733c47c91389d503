use crate::modules::transitions::core::decision::DecisionStatus;
use crate::modules::transitions::core::event::TransitionEvent;
use async_trait::async_trait;
use thiserror::Error;

/// What the policy collaborator says about a pending transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyVerdict {
    pub status: DecisionStatus,
    pub reason: Option<String>,
}

impl PolicyVerdict {
    pub fn new(status: DecisionStatus, reason: Option<String>) -> Self {
        Self { status, reason }
    }
}

#[derive(Debug, Error)]
pub enum PolicyError {
    #[error("policy backend error: {0}")]
    Backend(String),
}

/// Source of decisions for transitions that have not happened yet.
#[async_trait]
pub trait TransitionPolicy: Send + Sync {
    async fn evaluate(&self, event: &TransitionEvent) -> Result<PolicyVerdict, PolicyError>;
}
