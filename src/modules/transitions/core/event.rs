use crate::shared::core::primitives::EmptyField;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
    /// The transition has been requested but not applied; it may still be blocked.
    BeforeTransition,
    /// The transition is already committed.
    AfterTransition,
}

impl EventType {
    pub fn as_str(self) -> &'static str {
        match self {
            EventType::BeforeTransition => "before_transition",
            EventType::AfterTransition => "after_transition",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventType {
    type Err = EventError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "before_transition" => Ok(EventType::BeforeTransition),
            "after_transition" => Ok(EventType::AfterTransition),
            other => Err(EventError::UnsupportedEventType(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EventError {
    #[error("invalid event: {0}")]
    InvalidEvent(#[from] EmptyField),

    #[error("unsupported event type: {0:?}")]
    UnsupportedEventType(String),
}

/// A validated lifecycle transition event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionEvent {
    pub event_type: EventType,
    pub organization_id: String,
    pub project_id: String,
    pub metadata: BTreeMap<String, String>,
    /// Epoch milliseconds at which the event reached the classifier.
    pub received_at: i64,
}
