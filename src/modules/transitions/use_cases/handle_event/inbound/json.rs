use chrono::Utc;
use serde::Serialize;
use thiserror::Error;

use crate::modules::transitions::adapters::outbound::policy::TransitionPolicy;
use crate::modules::transitions::core::decision::Decision;
use crate::modules::transitions::core::event::EventError;
use crate::modules::transitions::use_cases::handle_event::command::EventEnvelope;
use crate::modules::transitions::use_cases::handle_event::handler::{
    HandleEventError, HandleEventHandler,
};

#[derive(Debug, Error)]
pub enum InboundError {
    #[error("malformed event payload: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error(transparent)]
    Application(#[from] HandleEventError),
}

impl InboundError {
    pub fn code(&self) -> &'static str {
        match self {
            InboundError::Malformed(_) => "malformed_event",
            InboundError::Application(HandleEventError::Event(EventError::InvalidEvent(_))) => {
                "invalid_event"
            }
            InboundError::Application(HandleEventError::Event(
                EventError::UnsupportedEventType(_),
            )) => "unsupported_event_type",
            InboundError::Application(HandleEventError::Policy(_)) => "policy_unavailable",
        }
    }

    /// True when resending the same payload can never succeed.
    pub fn is_caller_error(&self) -> bool {
        !matches!(
            self,
            InboundError::Application(HandleEventError::Policy(_))
        )
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    pub message: String,
}

impl From<&InboundError> for ErrorBody {
    fn from(err: &InboundError) -> Self {
        Self {
            error: err.code(),
            message: err.to_string(),
        }
    }
}

/// Decides on one raw JSON event, stamping it with the current time.
pub async fn handle_event<TPolicy>(
    handler: &HandleEventHandler<TPolicy>,
    raw: &str,
) -> Result<Decision, InboundError>
where
    TPolicy: TransitionPolicy + Send + Sync + 'static,
{
    let envelope: EventEnvelope = serde_json::from_str(raw)?;
    let decision = handler
        .classify(envelope, Utc::now().timestamp_millis())
        .await?;
    Ok(decision)
}
