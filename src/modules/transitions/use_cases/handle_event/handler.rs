use crate::modules::transitions::adapters::outbound::policy::{PolicyError, TransitionPolicy};
use crate::modules::transitions::core::decision::Decision;
use crate::modules::transitions::core::event::{EventError, EventType};
use crate::modules::transitions::use_cases::handle_event::command::EventEnvelope;
use crate::modules::transitions::use_cases::handle_event::decide::decide_transition;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HandleEventError {
    #[error(transparent)]
    Event(#[from] EventError),

    #[error(transparent)]
    Policy(#[from] PolicyError),
}

pub struct HandleEventHandler<TPolicy>
where
    TPolicy: TransitionPolicy + Send + Sync + 'static,
{
    policy: Arc<TPolicy>,
}

impl<TPolicy> HandleEventHandler<TPolicy>
where
    TPolicy: TransitionPolicy + Send + Sync + 'static,
{
    pub fn new(policy: Arc<TPolicy>) -> Self {
        Self { policy }
    }

    /// Validates the envelope and decides on it. The policy is only asked
    /// about transitions that have not been committed yet.
    pub async fn classify(
        &self,
        envelope: EventEnvelope,
        received_at: i64,
    ) -> Result<Decision, HandleEventError> {
        let event = envelope.into_event(received_at).inspect_err(|err| {
            tracing::warn!(error = %err, "rejected transition event");
        })?;

        let verdict = match event.event_type {
            EventType::BeforeTransition => {
                let verdict = self.policy.evaluate(&event).await.inspect_err(|err| {
                    tracing::error!(
                        error = %err,
                        organization_id = %event.organization_id,
                        project_id = %event.project_id,
                        "transition policy unavailable"
                    );
                })?;
                Some(verdict)
            }
            EventType::AfterTransition => None,
        };

        let decision = decide_transition(&event, verdict);
        tracing::info!(
            event_type = %event.event_type,
            organization_id = %event.organization_id,
            project_id = %event.project_id,
            status = %decision.status,
            reason = decision.reason.as_deref().unwrap_or_default(),
            "classified transition event"
        );
        Ok(decision)
    }
}
