use crate::modules::transitions::adapters::outbound::policy::PolicyVerdict;
use crate::modules::transitions::core::{
    decision::{Decision, DecisionStatus},
    event::{EventType, TransitionEvent},
};

pub const MISSING_VERDICT_REASON: &str = "no policy verdict for pending transition";

/// Turns a validated event and the policy verdict (if one was obtained) into
/// the decision returned to the caller.
///
/// A committed transition is always allowed: the verdict is ignored for
/// `AfterTransition`. A pending transition without a verdict is parked for
/// approval rather than allowed.
pub fn decide_transition(event: &TransitionEvent, verdict: Option<PolicyVerdict>) -> Decision {
    match (event.event_type, verdict) {
        (EventType::AfterTransition, _) => Decision::allow(),
        (EventType::BeforeTransition, Some(verdict)) => {
            Decision::new(verdict.status, verdict.reason)
        }
        (EventType::BeforeTransition, None) => {
            Decision::new(DecisionStatus::PendingApproval, None).with_reason(MISSING_VERDICT_REASON)
        }
    }
}
