// Shared test fixtures for transition events.
// The default envelope is read from json/before_transition.json so that the
// fixture matches what a caller actually sends.

use crate::modules::transitions::core::event::TransitionEvent;
use crate::modules::transitions::use_cases::handle_event::command::EventEnvelope;
use std::fs;

pub const FIXED_RECEIVED_AT: i64 = 1_700_000_000_000;

pub struct EventEnvelopeBuilder {
    inner: EventEnvelope,
}

impl Default for EventEnvelopeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl EventEnvelopeBuilder {
    pub fn new() -> Self {
        let json_str =
            fs::read_to_string("./src/tests/fixtures/events/json/before_transition.json").unwrap();
        Self {
            inner: serde_json::from_str(&json_str).unwrap(),
        }
    }

    pub fn event_type(mut self, v: impl Into<String>) -> Self {
        self.inner.event_type = v.into();
        self
    }

    pub fn organization_id(mut self, v: impl Into<String>) -> Self {
        self.inner.organization_id = v.into();
        self
    }

    pub fn project_id(mut self, v: impl Into<String>) -> Self {
        self.inner.project_id = v.into();
        self
    }

    pub fn metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.inner.metadata.insert(key.into(), value.into());
        self
    }

    pub fn without_metadata(mut self) -> Self {
        self.inner.metadata.clear();
        self
    }

    pub fn build(self) -> EventEnvelope {
        self.inner
    }
}

pub fn make_transition_event() -> TransitionEvent {
    EventEnvelopeBuilder::new()
        .build()
        .into_event(FIXED_RECEIVED_AT)
        .unwrap()
}

#[cfg(test)]
mod event_envelope_builder_tests {
    use super::*;
    use crate::modules::transitions::core::event::EventType;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = EventEnvelopeBuilder::default().build();
        assert_eq!(built.event_type, "before_transition");
        assert_eq!(built.organization_id, "org-123");
        assert_eq!(built.project_id, "proj-456");
        assert_eq!(built.metadata.get("from_state").map(String::as_str), Some("in_progress"));
        assert_eq!(built.metadata.get("to_state").map(String::as_str), Some("review"));
    }

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let custom = EventEnvelopeBuilder::new()
            .without_metadata()
            .event_type("after_transition")
            .organization_id("org-1")
            .project_id("proj-1")
            .metadata("to_state", "done")
            .build();

        assert_eq!(custom.event_type, "after_transition");
        assert_eq!(custom.organization_id, "org-1");
        assert_eq!(custom.project_id, "proj-1");
        assert_eq!(custom.metadata.len(), 1);
        assert_eq!(custom.metadata.get("to_state").map(String::as_str), Some("done"));
    }

    #[rstest]
    fn make_transition_event_is_a_validated_before_transition() {
        let event = make_transition_event();
        assert_eq!(event.event_type, EventType::BeforeTransition);
        assert_eq!(event.received_at, FIXED_RECEIVED_AT);
    }
}
