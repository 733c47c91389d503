use crate::modules::transitions::core::event::{EventError, EventType, TransitionEvent};
use crate::shared::core::primitives::require_non_empty;
use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;

/// Transition event as received from the caller, before validation.
///
/// Missing and `null` fields deserialize to empty values so that validation,
/// not the parser, decides which field is wrong.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct EventEnvelope {
    #[serde(default, deserialize_with = "null_as_default")]
    pub event_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub organization_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub project_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub metadata: BTreeMap<String, String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl EventEnvelope {
    /// The event type is checked before the identifiers, so an unknown type is
    /// reported as such even when the rest of the envelope is empty.
    pub fn into_event(self, received_at: i64) -> Result<TransitionEvent, EventError> {
        let event_type: EventType = require_non_empty("event_type", self.event_type)?.parse()?;
        let organization_id = require_non_empty("organization_id", self.organization_id)?;
        let project_id = require_non_empty("project_id", self.project_id)?;

        Ok(TransitionEvent {
            event_type,
            organization_id,
            project_id,
            metadata: self.metadata,
            received_at,
        })
    }
}
