//! Decision record - the immutable audit trail of resolved choices.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::empty_as_none;
use crate::value_objects::Deltas;
use crate::{ActionId, DecisionId, EventId};

/// One resolved action or event option, with the deltas actually applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    pub id: DecisionId,
    /// Event id, or `action_<id>` for actions
    pub source_id: String,
    /// Option id, or the action id
    pub choice: String,
    pub timestamp: DateTime<Utc>,
    pub summary: String,
    #[serde(flatten)]
    pub deltas: Deltas,
    #[serde(
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub next_event_id: Option<EventId>,
}

impl Decision {
    pub fn for_action(
        id: DecisionId,
        action_id: &ActionId,
        action_name: &str,
        deltas: Deltas,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            source_id: format!("action_{action_id}"),
            choice: action_id.to_string(),
            timestamp,
            summary: action_name.to_string(),
            deltas,
            next_event_id: None,
        }
    }

    pub fn for_event(
        id: DecisionId,
        event_id: &EventId,
        option_id: impl ToString,
        summary: impl Into<String>,
        deltas: Deltas,
        next_event_id: Option<EventId>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            source_id: event_id.to_string(),
            choice: option_id.to_string(),
            timestamp,
            summary: summary.into(),
            deltas,
            next_event_id,
        }
    }

    pub fn is_action(&self) -> bool {
        self.source_id.starts_with("action_")
    }
}
