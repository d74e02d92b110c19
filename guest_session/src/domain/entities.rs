use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

// Opaque identifier the backend assigns to an unauthenticated visitor.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GuestId(String);

impl GuestId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for GuestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// Raw identity material returned by the anonymous-session endpoint.
// Both fields are optional; the negotiator decides which one wins.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AnonymousSessionGrant {
    pub token: Option<String>,
    pub guest_id: Option<String>,
}

// Action a visitor was performing when an auth redirect interrupted them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum IntentKind {
    Journal,
    Appointment,
    AssessmentResult,
}

// Single pending intent persisted across an auth redirect.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Intent {
    pub kind: IntentKind,
    pub payload: Value,
    // Epoch milliseconds.
    pub created_at: u64,
}
