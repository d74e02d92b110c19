use serde::Deserialize;
use serde_json::Value;

use crate::domain::entities::AnonymousSessionGrant;

// Envelope returned by `POST /api/v1/auth/anonymous-session`.
#[derive(Debug, Default, Deserialize)]
pub struct AnonymousSessionEnvelope {
    #[serde(default)]
    pub data: Option<AnonymousSessionData>,
}

// Fields are kept loose: anything that is not a string counts as missing.
#[derive(Debug, Default, Deserialize)]
pub struct AnonymousSessionData {
    #[serde(default)]
    pub token: Option<Value>,
    #[serde(default)]
    pub guest_id: Option<Value>,
}

// Error envelope used by the backend for non-2xx responses.
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}

impl From<AnonymousSessionEnvelope> for AnonymousSessionGrant {
    fn from(envelope: AnonymousSessionEnvelope) -> Self {
        let data = envelope.data.unwrap_or_default();
        AnonymousSessionGrant {
            token: string_field(data.token),
            guest_id: string_field(data.guest_id),
        }
    }
}

fn string_field(value: Option<Value>) -> Option<String> {
    match value {
        Some(Value::String(value)) => Some(value),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grant_from(body: &str) -> AnonymousSessionGrant {
        serde_json::from_str::<AnonymousSessionEnvelope>(body)
            .expect("expected envelope to parse")
            .into()
    }

    #[test]
    fn when_data_is_missing_then_grant_is_empty() {
        assert_eq!(grant_from("{}"), AnonymousSessionGrant::default());
        assert_eq!(grant_from(r#"{"data":null}"#), AnonymousSessionGrant::default());
    }

    #[test]
    fn when_fields_are_strings_then_they_are_kept_verbatim() {
        let grant = grant_from(r#"{"data":{"token":" a.b.c ","guest_id":"g-1"}}"#);

        assert_eq!(grant.token.as_deref(), Some(" a.b.c "));
        assert_eq!(grant.guest_id.as_deref(), Some("g-1"));
    }

    #[test]
    fn when_fields_are_not_strings_then_they_are_dropped() {
        let grant = grant_from(r#"{"data":{"token":17,"guest_id":{"id":"g-1"}}}"#);

        assert_eq!(grant, AnonymousSessionGrant::default());
    }
}
