// Best-effort claim extraction from compact `header.payload.signature` tokens.
//
// Nothing here verifies signatures. Claims read this way only save a round
// trip and must never back an authorization decision.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde_json::Value;

/// Decodes the payload segment of a compact token into JSON.
///
/// Returns `None` when the token has fewer than two segments or when the
/// payload is not valid base64url-encoded JSON.
pub fn decode_token_payload(token: &str) -> Option<Value> {
    let payload = token.split('.').nth(1)?;

    let mut normalized: String = payload
        .chars()
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            other => other,
        })
        .collect();
    while normalized.len() % 4 != 0 {
        normalized.push('=');
    }

    let bytes = STANDARD.decode(normalized.as_bytes()).ok()?;
    serde_json::from_slice(&bytes).ok()
}

/// Reads a non-blank string `guest_id` claim.
pub fn guest_id_claim(claims: &Value) -> Option<String> {
    claims
        .get("guest_id")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}
