pub mod anonymous_session;
pub mod guest_store;
pub mod intent;
pub mod token;

#[cfg(test)]
pub(crate) mod test_support;

pub use anonymous_session::AnonymousSessionNegotiator;
pub use guest_store::{GUEST_ID_STORAGE_KEY, GuestSessionStore};
pub use intent::{INTENT_STORAGE_KEY, INTENT_TTL_MILLIS, IntentStore};
pub use token::{decode_token_payload, guest_id_claim};
