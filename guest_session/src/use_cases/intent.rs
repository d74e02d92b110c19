use serde_json::Value;

use crate::domain::entities::{Intent, IntentKind};
use crate::domain::ports::{Clock, KeyValueStore};

pub const INTENT_STORAGE_KEY: &str = "konsulin.intent";

// Intents older than six hours are treated as absent.
pub const INTENT_TTL_MILLIS: u64 = 6 * 60 * 60 * 1000;

/// Single-slot store for the action to resume after an auth redirect.
///
/// A newer `save_intent` silently replaces any unconsumed older intent.
/// Expiry is lazy: stale entries are evicted when read, never swept.
/// Built without storage (see [`IntentStore::detached`]) every operation is
/// a no-op, which is how non-interactive contexts use it.
pub struct IntentStore<C, S> {
    pub clock: C,
    pub storage: Option<S>,
}

impl<C, S> IntentStore<C, S>
where
    C: Clock,
    S: KeyValueStore,
{
    pub fn new(clock: C, storage: S) -> Self {
        Self {
            clock,
            storage: Some(storage),
        }
    }

    pub fn detached(clock: C) -> Self {
        Self {
            clock,
            storage: None,
        }
    }

    pub fn save_intent(&self, kind: IntentKind, payload: Value) {
        let Some(storage) = &self.storage else {
            return;
        };

        let intent = Intent {
            kind,
            payload,
            created_at: self.clock.now_epoch_millis(),
        };
        let encoded = match serde_json::to_string(&intent) {
            Ok(encoded) => encoded,
            Err(err) => {
                tracing::debug!(error = %err, "intent could not be encoded");
                return;
            }
        };

        if let Err(err) = storage.set(INTENT_STORAGE_KEY, &encoded) {
            tracing::debug!(error = %err, "intent write skipped");
        }
    }

    pub fn get_intent(&self) -> Option<Intent> {
        let storage = self.storage.as_ref()?;

        let raw = match storage.get(INTENT_STORAGE_KEY) {
            Ok(raw) => raw?,
            Err(err) => {
                tracing::debug!(error = %err, "intent read failed");
                return None;
            }
        };

        let intent = match serde_json::from_str::<Intent>(&raw) {
            Ok(intent) => intent,
            Err(err) => {
                // Drop corrupt data so later reads stop tripping over it.
                tracing::debug!(error = %err, "discarding unreadable intent");
                self.clear_intent();
                return None;
            }
        };

        let age = self
            .clock
            .now_epoch_millis()
            .saturating_sub(intent.created_at);
        if age > INTENT_TTL_MILLIS {
            tracing::debug!(age_ms = age, "discarding expired intent");
            self.clear_intent();
            return None;
        }

        Some(intent)
    }

    pub fn clear_intent(&self) {
        let Some(storage) = &self.storage else {
            return;
        };

        if let Err(err) = storage.remove(INTENT_STORAGE_KEY) {
            tracing::debug!(error = %err, "intent clear skipped");
        }
    }

    /// Reads the pending intent once and clears the slot.
    pub fn take_intent(&self) -> Option<Intent> {
        let intent = self.get_intent()?;
        self.clear_intent();
        Some(intent)
    }
}
