use crate::domain::entities::GuestId;
use crate::domain::ports::KeyValueStore;

pub const GUEST_ID_STORAGE_KEY: &str = "konsulin.guest_id";

// Single-slot cache for the negotiated guest identity.
// Storage failures never surface: the identity can always be renegotiated.
#[derive(Clone)]
pub struct GuestSessionStore<S> {
    pub storage: S,
}

impl<S> GuestSessionStore<S>
where
    S: KeyValueStore,
{
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn cached_guest_id(&self) -> Option<GuestId> {
        match self.storage.get(GUEST_ID_STORAGE_KEY) {
            Ok(value) => value
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .map(GuestId::new),
            Err(err) => {
                tracing::debug!(error = %err, "guest id cache read failed");
                None
            }
        }
    }

    pub fn cache_guest_id(&self, guest_id: &GuestId) {
        if let Err(err) = self.storage.set(GUEST_ID_STORAGE_KEY, guest_id.as_str()) {
            tracing::debug!(error = %err, "guest id cache write skipped");
        }
    }

    // Called on the login/logout transition so a stale guest never leaks
    // into an authenticated session.
    pub fn clear_guest_id(&self) {
        if let Err(err) = self.storage.remove(GUEST_ID_STORAGE_KEY) {
            tracing::debug!(error = %err, "guest id cache clear skipped");
        }
    }
}
