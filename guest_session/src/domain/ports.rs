use async_trait::async_trait;

use crate::domain::entities::AnonymousSessionGrant;

// Port for the persistent key-value storage the browser would provide.
// Access is synchronous; errors are plain strings and callers decide
// whether they matter.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, String>;
    fn set(&self, key: &str, value: &str) -> Result<(), String>;
    fn remove(&self, key: &str) -> Result<(), String>;
}

// Port for the backend call that hands out guest identities.
// The handler depends on this trait, not the concrete reqwest client.
#[async_trait]
pub trait AnonymousSessionApi: Send + Sync {
    async fn request_anonymous_session(
        &self,
        force_new: bool,
    ) -> Result<AnonymousSessionGrant, Box<dyn std::error::Error + Send + Sync>>;
}

// Port for retrieving the current time.
pub trait Clock: Send + Sync {
    fn now_epoch_millis(&self) -> u64;
}
