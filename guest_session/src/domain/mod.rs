pub mod entities;
pub mod errors;
pub mod ports;

// Re-export the domain boundary types and ports.
pub use entities::{AnonymousSessionGrant, GuestId, Intent, IntentKind};
pub use errors::SessionError;
pub use ports::{AnonymousSessionApi, Clock, KeyValueStore};
