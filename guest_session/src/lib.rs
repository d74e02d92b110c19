pub mod domain;
pub mod frameworks;
pub mod interface_adapters;
pub mod use_cases;

pub use domain::{GuestId, Intent, IntentKind, SessionError};
pub use interface_adapters::clients::{BackendClient, BackendClientError};
pub use interface_adapters::clock::SystemClock;
pub use interface_adapters::storage::{FileKeyValueStore, InMemoryKeyValueStore};
pub use use_cases::{AnonymousSessionNegotiator, GuestSessionStore, IntentStore};
