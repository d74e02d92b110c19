mod navigation;

// Re-export the domain boundary types.
pub use navigation::{AuthState, GuardDecision, RouteClass};
