use crate::use_cases::RouteGuard;

#[derive(Clone, Default)]
pub struct AppState {
    // Immutable guard settings shared by every request.
    pub guard: RouteGuard,
}
