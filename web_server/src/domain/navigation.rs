// Coarse view of one incoming navigation, evaluated fresh per request.

// Derived only from whether the auth cookie is present.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthState {
    Unauthenticated,
    Authenticated,
}

impl AuthState {
    pub fn from_cookie_presence(present: bool) -> Self {
        if present {
            AuthState::Authenticated
        } else {
            AuthState::Unauthenticated
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteClass {
    Protected,
    AuthFlow,
    Other,
}

// Outcome of the route guard for a single request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    // Let the request through unmodified.
    Proceed,
    // Send the browser elsewhere; the value is a relative location.
    Redirect(String),
}
