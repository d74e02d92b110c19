// Per-request gate that redirects on coarse authentication presence.
//
// Only cookie presence is consulted. Token contents and fine-grained
// authorization stay with the backend.

use crate::domain::{AuthState, GuardDecision, RouteClass};

pub const AUTH_COOKIE_NAME: &str = "auth";
pub const AUTH_FLOW_PATH: &str = "/auth";
pub const RETURN_URL_PARAM: &str = "returnUrl";
pub const PROTECTED_ROUTE_PREFIXES: &[&str] = &[
    "/message",
    "/notification",
    "/journal",
    "/record",
    "/assessments/soap",
];

// Paths the guard never looks at: API routes, framework assets and images.
const BYPASS_PREFIXES: &[&str] = &["/api", "/_next/static", "/_next/image"];
const BYPASS_SUFFIXES: &[&str] = &[".png"];

/// Static configuration for the route guard.
#[derive(Debug, Clone)]
pub struct RouteGuardSettings {
    /// Prefixes that require authentication; sub-paths inherit protection.
    pub protected_prefixes: Vec<String>,
    /// Entry point of the authentication flow.
    pub auth_flow_path: String,
    /// Where authenticated users are sent when they hit the auth flow.
    pub home_path: String,
}

impl Default for RouteGuardSettings {
    fn default() -> Self {
        Self {
            protected_prefixes: PROTECTED_ROUTE_PREFIXES
                .iter()
                .map(|prefix| prefix.to_string())
                .collect(),
            auth_flow_path: AUTH_FLOW_PATH.to_string(),
            home_path: "/".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct RouteGuard {
    settings: RouteGuardSettings,
}

impl RouteGuard {
    pub fn new(settings: RouteGuardSettings) -> Self {
        Self { settings }
    }

    /// Returns false for paths excluded from guarding altogether.
    pub fn applies_to(&self, path: &str) -> bool {
        !BYPASS_PREFIXES.iter().any(|prefix| path.starts_with(prefix))
            && !BYPASS_SUFFIXES.iter().any(|suffix| path.ends_with(suffix))
    }

    pub fn classify(&self, path: &str) -> RouteClass {
        if self
            .settings
            .protected_prefixes
            .iter()
            .any(|prefix| path.starts_with(prefix.as_str()))
        {
            RouteClass::Protected
        } else if path.starts_with(self.settings.auth_flow_path.as_str()) {
            RouteClass::AuthFlow
        } else {
            RouteClass::Other
        }
    }

    /// First matching rule wins.
    pub fn evaluate(&self, path: &str, auth: AuthState) -> GuardDecision {
        match (auth, self.classify(path)) {
            (AuthState::Unauthenticated, RouteClass::Protected) => {
                GuardDecision::Redirect(self.login_location(path))
            }
            (AuthState::Authenticated, RouteClass::AuthFlow) => {
                GuardDecision::Redirect(self.settings.home_path.clone())
            }
            _ => GuardDecision::Proceed,
        }
    }

    fn login_location(&self, return_path: &str) -> String {
        let encoded: String = url::form_urlencoded::byte_serialize(return_path.as_bytes()).collect();
        format!(
            "{}?{RETURN_URL_PARAM}={encoded}",
            self.settings.auth_flow_path
        )
    }
}
