use crate::domain::{AuthState, GuardDecision};
use crate::interface_adapters::state::AppState;
use crate::use_cases::AUTH_COOKIE_NAME;
use axum::{
    extract::{Request, State},
    http::{HeaderMap, header},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use std::sync::Arc;

// Applies the route guard before any page handler runs.
#[tracing::instrument(
    name = "route_guard",
    skip_all,
    fields(path = %request.uri().path())
)]
pub async fn route_guard(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path().to_string();
    if !state.guard.applies_to(&path) {
        return next.run(request).await;
    }

    let auth = AuthState::from_cookie_presence(has_cookie(request.headers(), AUTH_COOKIE_NAME));
    match state.guard.evaluate(&path, auth) {
        GuardDecision::Proceed => next.run(request).await,
        GuardDecision::Redirect(location) => {
            tracing::debug!(?auth, %location, "redirecting navigation");
            Redirect::temporary(&location).into_response()
        }
    }
}

// Presence check only; the value is never read.
pub fn has_cookie(headers: &HeaderMap, name: &str) -> bool {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .map(|pair| pair.split_once('=').map_or(pair, |(key, _)| key).trim())
        .any(|key| key == name)
}
