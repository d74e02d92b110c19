use crate::interface_adapters::handlers::page_shell;
use crate::interface_adapters::middleware::route_guard;
use crate::interface_adapters::state::AppState;
use axum::{Router, middleware};
use std::sync::Arc;

pub fn app(state: Arc<AppState>) -> Router {
    // Every page goes through the guard; the fallback must be registered
    // before the layer so it is wrapped too.
    Router::new()
        .fallback(page_shell)
        .layer(middleware::from_fn_with_state(state.clone(), route_guard))
        .with_state(state)
}
