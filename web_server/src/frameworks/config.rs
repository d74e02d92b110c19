use std::env;

// Runtime/server constants. Route-guard literals live with the guard.

pub fn http_port() -> u16 {
    env::var("WEB_SERVER_PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(3000)
}
