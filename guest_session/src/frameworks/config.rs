use std::{env, path::PathBuf, time::Duration};

// Runtime settings for talking to the backend and persisting session data.

pub fn backend_api_url() -> String {
    env::var("BACKEND_API_URL").unwrap_or_else(|_| "http://127.0.0.1:8080".to_string())
}

pub fn backend_timeout() -> Duration {
    let millis = env::var("BACKEND_TIMEOUT_MS")
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .unwrap_or(1500);
    Duration::from_millis(millis)
}

pub fn storage_path() -> PathBuf {
    env::var("GUEST_STORAGE_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(".konsulin/storage.json"))
}
