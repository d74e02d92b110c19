// Command-line bootstrap: negotiate a guest session against the configured
// backend and print the resulting identity.

use crate::frameworks::config;
use crate::interface_adapters::clients::BackendClient;
use crate::interface_adapters::storage::FileKeyValueStore;
use crate::use_cases::AnonymousSessionNegotiator;
use std::process::ExitCode;

fn init_runtime() {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .with_writer(std::io::stderr)
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

pub async fn run() -> ExitCode {
    init_runtime();

    let force_new = std::env::args().skip(1).any(|arg| arg == "--force-new");

    let backend_url = config::backend_api_url();
    let timeout = config::backend_timeout();
    let api = match BackendClient::new(backend_url.clone(), timeout) {
        Ok(api) => api,
        Err(e) => {
            tracing::error!(error = %e, "failed to initialize backend client");
            return ExitCode::FAILURE;
        }
    };
    let storage = FileKeyValueStore::new(config::storage_path());
    tracing::debug!(
        backend_url = %backend_url,
        timeout_ms = timeout.as_millis(),
        storage = %storage.path().display(),
        "guest session client configured"
    );

    let negotiator = AnonymousSessionNegotiator::new(api, storage);
    match negotiator.ensure_anonymous_session(force_new).await {
        Ok(guest_id) => {
            println!("{guest_id}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "anonymous session negotiation failed");
            ExitCode::FAILURE
        }
    }
}
