use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    guest_session::frameworks::cli::run().await
}
