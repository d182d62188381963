// src/main.rs
#[tokio::main]
async fn main() {
    if let Err(err) = hireboard::bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}
