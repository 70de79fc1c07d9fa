#[tokio::main]
async fn main() {
    if let Err(e) = volunteer_scheduler::start_server().await {
        tracing::error!("Failed to start server: {}", e);
        std::process::exit(1);
    }
}
