use latte_server::{Config, Server, ServerState, print_banner};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    let config = Config::from_env();
    let log_dir = format!("{}/logs", config.work_dir);
    std::fs::create_dir_all(&log_dir).ok();
    latte_server::init_logger_with_file(
        std::env::var("LOG_LEVEL").ok().as_deref(),
        Some(&log_dir),
    );

    print_banner();
    tracing::info!("☕ Latte server starting...");

    let state = ServerState::initialize(&config).await?;
    let server = Server::with_state(config, state);

    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
