use std::process;

use color_mcp::config::ServerConfig;
use color_mcp::logging;
use color_mcp::mcp::start_mcp_server;
use log::{error, info};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let config = ServerConfig::from_env();

    // Stdout is reserved for protocol traffic
    if let Err(e) = logging::init_logger(&config) {
        eprintln!("Failed to initialize logger: {}", e);
        process::exit(1);
    }

    info!("{} {} starting", config.name, config.version);

    if let Err(e) = start_mcp_server(config).await {
        error!("Error reading input: {}", e);
        eprintln!("Error reading input: {}", e);
        process::exit(1);
    }

    info!("Server stopped");
}
