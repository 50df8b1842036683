pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod random;

use clap::Parser;
use tracing::error;

use crate::config::ServerConfig;

pub const VERSION: u32 = 1;

#[tokio::main]
async fn main() {
    logging::init();
    let config = ServerConfig::parse();

    if let Err(err) = api::server::start_server(config).await {
        error!(error = %err, "shutting down");
        std::process::exit(1);
    }
}
