//! REST API server for card number validation.
//!
//! # Usage
//!
//! ```bash
//! # Start server
//! cardcheck-server
//!
//! # With custom port and JSON logs
//! cardcheck-server --port 8080 --log-format json
//!
//! # Same, from the environment
//! CARDCHECK_PORT=8080 CARDCHECK_LOG_FORMAT=json cardcheck-server
//! ```
//!
//! # Swagger UI
//!
//! Visit http://localhost:3000/swagger-ui/ for interactive API documentation.

use cardcheck::server::{self, init_logging, ServerConfig};
use clap::Parser;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::parse();
    init_logging(config.log_format)?;

    server::serve(&config).await?;
    Ok(())
}
