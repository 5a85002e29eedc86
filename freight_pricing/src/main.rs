//! Entry point for the Freight Pricing binary.
//!
//! Running this binary starts an HTTP server exposing the cost
//! calculators.  Settings are read from an optional `pricing.toml` in
//! the working directory and from `FREIGHT_PRICING__*` environment
//! variables (e.g. `FREIGHT_PRICING__SERVER__PORT=8080`).

use anyhow::Result;
use freight_pricing::{api, config, init_tracing};

#[tokio::main]
async fn main() -> Result<()> {
    let config = config::load_config()?;
    init_tracing(&config.server.log_level, config.server.log_format == "json");

    tracing::info!(
        "Freight Pricing v{} starting (notifications {})",
        env!("CARGO_PKG_VERSION"),
        if config.notify.enabled { "enabled" } else { "disabled" }
    );

    api::serve(config).await
}
