//! Freight Pricing library crate.
//!
//! This crate exposes the cost estimation engine behind the freight-rate
//! email parsing product: the personal cost estimator, the enterprise
//! plan classifier, the platform quote and edition catalog, plus an
//! HTTP API that serves them.  External applications may call
//! [`personal::estimate`], [`enterprise::classify`] and
//! [`platform::quote`] directly or embed the API via
//! [`api::build_router`].

pub mod api;
pub mod config;
pub mod engine;
pub mod enterprise;
pub mod error;
pub mod i18n;
pub mod models;
pub mod notify;
pub mod personal;
pub mod platform;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub use enterprise::classify;
pub use error::{AppError, PricingError};
pub use personal::estimate;
pub use platform::quote;

/// Initialize tracing/logging.
///
/// `RUST_LOG` takes precedence over `default_level`.  Can only be called
/// once per process.
pub fn init_tracing(default_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry.with(fmt::layer().json().with_target(true)).init();
    } else {
        registry.with(fmt::layer().with_target(true)).init();
    }
}
