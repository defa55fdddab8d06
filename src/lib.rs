//! Generate images from text (and reference images) with the Gemini API.

pub mod api;
pub mod cli;
pub mod config;
pub mod core;
pub mod generator;
mod http_client;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the stderr log subscriber, filtered by `RUST_LOG` (default `warn`)
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}
