use once_cell::sync::Lazy;
use reqwest::Client;
use std::time::Duration;

/// Image generation can take well over a minute on the Pro model
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Shared HTTP client for the single generateContent call
pub static HTTP_CLIENT: Lazy<Client> = Lazy::new(|| {
    Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .tcp_keepalive(Duration::from_secs(60))
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
        .unwrap_or_else(|e| {
            tracing::warn!("Falling back to default HTTP client: {}", e);
            Client::new()
        })
});
