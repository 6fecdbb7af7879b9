use std::io;

use tracing_subscriber::EnvFilter;
use yelp_fusion::{ApiKey, YelpClient};

/// Install a `RUST_LOG`-driven subscriber and build a client from `YELP_API_KEY`.
pub fn client_from_env() -> Result<YelpClient, Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let api_key = std::env::var("YELP_API_KEY").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "YELP_API_KEY environment variable is required",
        )
    })?;
    Ok(YelpClient::new(ApiKey::new(api_key)?))
}

pub fn required_env(name: &str) -> Result<String, io::Error> {
    std::env::var(name).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{name} environment variable is required"),
        )
    })
}
