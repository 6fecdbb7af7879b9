//! Transport layer: URL assembly and wire-format details (serialization/deserialization).

mod decode;
mod endpoint;
pub mod lenient;

pub use decode::{decode_business_detail_json_response, decode_search_json_response};
pub use endpoint::{DEFAULT_BASE_URL, Endpoint, build_url};

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("base URL cannot carry a path: {url}")]
    InvalidBaseUrl { url: String },
}
