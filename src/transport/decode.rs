use super::TransportError;
use crate::domain::{BusinessDetail, SearchResult};

pub fn decode_search_json_response(json: &str) -> Result<SearchResult, TransportError> {
    Ok(serde_json::from_str(json)?)
}

pub fn decode_business_detail_json_response(
    json: &str,
) -> Result<BusinessDetail, TransportError> {
    Ok(serde_json::from_str(json)?)
}
