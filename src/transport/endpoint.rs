use url::Url;

use super::TransportError;
use crate::domain::{BusinessId, QueryParams};

pub const DEFAULT_BASE_URL: &str = "https://api.yelp.com/";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint<'a> {
    Search,
    Business(&'a BusinessId),
}

impl Endpoint<'_> {
    fn segments(&self) -> Vec<&str> {
        match self {
            Self::Search => vec!["v3", "businesses", "search"],
            Self::Business(id) => vec!["v3", "businesses", id.as_str()],
        }
    }

    /// Unencoded path, for logs.
    pub fn path(&self) -> String {
        format!("/{}", self.segments().join("/"))
    }
}

/// Assemble the absolute request URL: service root, endpoint path, then the form-encoded
/// query string. The id of [`Endpoint::Business`] is encoded as a single path segment.
pub fn build_url(
    base: &str,
    endpoint: Endpoint<'_>,
    params: &QueryParams,
) -> Result<Url, TransportError> {
    let invalid = || TransportError::InvalidBaseUrl {
        url: base.to_owned(),
    };
    let mut url = Url::parse(base).map_err(|_| invalid())?;
    url.path_segments_mut()
        .map_err(|()| invalid())?
        .pop_if_empty()
        .extend(endpoint.segments());

    if params.is_empty() {
        url.set_query(None);
    } else {
        url.query_pairs_mut().clear().extend_pairs(params.iter());
    }
    Ok(url)
}
