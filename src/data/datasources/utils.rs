use reqwest::Url;

use crate::errors::{IapError, Result};

/// Appends `segments` to the path of `base`, percent-encoding each one.
pub(crate) fn endpoint_url(base: &str, segments: &[&str]) -> Result<Url> {
    let mut url =
        Url::parse(base).map_err(|e| IapError::InvalidEndpoint(format!("{base}: {e}")))?;
    url.path_segments_mut()
        .map_err(|_| IapError::InvalidEndpoint(format!("{base}: cannot be a base")))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}
