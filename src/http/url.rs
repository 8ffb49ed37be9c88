//! Request URL composition.

use std::collections::BTreeMap;

use url::Url;

use super::RequestContext;
use super::RequestError;

/// Composes a request URL from its independent fragments.
///
/// The path is built by appending, in order, `api_version`, `sender_id`,
/// and each endpoint segment to the base URL's path, each separated by
/// exactly one `/`. Empty fragments are skipped without leaving doubled
/// or trailing separators. The result is deterministic for a fixed input.
///
/// # Example
///
/// ```
/// use wacloud::http::compose;
///
/// let url = compose("https://graph.example.com", "v16.0", "224225226", &["verify_code"]).unwrap();
/// assert_eq!(url.as_str(), "https://graph.example.com/v16.0/224225226/verify_code");
/// ```
///
/// # Errors
///
/// Returns [`RequestError::InvalidBaseUrl`] when `base_url` is empty or not
/// an absolute URL, and [`RequestError::UrlComposition`] when the parsed
/// base cannot carry path segments.
pub fn compose(
    base_url: &str,
    api_version: &str,
    sender_id: &str,
    endpoints: &[impl AsRef<str>],
) -> Result<Url, RequestError> {
    if base_url.is_empty() {
        return Err(RequestError::InvalidBaseUrl {
            url: String::new(),
            reason: "base URL must not be empty".to_string(),
        });
    }

    let mut url = Url::parse(base_url).map_err(|e| RequestError::InvalidBaseUrl {
        url: base_url.to_string(),
        reason: e.to_string(),
    })?;

    {
        let mut segments = url
            .path_segments_mut()
            .map_err(|()| RequestError::UrlComposition {
                url: base_url.to_string(),
            })?;
        // Drop the empty segment a trailing slash in the base leaves behind.
        segments.pop_if_empty();

        for part in [api_version, sender_id]
            .into_iter()
            .chain(endpoints.iter().map(AsRef::as_ref))
        {
            if !part.is_empty() {
                segments.push(part);
            }
        }
    }

    Ok(url)
}

/// Composes the full URL for a request: context fragments plus query.
///
/// Query pairs come from an ordered map, so percent-encoded output is
/// deterministic for a fixed input.
pub(crate) fn compose_with_query(
    context: &RequestContext,
    query: &BTreeMap<String, String>,
) -> Result<Url, RequestError> {
    let mut url = compose(
        &context.base_url,
        &context.api_version,
        &context.sender_id,
        &context.endpoints,
    )?;

    if !query.is_empty() {
        url.query_pairs_mut().extend_pairs(query);
    }

    Ok(url)
}
