//! Request building
//!
//! Pure helpers that turn path segments and ordered query parameters into an
//! absolute URL, and a URL into a bare GET request. Nothing here touches the
//! network.

use crate::error::{Error, Result};
use crate::types::{Param, Scheme};
use url::form_urlencoded;

/// Build `{scheme}://{host}/{segments joined by '/'}`
///
/// Empty segments are skipped and stray slashes around a segment are
/// dropped, so `["user/", "", "details"]` yields `user/details`.
pub fn build_url(scheme: Scheme, host: &str, segments: &[String]) -> String {
    let path = segments
        .iter()
        .map(|s| s.trim_matches('/'))
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("/");
    format!("{scheme}://{host}/{path}")
}

/// Build a URL with a query string
///
/// Parameters keep their order. The first is prefixed with `?` and the rest
/// with `&`; each value is form-encoded on its own (space becomes `+`).
pub fn build_url_with_params(
    scheme: Scheme,
    host: &str,
    segments: &[String],
    params: &[Param],
) -> String {
    let mut url = build_url(scheme, host, segments);
    for (i, param) in params.iter().enumerate() {
        url.push(if i == 0 { '?' } else { '&' });
        url.push_str(&param.key);
        url.push('=');
        url.extend(form_urlencoded::byte_serialize(param.value.as_bytes()));
    }
    url
}

/// Create a GET request for `url` without any headers
pub fn build_request(client: &reqwest::Client, url: &str) -> Result<reqwest::Request> {
    client.get(url).build().map_err(Error::BuildRequest)
}
