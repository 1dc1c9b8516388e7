//! Bare-domain extraction for division links.

use std::borrow::Cow;

use url::Url;

/// Reduces a URL-like string to a human-friendly domain.
///
/// A missing `http://`/`https://` scheme is assumed to be `https://`, and
/// a leading `www.` is removed from the host. Input that does not parse
/// as a URL with a host is returned unchanged.
pub fn human_friendly_domain(url: &str) -> String {
    let normalized = if url.starts_with("http://") || url.starts_with("https://") {
        Cow::Borrowed(url)
    } else {
        Cow::Owned(format!("https://{}", url))
    };

    match Url::parse(&normalized) {
        Ok(parsed) => match parsed.host_str() {
            Some(host) => host.strip_prefix("www.").unwrap_or(host).to_string(),
            None => url.to_string(),
        },
        Err(e) => {
            log::debug!("keeping raw link '{}': {}", url, e);
            url.to_string()
        }
    }
}
