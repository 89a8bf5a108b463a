use crate::types::SimplifiedDomain;
use url::Url;

/// Simplify a URL to its network-location text (e.g.
/// `https://www.example.com/about` becomes `www.example.com`).
///
/// Fails soft: a URL that cannot be parsed, or one without a host, yields an
/// empty string so that one bad candidate never aborts a ranking pass.
pub fn simplify_url(url: &str) -> SimplifiedDomain {
    Url::parse(url)
        .ok()
        .and_then(|parsed| parsed.host_str().map(|host| host.to_string()))
        .unwrap_or_default()
}
