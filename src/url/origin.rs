use url::Url;

/// Extracts the origin of a URL as a (scheme, host, port) triple
///
/// The host is lowercased and the port falls back to the scheme default
/// (80 for http, 443 for https). URLs without a host have no origin.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use snapcrawl::url::page_origin;
///
/// let url = Url::parse("https://Example.com/path").unwrap();
/// assert_eq!(
///     page_origin(&url),
///     Some(("https".to_string(), "example.com".to_string(), 443))
/// );
/// ```
pub fn page_origin(url: &Url) -> Option<(String, String, u16)> {
    let host = url.host_str()?.to_lowercase();
    let port = url.port_or_known_default()?;
    Some((url.scheme().to_string(), host, port))
}

/// Returns true if both URLs share the same origin
///
/// Origin equality is exact equality of the (scheme, host, port) triple.
/// URLs without a host never match anything.
pub fn same_origin(a: &Url, b: &Url) -> bool {
    match (page_origin(a), page_origin(b)) {
        (Some(left), Some(right)) => left == right,
        _ => false,
    }
}
