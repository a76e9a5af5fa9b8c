//! Hostname stripping, so tree entries read as site paths.

use url::Url;

/// Bare lowercase host from either `example.com` or `https://example.com/`.
fn bare_host(hostname: &str) -> String {
    let hostname = hostname.trim();
    let host = Url::parse(hostname)
        .ok()
        .and_then(|url| url.host_str().map(str::to_string))
        .unwrap_or_else(|| hostname.trim_end_matches('/').to_string());
    host.to_ascii_lowercase()
}

/// Removes `hostname` (with any scheme) from the front of `href`.
///
/// `https://example.com/docs?x=1` and `example.com/docs?x=1` both become
/// `/docs?x=1`. Hrefs on other hosts, and relative hrefs, are returned as is.
pub fn strip_hostname(href: &str, hostname: &str) -> String {
    let host = bare_host(hostname);
    if host.is_empty() {
        return href.to_string();
    }

    if let Ok(url) = Url::parse(href) {
        if !url.host_str().is_some_and(|h| h.eq_ignore_ascii_case(&host)) {
            return href.to_string();
        }
        let mut path = url.path().to_string();
        if let Some(query) = url.query() {
            path.push('?');
            path.push_str(query);
        }
        return path;
    }

    let rest = href.strip_prefix("//").unwrap_or(href);
    let head = rest.get(..host.len()).unwrap_or("");
    if !head.eq_ignore_ascii_case(&host) {
        return href.to_string();
    }
    match &rest[host.len()..] {
        "" => "/".to_string(),
        path if path.starts_with('/') || path.starts_with('?') => path.to_string(),
        _ => href.to_string(),
    }
}
