//! Link discovery over raw markup
//!
//! A textual scan for `href="…"` / `href='…'` attribute patterns, not a
//! structural parse: the pattern may also match text content that happens
//! to spell out an href, which is accepted. Discovered values are resolved
//! against the page's own URL, filtered to the seed's origin, and checked
//! against the visited set.

use crate::crawler::frontier::VisitedSet;
use crate::url::same_origin;
use regex::Regex;
use std::sync::OnceLock;
use url::Url;

/// Matches href attributes with single- or double-quoted values
fn href_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r#"(?i)href\s*=\s*(?:"([^"]*)"|'([^']*)')"#).expect("href pattern is valid")
    })
}

/// Extracts crawlable same-origin links from raw markup
///
/// Rules, in order:
/// 1. Skip values starting with `#`, `mailto:`, or `javascript:`
/// 2. Resolve the rest against `base_url`; drop values that fail to parse
/// 3. Keep only URLs on the seed's origin (scheme + host + port)
/// 4. Drop URLs already in the visited set
///
/// The visited check is best-effort: two unvisited pages can both discover
/// the same link, and the duplicate collapses at dequeue time instead.
pub fn discover_links(
    markup: &str,
    base_url: &Url,
    seed_url: &Url,
    visited: &VisitedSet,
) -> Vec<Url> {
    let mut links = Vec::new();

    for captures in href_pattern().captures_iter(markup) {
        let raw = captures
            .get(1)
            .or_else(|| captures.get(2))
            .map(|m| m.as_str().trim())
            .unwrap_or_default();

        if raw.is_empty() || raw.starts_with('#') {
            continue;
        }
        let lowered = raw.to_ascii_lowercase();
        if lowered.starts_with("mailto:") || lowered.starts_with("javascript:") {
            continue;
        }

        let resolved = match base_url.join(raw) {
            Ok(url) => url,
            Err(_) => continue,
        };

        if !same_origin(&resolved, seed_url) {
            continue;
        }

        if visited.contains(&resolved) {
            continue;
        }

        links.push(resolved);
    }

    links
}
