/// Maximum length of a sanitized file stem
const MAX_STEM_LEN: usize = 120;

/// Derives a filesystem-safe file stem from a URL
///
/// The derivation:
/// 1. Strips the scheme prefix (everything up to and including `://`)
/// 2. Collapses every run of `/`, `:`, `?`, `#`, `&`, `=` into a single `_`
/// 3. Truncates the result to 120 characters
///
/// This is a pure function of the URL string. The capture writer and the
/// coordinator's markup read-back both go through it, so the on-disk name
/// and the lookup name can never drift apart. Two distinct URLs may
/// sanitize to the same stem; the later capture overwrites the earlier one.
///
/// # Examples
///
/// ```
/// use snapcrawl::url::sanitize_file_stem;
///
/// assert_eq!(
///     sanitize_file_stem("https://example.com/a/b?x=1"),
///     "example.com_a_b_x_1"
/// );
/// ```
pub fn sanitize_file_stem(url: &str) -> String {
    let without_scheme = url
        .split_once("://")
        .map(|(_, rest)| rest)
        .unwrap_or(url);

    let mut stem = String::with_capacity(without_scheme.len());
    let mut in_separator_run = false;
    for c in without_scheme.chars() {
        if matches!(c, '/' | ':' | '?' | '#' | '&' | '=') {
            if !in_separator_run {
                stem.push('_');
                in_separator_run = true;
            }
        } else {
            stem.push(c);
            in_separator_run = false;
        }
    }

    stem.chars().take(MAX_STEM_LEN).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_scheme() {
        assert_eq!(sanitize_file_stem("https://example.com"), "example.com");
        assert_eq!(sanitize_file_stem("http://example.com"), "example.com");
    }

    #[test]
    fn test_trailing_slash_becomes_underscore() {
        assert_eq!(sanitize_file_stem("https://example.com/"), "example.com_");
    }

    #[test]
    fn test_path_separators_replaced() {
        assert_eq!(
            sanitize_file_stem("https://example.com/a/b/c"),
            "example.com_a_b_c"
        );
    }

    #[test]
    fn test_query_delimiters_replaced() {
        assert_eq!(
            sanitize_file_stem("https://example.com/search?q=rust&page=2"),
            "example.com_search_q_rust_page_2"
        );
    }

    #[test]
    fn test_fragment_replaced() {
        assert_eq!(
            sanitize_file_stem("https://example.com/page#section"),
            "example.com_page_section"
        );
    }

    #[test]
    fn test_port_colon_collapsed() {
        assert_eq!(
            sanitize_file_stem("https://example.com:8080/x"),
            "example.com_8080_x"
        );
    }

    #[test]
    fn test_separator_runs_collapse() {
        assert_eq!(
            sanitize_file_stem("https://example.com//a///b?=c"),
            "example.com_a_b_c"
        );
    }

    #[test]
    fn test_truncates_to_120_chars() {
        let long_path = "x".repeat(300);
        let stem = sanitize_file_stem(&format!("https://example.com/{}", long_path));
        assert_eq!(stem.chars().count(), 120);
    }

    #[test]
    fn test_deterministic() {
        let url = "https://example.com/a?b=c";
        assert_eq!(sanitize_file_stem(url), sanitize_file_stem(url));
    }

    #[test]
    fn test_no_scheme_left_intact() {
        assert_eq!(sanitize_file_stem("example.com/a"), "example.com_a");
    }
}
