//! Small text helpers shared by collectors and the CLI.

use std::sync::LazyLock;

use regex::Regex;

static URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://\S+|www\.\S+").expect("valid url regex"));
static HASHTAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#\w+").expect("valid hashtag regex"));
static HANDLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@\w+").expect("valid handle regex"));

/// Strip URLs and collapse runs of whitespace into single spaces.
#[must_use]
pub fn clean_text(text: &str) -> String {
    let without_urls = URL_RE.replace_all(text, "");
    without_urls.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// `#tags` in order of appearance, `#` included.
#[must_use]
pub fn extract_hashtags(text: &str) -> Vec<String> {
    HASHTAG_RE
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// `@handles` in order of appearance, `@` included.
#[must_use]
pub fn extract_mentions(text: &str) -> Vec<String> {
    HANDLE_RE
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Cut `text` to at most `max_chars` characters, appending `...` when
/// anything was removed.
#[must_use]
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => format!("{}...", &text[..byte_idx]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_text_strips_urls_and_whitespace() {
        let cleaned = clean_text("  see https://example.com/a?b=1   and\twww.test.org now ");
        assert_eq!(cleaned, "see and now");
    }

    #[test]
    fn clean_text_of_plain_text_is_unchanged() {
        assert_eq!(clean_text("hello world"), "hello world");
    }

    #[test]
    fn extracts_hashtags_in_order() {
        let tags = extract_hashtags("Just tried it #tech and #innovation_2024!");
        assert_eq!(tags, vec!["#tech", "#innovation_2024"]);
    }

    #[test]
    fn extracts_handles() {
        let handles = extract_mentions("cc @alice and @bob_99, thanks");
        assert_eq!(handles, vec!["@alice", "@bob_99"]);
    }

    #[test]
    fn truncate_keeps_short_text() {
        assert_eq!(truncate_chars("short", 100), "short");
        assert_eq!(truncate_chars(&"a".repeat(100), 100), "a".repeat(100));
    }

    #[test]
    fn truncate_adds_ellipsis_on_char_boundary() {
        let text = "é".repeat(101);
        let cut = truncate_chars(&text, 100);
        assert_eq!(cut, format!("{}...", "é".repeat(100)));
    }
}
