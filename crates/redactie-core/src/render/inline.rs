//! Line-scoped substitutions that run before the block pass

use once_cell::sync::Lazy;
use regex::Regex;

// `R` keeps a trailing `\r` out of the captured text on CRLF input.
static H4_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?mR)^### (.*)$").unwrap());
static H3_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?mR)^## (.*)$").unwrap());
static H2_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?mR)^# (.*)$").unwrap());

/// Non-greedy, so the first closing pair on a line wins
static BOLD_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?R)\*\*(.*?)\*\*").unwrap());

static BLOCKQUOTE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?mR)^> (.*)$").unwrap());

/// Style classes carried on rendered blockquotes (AI suggestions land in one)
pub const BLOCKQUOTE_CLASS: &str = "border-l-4 border-blue-500 pl-4 italic bg-blue-50 p-2 my-2";

/// Rewrite `#`, `##` and `###` lines into `<h2>`, `<h3>` and `<h4>`
///
/// Passes run `###` first, then `##`, then `#`. Each needs the marker followed
/// by a space at line start, so four or more `#` are left alone.
pub fn substitute_headings(text: &str) -> String {
    let text = H4_REGEX.replace_all(text, "<h4>${1}</h4>");
    let text = H3_REGEX.replace_all(&text, "<h3>${1}</h3>");
    H2_REGEX.replace_all(&text, "<h2>${1}</h2>").into_owned()
}

/// Rewrite `**text**` into `<strong>text</strong>`
pub fn substitute_bold(text: &str) -> String {
    BOLD_REGEX
        .replace_all(text, "<strong>${1}</strong>")
        .into_owned()
}

/// Rewrite `> text` lines into a styled `<blockquote>`
pub fn substitute_blockquotes(text: &str) -> String {
    let replacement = format!("<blockquote class=\"{}\">${{1}}</blockquote>", BLOCKQUOTE_CLASS);
    BLOCKQUOTE_REGEX
        .replace_all(text, replacement.as_str())
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headings_only_at_line_start() {
        assert_eq!(substitute_headings("a # b"), "a # b");
        assert_eq!(substitute_headings("x\n# b"), "x\n<h2>b</h2>");
    }

    #[test]
    fn test_heading_needs_space() {
        assert_eq!(substitute_headings("#tag"), "#tag");
    }

    #[test]
    fn test_heading_passes_do_not_rematch() {
        assert_eq!(substitute_headings("### Small"), "<h4>Small</h4>");
        assert_eq!(substitute_headings("## Mid"), "<h3>Mid</h3>");
        assert_eq!(substitute_headings("#### Deep"), "#### Deep");
    }

    #[test]
    fn test_heading_crlf() {
        assert_eq!(substitute_headings("# A\r\nb"), "<h2>A</h2>\r\nb");
    }

    #[test]
    fn test_bold_non_greedy() {
        assert_eq!(
            substitute_bold("**a** and **b**"),
            "<strong>a</strong> and <strong>b</strong>"
        );
    }

    #[test]
    fn test_bold_does_not_span_lines() {
        assert_eq!(substitute_bold("**open\nclose**"), "**open\nclose**");
    }

    #[test]
    fn test_bold_empty_pair() {
        assert_eq!(substitute_bold("****"), "<strong></strong>");
    }

    #[test]
    fn test_blockquote() {
        let out = substitute_blockquotes("> quoted\nplain");
        assert_eq!(
            out,
            format!(
                "<blockquote class=\"{}\">quoted</blockquote>\nplain",
                BLOCKQUOTE_CLASS
            )
        );
    }

    #[test]
    fn test_blockquote_needs_space() {
        assert_eq!(substitute_blockquotes(">nope"), ">nope");
    }
}
