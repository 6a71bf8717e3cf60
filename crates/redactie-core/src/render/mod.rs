//! Markdown to HTML rendering for the preview pane
//!
//! A small, deliberately forgiving converter: a chain of line-scoped regex
//! substitutions followed by a single block pass that assembles lists and
//! paragraphs. It is not CommonMark.

mod blocks;
mod cache;
mod inline;
mod page;

pub use blocks::assemble_blocks;
pub use cache::PreviewCache;
pub use inline::{substitute_blockquotes, substitute_bold, substitute_headings};
pub use page::to_page;

/// Render markdown source to an HTML fragment
///
/// Steps run left to right, each on the output of the previous one.
/// Total over any input; the empty string renders to the empty string.
pub fn to_html(markdown: &str) -> String {
    let text = substitute_headings(markdown);
    let text = substitute_bold(&text);
    let text = substitute_blockquotes(&text);
    assemble_blocks(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(to_html(""), "");
        assert_eq!(to_html("\n\n   \n"), "");
    }

    #[test]
    fn test_plain_lines_become_paragraphs() {
        let html = to_html("first line\n\nsecond line\n");
        assert_eq!(html, "<p>first line</p><p>second line</p>");
    }

    #[test]
    fn test_title_heading() {
        let html = to_html("# Title");
        assert_eq!(html.matches("<h2>Title</h2>").count(), 1);
        assert!(!html.contains("<h3>"));
        assert!(!html.contains("<h4>"));
    }

    #[test]
    fn test_heading_levels() {
        let html = to_html("# One\n## Two\n### Three");
        assert_eq!(
            html,
            "<p><h2>One</h2></p><p><h3>Two</h3></p><p><h4>Three</h4></p>"
        );
    }

    #[test]
    fn test_four_hashes_fall_through() {
        assert_eq!(to_html("#### Deep"), "<p>#### Deep</p>");
    }

    #[test]
    fn test_three_items_single_list() {
        let html = to_html("* one\n* two\n* three");
        assert_eq!(html.matches("<ul>").count(), 1);
        assert_eq!(html.matches("</ul>").count(), 1);
        assert_eq!(html, "<ul><li>one</li><li>two</li><li>three</li></ul>");
    }

    #[test]
    fn test_list_reopens_after_paragraph() {
        let html = to_html("* a\nnormal\n* b");
        assert_eq!(html, "<ul><li>a</li></ul><p>normal</p><ul><li>b</li></ul>");
    }

    #[test]
    fn test_paragraph_wrapping_is_stable() {
        let source = "just words\nmore words";
        let first = to_html(source);
        let second = to_html(source);
        assert_eq!(first, second);
        assert_eq!(first, "<p>just words</p><p>more words</p>");
    }

    #[test]
    fn test_bold_inside_list_item() {
        let html = to_html("* **Breaking** news");
        assert_eq!(html, "<ul><li><strong>Breaking</strong> news</li></ul>");
    }

    #[test]
    fn test_bold_line_is_not_a_list_item() {
        // Bold runs before the block pass, so the leading `**` is gone by then
        let html = to_html("**Important** update");
        assert_eq!(html, "<p><strong>Important</strong> update</p>");
    }

    #[test]
    fn test_assist_annotation_renders() {
        let source = "\n\n> **AI Suggestie (title):**\nKop een\n\n---\n# Nieuws";
        let html = to_html(source);
        assert!(html.starts_with("<p><blockquote class="));
        assert!(html.contains("<strong>AI Suggestie (title):</strong></blockquote></p>"));
        assert!(html.contains("<p>Kop een</p><p>---</p><p><h2>Nieuws</h2></p>"));
    }

    #[test]
    fn test_welcome_sample() {
        let source = "# Welkom\n\nDit is een **voorbeeld**.\n\n* Typ hier links\n* Zie rechts het resultaat\n\nEinde";
        assert_eq!(
            to_html(source),
            "<p><h2>Welkom</h2></p><p>Dit is een <strong>voorbeeld</strong>.</p>\
             <ul><li>Typ hier links</li><li>Zie rechts het resultaat</li></ul><p>Einde</p>"
        );
    }
}
