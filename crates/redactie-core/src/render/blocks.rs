//! Block assembly: list grouping and paragraph wrapping

/// Assemble lists and paragraphs from already-substituted lines
///
/// A line whose trimmed content starts with `*` is a list item; its text is
/// whatever follows the first `*`, trimmed. Runs of items share one `<ul>`,
/// which closes on the first non-item line or at end of input. Other
/// non-blank lines are wrapped in `<p>` as-is and blank lines are dropped.
pub fn assemble_blocks(text: &str) -> String {
    let mut html = String::with_capacity(text.len() + text.len() / 2);
    let mut in_list = false;

    for line in text.split('\n') {
        if line.trim().starts_with('*') {
            if !in_list {
                html.push_str("<ul>");
                in_list = true;
            }
            html.push_str("<li>");
            html.push_str(list_item_text(line));
            html.push_str("</li>");
        } else {
            if in_list {
                html.push_str("</ul>");
                in_list = false;
            }
            if !line.trim().is_empty() {
                html.push_str("<p>");
                html.push_str(line);
                html.push_str("</p>");
            }
        }
    }

    if in_list {
        html.push_str("</ul>");
    }

    html
}

fn list_item_text(line: &str) -> &str {
    match line.find('*') {
        Some(idx) => line[idx + 1..].trim(),
        None => line.trim(),
    }
}
