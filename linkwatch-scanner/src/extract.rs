use pulldown_cmark::{Event, Parser, Tag};

/// Collect every outbound link destination from a markdown document, in
/// document order. Inline links, reference links, autolinks and images all
/// count; duplicates are kept so each occurrence gets checked.
///
/// Destinations that cannot name a reachable resource are skipped up front:
/// `mailto:`, `tel:`, `javascript:` and pure-fragment anchors. Relative
/// destinations are returned verbatim; the checker resolves them against the
/// document's base URL.
pub fn extract_links(markdown: &str) -> Vec<String> {
    let parser = Parser::new(markdown);

    parser
        .filter_map(|event| match event {
            Event::Start(Tag::Link(_, dest, _)) | Event::Start(Tag::Image(_, dest, _)) => {
                Some(dest.to_string())
            }
            _ => None,
        })
        .filter(|dest| is_checkable(dest))
        .collect()
}

fn is_checkable(dest: &str) -> bool {
    if dest.is_empty() || dest.starts_with('#') {
        return false;
    }
    !(dest.starts_with("mailto:") || dest.starts_with("tel:") || dest.starts_with("javascript:"))
}
