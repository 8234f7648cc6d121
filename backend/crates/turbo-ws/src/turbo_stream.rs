use turbo_core::StreamAction;

/// Wrap rendered HTML in a `<turbo-stream>` element.
///
/// Actions that carry no template (`remove`) produce an empty element and
/// ignore `html`.
pub fn render_stream(action: StreamAction, dom_target: &str, html: Option<&str>) -> String {
    let name = action.as_str();
    let target = escape_html(dom_target);

    match html {
        Some(html) if action.carries_template() => format!(
            "<turbo-stream action=\"{name}\" target=\"{target}\"><template>{html}</template></turbo-stream>"
        ),
        _ => format!("<turbo-stream action=\"{name}\" target=\"{target}\"></turbo-stream>"),
    }
}

/// Escape text for use in element content or a double-quoted attribute
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
