/// Escapes text for inclusion in HTML element content or quoted attributes.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Whether stripping markup from `input` would change it.
///
/// Any tag delimiter or entity start counts, so plain text containing `&` is rejected
/// along with real markup.
pub fn contains_html(input: &str) -> bool {
    input.contains(['<', '>', '&'])
}
