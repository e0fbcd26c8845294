use std::borrow::Cow;

/// Escapes text for HTML text content and double-quoted attribute values.
///
/// Returns the input unchanged when no escaping is needed.
#[must_use]
pub fn escape_html(input: &str) -> Cow<'_, str> {
    if !input.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(input);
    }

    let mut escaped = String::with_capacity(input.len() + 8);
    for ch in input.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    Cow::Owned(escaped)
}

/// Hardens an already-serialized JSON literal for embedding inside an inline
/// `<script>` block.
///
/// JSON string escaping alone still allows a literal `</script>` inside a
/// string value to terminate the surrounding block early; breaking up the
/// `</` sequence closes that hole without changing the parsed value.
#[must_use]
pub fn escape_script_embed(json: &str) -> String {
    json.replace("</", "<\\/")
}
