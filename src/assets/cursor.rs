use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Bytes left literal by JavaScript's `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Prefix of every cursor data URI.
pub const SVG_DATA_URL_PREFIX: &str = "data:image/svg+xml,";

/// Build a `data:` URI for a cursor from its raw SVG text.
///
/// The raw text (XML declaration included) is percent-encoded as a URI component, so the
/// result is safe inside a double-quoted CSS `url("...")`.
pub fn cursor_data_url(svg: &str) -> String {
    let encoded = utf8_percent_encode(svg, URI_COMPONENT);
    let mut out = String::with_capacity(SVG_DATA_URL_PREFIX.len() + svg.len() * 2);
    out.push_str(SVG_DATA_URL_PREFIX);
    out.extend(encoded);
    out
}

#[cfg(test)]
#[path = "../../tests/unit/assets/cursor.rs"]
mod tests;
