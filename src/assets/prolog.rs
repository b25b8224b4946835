use std::sync::LazyLock;

use regex::Regex;

use crate::foundation::error::{RevealError, RevealResult};

// One or more XML declarations at the very start. `<?xml-stylesheet ...?>` is a processing
// instruction, not a declaration, and is left alone.
static XML_DECLARATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\A\s*(?:<\?xml(?:\s[\s\S]*?)?\?>\s*)+").expect("static regex")
});

static RECT_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<rect[\s/>]").expect("static regex"));

/// Strip a leading `<?xml ... ?>` declaration and surrounding whitespace.
///
/// The match is anchored at the start of `text`; nothing after the declaration is touched.
/// Stripping is idempotent.
pub fn strip_xml_declaration(text: &str) -> &str {
    match XML_DECLARATION.find(text) {
        Some(m) => text[m.end()..].trim(),
        None => text.trim(),
    }
}

/// Count `<rect>` element openings in an SVG fragment.
pub fn count_rects(fragment: &str) -> usize {
    RECT_OPEN.find_iter(fragment).count()
}

/// Check that `fragment` parses as an SVG document.
///
/// `label` names the fragment in the returned error.
pub fn validate_svg(label: &str, fragment: &str) -> RevealResult<()> {
    let opts = usvg::Options::default();
    usvg::Tree::from_str(fragment, &opts)
        .map(|_| ())
        .map_err(|e| RevealError::asset(format!("'{label}' is not valid SVG: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/prolog.rs"]
mod tests;
