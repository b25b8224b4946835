use crate::{
    page::{script::reveal_script, style::PageStyle},
    reveal::schedule::RevealTiming,
};

/// Element id of the header container holding the logo.
pub const FIG_LOGO: &str = "figMartech";
/// Element id of the left figure container.
pub const FIG_TWO_FIGURES: &str = "figManOnBoat";
/// Element id of the right figure container.
pub const FIG_ANGEL: &str = "figAngel";
/// Containers whose rects take part in the reveal, in collection order.
pub const REVEAL_FIGURE_IDS: [&str; 3] = [FIG_LOGO, FIG_ANGEL, FIG_TWO_FIGURES];

#[derive(Clone, Copy, Debug)]
/// Already-prepared pieces substituted into the page template.
pub struct PageInputs<'a> {
    /// Logo fragment, XML declaration stripped.
    pub logo: &'a str,
    /// Left figure fragment, XML declaration stripped.
    pub two_figures: &'a str,
    /// Right figure fragment, XML declaration stripped.
    pub angel: &'a str,
    /// Cursor `data:` URI.
    pub cursor_url: &'a str,
    /// Page presentation.
    pub style: &'a PageStyle,
    /// Reveal timing baked into the script.
    pub timing: &'a RevealTiming,
}

/// Render the complete HTML document.
///
/// Each fragment is inserted verbatim, exactly once, at its fixed slot.
pub fn render_page(inputs: &PageInputs<'_>) -> String {
    let PageInputs {
        logo,
        two_figures,
        angel,
        cursor_url,
        style,
        timing,
    } = *inputs;

    let css = style.stylesheet(cursor_url);
    let js = reveal_script(timing, &REVEAL_FIGURE_IDS);

    let mut html = String::with_capacity(
        logo.len() + two_figures.len() + angel.len() + css.len() + js.len() + 1024,
    );
    html.push_str("<!DOCTYPE html>\n");
    html.push_str("<html lang=\"en\">\n");
    html.push_str("<head>\n");
    html.push_str("    <meta charset=\"UTF-8\">\n");
    html.push_str(
        "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
    );
    html.push_str("    <title>");
    html.push_str(&escape_html(&style.title));
    html.push_str("</title>\n");
    html.push_str("    <style>\n");
    html.push_str(&css);
    html.push_str("    </style>\n");
    html.push_str("</head>\n");
    html.push_str("<body>\n");

    open_container(&mut html, "    ", "header", "header", FIG_LOGO);
    html.push_str(logo);
    html.push_str("\n    </header>\n");

    html.push_str("    <div class=\"stage\">\n");
    open_container(&mut html, "        ", "div", "figure", FIG_TWO_FIGURES);
    html.push_str(two_figures);
    html.push_str("\n        </div>\n");
    open_container(&mut html, "        ", "div", "figure", FIG_ANGEL);
    html.push_str(angel);
    html.push_str("\n        </div>\n");
    html.push_str("    </div>\n\n");

    html.push_str("    <script>\n");
    html.push_str(&js);
    html.push_str("    </script>\n");
    html.push_str("</body>\n");
    html.push_str("</html>\n");
    html
}

fn open_container(html: &mut String, indent: &str, tag: &str, class: &str, id: &str) {
    html.push_str(indent);
    html.push_str(&format!("<{tag} class=\"{class}\" id=\"{id}\">\n"));
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/page/template.rs"]
mod tests;
