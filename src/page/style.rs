use crate::foundation::error::{RevealError, RevealResult};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
/// Presentation knobs of the generated page.
pub struct PageStyle {
    /// Document `<title>`.
    pub title: String,
    /// Page background colour (CSS colour value).
    pub background: String,
    /// Text and pixel colour (CSS colour value).
    pub foreground: String,
    /// Cursor hotspot in cursor-image pixels, `[x, y]`.
    pub cursor_hotspot: [u32; 2],
}

impl Default for PageStyle {
    fn default() -> Self {
        Self {
            title: "Pixel Reveal".to_string(),
            background: "#2563eb".to_string(),
            foreground: "#fff".to_string(),
            cursor_hotspot: [8, 2],
        }
    }
}

impl PageStyle {
    pub fn validate(&self) -> RevealResult<()> {
        for (field, value) in [
            ("page.background", &self.background),
            ("page.foreground", &self.foreground),
        ] {
            if value.trim().is_empty() {
                return Err(RevealError::validation(format!("{field} must be non-empty")));
            }
            let breaks_out = value.chars().any(|c| {
                matches!(c, ';' | '{' | '}' | '<' | '>' | '"' | '\'' | '\\') || c.is_control()
            });
            if breaks_out {
                return Err(RevealError::validation(format!(
                    "{field} is not a plain CSS colour: {value:?}"
                )));
            }
        }
        Ok(())
    }

    /// Full `<style>` body for the page, with the cursor pointing at `cursor_url`.
    pub fn stylesheet(&self, cursor_url: &str) -> String {
        let [hx, hy] = self.cursor_hotspot;
        let mut css = String::with_capacity(STYLE_TAIL.len() + cursor_url.len() + 512);
        css.push_str("        * { box-sizing: border-box; }\n");
        css.push_str("        body {\n");
        css.push_str("            margin: 0;\n");
        css.push_str("            min-height: 100vh;\n");
        css.push_str(&format!("            background: {};\n", self.background));
        css.push_str(&format!("            color: {};\n", self.foreground));
        css.push_str("            font-family: system-ui, -apple-system, sans-serif;\n");
        css.push_str("            display: flex;\n");
        css.push_str("            flex-direction: column;\n");
        css.push_str("            align-items: center;\n");
        css.push_str("            padding: 0;\n");
        css.push_str(&format!(
            "            cursor: url(\"{cursor_url}\") {hx} {hy}, auto;\n"
        ));
        css.push_str("        }\n");
        css.push_str(STYLE_TAIL);
        css
    }
}

const STYLE_TAIL: &str = r#"        .header {
            width: 100%;
            display: flex;
            justify-content: center;
            padding: clamp(1.5rem, 5vw, 3rem) clamp(0.75rem, 4vw, 2rem);
        }
        .header svg {
            display: block;
            width: 100%;
            max-width: 85vw;
            height: auto;
            object-fit: contain;
        }
        .header rect,
        .stage rect {
            opacity: 0;
            fill: currentColor;
        }
        .stage {
            flex: 1;
            display: grid;
            grid-template-columns: 1fr 1fr;
            gap: clamp(2.5rem, 6vw, 5rem);
            justify-items: center;
            align-items: start;
            width: 100%;
            max-width: 1600px;
            padding: clamp(7rem, 22vw, 16rem) clamp(0.75rem, 4vw, 2rem) clamp(1rem, 3vw, 2rem);
            margin: 0 auto;
        }
        .stage .figure {
            display: flex;
            justify-content: center;
            align-items: center;
        }
        .stage .figure:nth-child(1) {
            margin-top: clamp(5rem, 14vw, 10rem);
        }
        .stage .figure:nth-child(2) {
            margin-top: 0;
        }
        .stage .figure svg {
            display: block;
            width: 100%;
            max-width: min(95vw, 1872px);
            height: auto;
            object-fit: contain;
        }
        @media (max-width: 700px) {
            .stage {
                grid-template-columns: 1fr;
                gap: 2rem;
                padding-top: clamp(2rem, 5vw, 3rem);
            }
            .stage .figure:nth-child(1) {
                margin-top: 0;
            }
        }
"#;

#[cfg(test)]
#[path = "../../tests/unit/page/style.rs"]
mod tests;
