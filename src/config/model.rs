use std::path::Path;

use anyhow::Context;

use crate::{
    assets::store::{AssetPaths, normalize_rel_path},
    foundation::error::{RevealError, RevealResult},
    page::style::PageStyle,
    reveal::schedule::RevealTiming,
};

/// Default output file name, written next to the inputs.
pub const DEFAULT_OUTPUT: &str = "pixel-reveal.html";

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
/// Everything a build needs besides the root directory.
///
/// Every field has a default, so an empty JSON object (or no config file at all) reproduces
/// the stock page.
pub struct BuildConfig {
    /// Input asset paths, relative to the root.
    pub assets: AssetPaths,
    /// Output HTML path, relative to the root.
    pub output: String,
    /// Reveal timing baked into the page script.
    pub reveal: RevealTiming,
    /// Page presentation.
    pub page: PageStyle,
    /// Parse every fragment as SVG before embedding it. Off by default: browsers render
    /// documents `usvg` rejects, such as zero-size figures.
    pub validate_svg: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            assets: AssetPaths::default(),
            output: DEFAULT_OUTPUT.to_string(),
            reveal: RevealTiming::default(),
            page: PageStyle::default(),
            validate_svg: false,
        }
    }
}

impl BuildConfig {
    /// Parse a config from JSON text. Does not validate.
    pub fn from_json_str(json: &str) -> RevealResult<Self> {
        serde_json::from_str(json).map_err(|e| RevealError::serde(format!("build config: {e}")))
    }

    /// Read, parse and validate a JSON config file.
    pub fn load(path: &Path) -> RevealResult<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("read config '{}'", path.display()))?;
        let cfg = Self::from_json_str(&json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> RevealResult<()> {
        self.assets.validate()?;
        normalize_rel_path(&self.output).map_err(|e| e.in_field("output"))?;
        self.reveal.validate()?;
        self.page.validate()?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/model.rs"]
mod tests;
