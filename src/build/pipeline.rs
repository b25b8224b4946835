use std::path::{Path, PathBuf};

use anyhow::Context;
use sha2::Digest as _;

use crate::{
    assets::cursor::cursor_data_url,
    assets::prolog::{count_rects, strip_xml_declaration, validate_svg},
    assets::store::{AssetRole, AssetSet, normalize_rel_path},
    config::model::BuildConfig,
    foundation::error::{RevealError, RevealResult},
    page::template::{PageInputs, render_page},
    reveal::schedule::RevealSchedule,
};

#[derive(Clone, Debug, PartialEq, Eq)]
/// What went into the page from one revealed figure.
pub struct FragmentReport {
    /// Which slot the fragment fills.
    pub role: AssetRole,
    /// `<rect>` elements found in the fragment.
    pub rects: usize,
    /// Whether a leading XML declaration was removed.
    pub stripped_prolog: bool,
}

#[derive(Clone, Debug)]
/// An assembled page, not yet written.
pub struct BuiltPage {
    /// Complete HTML document.
    pub html: String,
    /// Where [`write_page`] will put it.
    pub output_path: PathBuf,
    /// Per-figure summaries in page order (logo, left, right).
    pub fragments: Vec<FragmentReport>,
    /// Reveal schedule the page will run for `total_rects()` rects.
    pub schedule: RevealSchedule,
}

impl BuiltPage {
    /// Rects across all three figures.
    pub fn total_rects(&self) -> usize {
        self.fragments.iter().map(|f| f.rects).sum()
    }

    /// Hex SHA-256 of the HTML.
    pub fn sha256_hex(&self) -> String {
        let digest = sha2::Sha256::digest(self.html.as_bytes());
        let mut out = String::with_capacity(digest.len() * 2);
        for b in digest {
            out.push_str(&format!("{:02x}", b));
        }
        out
    }
}

/// Assemble the page described by `cfg` from assets under `root`.
///
/// Only reads; nothing is written. Any unreadable asset aborts the build. Fragments are
/// embedded as-is unless `validate_svg` is set, in which case an empty or unparsable fragment
/// aborts it too.
#[tracing::instrument(skip(cfg, root), fields(root = %root.display()))]
pub fn build_page(cfg: &BuildConfig, root: &Path) -> RevealResult<BuiltPage> {
    cfg.validate()?;
    let assets = AssetSet::load(root, &cfg.assets)?;

    let mut fragments = Vec::with_capacity(3);
    let mut prepared = Vec::with_capacity(3);
    for role in [AssetRole::Logo, AssetRole::TwoFigures, AssetRole::Angel] {
        let asset = assets.get(role);
        let inline = strip_xml_declaration(&asset.text);
        if cfg.validate_svg {
            if inline.is_empty() {
                return Err(RevealError::asset(format!(
                    "'{}' has no SVG content",
                    asset.path.display()
                )));
            }
            validate_svg(&asset.path.display().to_string(), inline)?;
        } else if inline.is_empty() {
            tracing::warn!(path = %asset.path.display(), "fragment is empty");
        }

        let report = FragmentReport {
            role,
            rects: count_rects(inline),
            stripped_prolog: inline.len() != asset.text.trim().len(),
        };
        tracing::debug!(
            role = role.name(),
            rects = report.rects,
            stripped_prolog = report.stripped_prolog,
            "prepared fragment"
        );
        fragments.push(report);
        prepared.push(inline);
    }

    let cursor_url = cursor_data_url(&assets.cursor.text);
    let html = render_page(&PageInputs {
        logo: prepared[0],
        two_figures: prepared[1],
        angel: prepared[2],
        cursor_url: &cursor_url,
        style: &cfg.page,
        timing: &cfg.reveal,
    });

    let output_path = root.join(normalize_rel_path(&cfg.output)?);
    let total: usize = fragments.iter().map(|f| f.rects).sum();
    if total == 0 {
        tracing::warn!("no <rect> elements in any figure; the page will not animate");
    }

    Ok(BuiltPage {
        html,
        output_path,
        fragments,
        schedule: RevealSchedule::new(total, &cfg.reveal),
    })
}

/// Write `page` to its output path, replacing any existing file.
#[tracing::instrument(skip(page), fields(path = %page.output_path.display()))]
pub fn write_page(page: &BuiltPage) -> RevealResult<()> {
    let path = &page.output_path;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(path, page.html.as_bytes())
        .with_context(|| format!("write page '{}'", path.display()))?;
    tracing::info!(bytes = page.html.len(), "wrote page");
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/build/pipeline.rs"]
mod tests;
