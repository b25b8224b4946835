use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::foundation::error::{RevealError, RevealResult};

/// Default file name of the header logo.
pub const DEFAULT_LOGO: &str = "martechtext-pixelated.svg";
/// Default file name of the left figure (man on a boat).
pub const DEFAULT_TWO_FIGURES: &str = "two-figures-pixelated.svg";
/// Default file name of the right figure (angel silhouette).
pub const DEFAULT_ANGEL: &str = "angel-silhouette-pixelated.svg";
/// Default file name of the page cursor.
pub const DEFAULT_CURSOR: &str = "cursor.svg";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// Role an asset plays in the assembled page.
pub enum AssetRole {
    /// Header logo, revealed with the figures.
    Logo,
    /// Left figure slot.
    TwoFigures,
    /// Right figure slot.
    Angel,
    /// Page-wide cursor; embedded as a data URI, never revealed.
    Cursor,
}

impl AssetRole {
    /// All roles in load order.
    pub const ALL: [AssetRole; 4] = [
        AssetRole::Angel,
        AssetRole::TwoFigures,
        AssetRole::Logo,
        AssetRole::Cursor,
    ];

    /// Short name used in logs and errors.
    pub fn name(self) -> &'static str {
        match self {
            Self::Logo => "logo",
            Self::TwoFigures => "two_figures",
            Self::Angel => "angel",
            Self::Cursor => "cursor",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
/// Relative input paths for every asset role.
pub struct AssetPaths {
    /// Header logo SVG.
    pub logo: String,
    /// Left figure SVG.
    pub two_figures: String,
    /// Right figure SVG.
    pub angel: String,
    /// Cursor SVG.
    pub cursor: String,
}

impl Default for AssetPaths {
    fn default() -> Self {
        Self {
            logo: DEFAULT_LOGO.to_string(),
            two_figures: DEFAULT_TWO_FIGURES.to_string(),
            angel: DEFAULT_ANGEL.to_string(),
            cursor: DEFAULT_CURSOR.to_string(),
        }
    }
}

impl AssetPaths {
    /// Configured path for `role`.
    pub fn get(&self, role: AssetRole) -> &str {
        match role {
            AssetRole::Logo => &self.logo,
            AssetRole::TwoFigures => &self.two_figures,
            AssetRole::Angel => &self.angel,
            AssetRole::Cursor => &self.cursor,
        }
    }

    /// Check that every path is a usable relative path.
    pub fn validate(&self) -> RevealResult<()> {
        for role in AssetRole::ALL {
            normalize_rel_path(self.get(role))
                .map_err(|e| e.in_field(&format!("assets.{}", role.name())))?;
        }
        Ok(())
    }
}

#[derive(Clone, Debug)]
/// One asset read from disk. Immutable once loaded.
pub struct LoadedAsset {
    /// Role in the page.
    pub role: AssetRole,
    /// Resolved filesystem path it was read from.
    pub path: PathBuf,
    /// Raw file text, XML declaration included.
    pub text: String,
}

#[derive(Clone, Debug)]
/// The four assets a page is assembled from.
pub struct AssetSet {
    /// Header logo.
    pub logo: LoadedAsset,
    /// Left figure.
    pub two_figures: LoadedAsset,
    /// Right figure.
    pub angel: LoadedAsset,
    /// Cursor.
    pub cursor: LoadedAsset,
}

impl AssetSet {
    /// Read every asset named by `paths`, resolved against `root`.
    ///
    /// The first missing or unreadable file aborts the load.
    #[tracing::instrument(skip(root, paths), fields(root = %root.display()))]
    pub fn load(root: &Path, paths: &AssetPaths) -> RevealResult<Self> {
        let read = |role: AssetRole| -> RevealResult<LoadedAsset> {
            let norm = normalize_rel_path(paths.get(role))?;
            let path = root.join(Path::new(&norm));
            let text = read_text(&path)?;
            tracing::debug!(
                role = role.name(),
                path = %path.display(),
                bytes = text.len(),
                "loaded asset"
            );
            Ok(LoadedAsset { role, path, text })
        };

        Ok(Self {
            angel: read(AssetRole::Angel)?,
            two_figures: read(AssetRole::TwoFigures)?,
            logo: read(AssetRole::Logo)?,
            cursor: read(AssetRole::Cursor)?,
        })
    }

    /// Loaded asset for `role`.
    pub fn get(&self, role: AssetRole) -> &LoadedAsset {
        match role {
            AssetRole::Logo => &self.logo,
            AssetRole::TwoFigures => &self.two_figures,
            AssetRole::Angel => &self.angel,
            AssetRole::Cursor => &self.cursor,
        }
    }
}

fn read_text(path: &Path) -> RevealResult<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("read asset '{}'", path.display()))
        .map_err(RevealError::from)
}

/// Normalize and validate a config-relative path.
///
/// The normalized result uses `/` separators, removes `.` segments, and rejects absolute paths or
/// parent traversals (`..`).
pub fn normalize_rel_path(source: &str) -> RevealResult<String> {
    let s = source.replace('\\', "/");
    if s.starts_with('/') || s.get(1..2) == Some(":") {
        return Err(RevealError::validation("paths must be relative"));
    }
    if s.is_empty() {
        return Err(RevealError::validation("path must be non-empty"));
    }

    let mut out = Vec::<&str>::new();
    for part in s.split('/') {
        if part.is_empty() || part == "." {
            continue;
        }
        if part == ".." {
            return Err(RevealError::validation("paths must not contain '..'"));
        }
        out.push(part);
    }

    if out.is_empty() {
        return Err(RevealError::validation("path must contain a file name"));
    }

    Ok(out.join("/"))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/store.rs"]
mod tests;
