//! pixel-reveal assembles a single static HTML page from SVG pixel art.
//!
//! # Pipeline overview
//!
//! 1. **Load**: read the logo, two figure SVGs and the cursor SVG ([`AssetSet`]).
//! 2. **Prepare**: strip XML declarations, count rects, optionally parse-check each fragment,
//!    and turn the cursor into a `data:` URI.
//! 3. **Render**: substitute everything into the page template together with the inline reveal
//!    script ([`render_page`]).
//! 4. **Write**: replace the output file ([`write_page`]).
//!
//! The in-page animation collects every `rect` of the three figures, shuffles them, and shows
//! them one by one over a fixed window. The same machine is available in Rust as
//! [`RevealState`] (pure step function) and [`Animator`] (drives a [`RevealHost`]), which is
//! what the tests exercise with a fake clock.
#![forbid(unsafe_code)]

mod assets;
mod build;
mod config;
mod foundation;
mod page;
mod reveal;

pub use assets::cursor::{SVG_DATA_URL_PREFIX, cursor_data_url};
pub use assets::prolog::{count_rects, strip_xml_declaration, validate_svg};
pub use assets::store::{
    AssetPaths, AssetRole, AssetSet, DEFAULT_ANGEL, DEFAULT_CURSOR, DEFAULT_LOGO,
    DEFAULT_TWO_FIGURES, LoadedAsset, normalize_rel_path,
};
pub use build::pipeline::{BuiltPage, FragmentReport, build_page, write_page};
pub use config::model::{BuildConfig, DEFAULT_OUTPUT};
pub use foundation::error::{RevealError, RevealResult};
pub use foundation::rng::Rng64;
pub use page::script::reveal_script;
pub use page::style::PageStyle;
pub use page::template::{
    FIG_ANGEL, FIG_LOGO, FIG_TWO_FIGURES, PageInputs, REVEAL_FIGURE_IDS, render_page,
};
pub use reveal::animator::{Animator, FrameHandle, RevealHost};
pub use reveal::ease::Ease;
pub use reveal::schedule::{
    DEFAULT_DURATION_MS, DEFAULT_SETTLE_MS, RevealSchedule, RevealTiming, shuffle_in_place,
};
pub use reveal::state::{Phase, RevealState};
