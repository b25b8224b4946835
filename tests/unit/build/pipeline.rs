use super::*;
use crate::assets::store::{DEFAULT_ANGEL, DEFAULT_CURSOR, DEFAULT_LOGO, DEFAULT_TWO_FIGURES};

fn svg(id: &str, rects: usize) -> String {
    let mut body = String::new();
    for i in 0..rects {
        body.push_str(&format!(
            r##"<rect x="{i}" y="0" width="1" height="1" fill="#000"/>"##
        ));
    }
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" id="{id}" width="8" height="8" viewBox="0 0 8 8">{body}</svg>"#
    )
}

fn fixture(name: &str) -> PathBuf {
    let dir = PathBuf::from("target").join("unit_pipeline").join(name);
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(
        dir.join(DEFAULT_LOGO),
        format!("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n{}\n", svg("logo", 1)),
    )
    .unwrap();
    std::fs::write(dir.join(DEFAULT_TWO_FIGURES), svg("boat", 2)).unwrap();
    std::fs::write(dir.join(DEFAULT_ANGEL), svg("angel", 3)).unwrap();
    std::fs::write(
        dir.join(DEFAULT_CURSOR),
        "<?xml version=\"1.0\"?><svg xmlns=\"http://www.w3.org/2000/svg\" width=\"16\" height=\"16\"/>",
    )
    .unwrap();
    dir
}

#[test]
fn build_reports_each_figure() {
    let dir = fixture("reports");
    let page = build_page(&BuildConfig::default(), &dir).unwrap();

    assert_eq!(
        page.fragments,
        vec![
            FragmentReport {
                role: AssetRole::Logo,
                rects: 1,
                stripped_prolog: true,
            },
            FragmentReport {
                role: AssetRole::TwoFigures,
                rects: 2,
                stripped_prolog: false,
            },
            FragmentReport {
                role: AssetRole::Angel,
                rects: 3,
                stripped_prolog: false,
            },
        ]
    );
    assert_eq!(page.total_rects(), 6);
    assert_eq!(page.schedule.len(), 6);
    assert_eq!(page.output_path, dir.join("pixel-reveal.html"));
}

#[test]
fn html_inlines_stripped_fragments_once() {
    let dir = fixture("inline");
    let page = build_page(&BuildConfig::default(), &dir).unwrap();

    for frag in [svg("logo", 1), svg("boat", 2), svg("angel", 3)] {
        assert_eq!(page.html.matches(frag.as_str()).count(), 1);
    }
    assert!(!page.html.contains("<?xml"));
    assert!(page.html.contains("data:image/svg+xml,%3C%3Fxml"));
}

#[test]
fn build_does_not_write() {
    let dir = fixture("no_write");
    let page = build_page(&BuildConfig::default(), &dir).unwrap();
    assert!(!page.output_path.exists());
}

#[test]
fn write_overwrites_and_is_idempotent() {
    let dir = fixture("write");
    let out = dir.join("pixel-reveal.html");
    std::fs::write(&out, "stale").unwrap();

    let first = build_page(&BuildConfig::default(), &dir).unwrap();
    write_page(&first).unwrap();
    let a = std::fs::read_to_string(&out).unwrap();
    assert_eq!(a, first.html);

    let second = build_page(&BuildConfig::default(), &dir).unwrap();
    write_page(&second).unwrap();
    assert_eq!(std::fs::read_to_string(&out).unwrap(), a);
    assert_eq!(first.sha256_hex(), second.sha256_hex());
}

#[test]
fn nested_output_creates_directories() {
    let dir = fixture("nested");
    let cfg = BuildConfig {
        output: "site/public/index.html".to_string(),
        ..BuildConfig::default()
    };
    let page = build_page(&cfg, &dir).unwrap();
    write_page(&page).unwrap();
    assert!(dir.join("site/public/index.html").is_file());
}

#[test]
fn missing_asset_fails_without_output() {
    let dir = fixture("missing");
    std::fs::remove_file(dir.join(DEFAULT_CURSOR)).unwrap();
    let err = build_page(&BuildConfig::default(), &dir).unwrap_err();
    assert!(err.to_string().contains(DEFAULT_CURSOR), "{err}");
    assert!(!dir.join("pixel-reveal.html").exists());
}

fn validating() -> BuildConfig {
    BuildConfig {
        validate_svg: true,
        ..BuildConfig::default()
    }
}

#[test]
fn invalid_svg_is_embedded_unless_validation_is_on() {
    let dir = fixture("invalid");
    std::fs::write(dir.join(DEFAULT_ANGEL), "<svg><rect></svg>").unwrap();

    let page = build_page(&BuildConfig::default(), &dir).unwrap();
    assert!(page.html.contains("<svg><rect></svg>"));

    let err = build_page(&validating(), &dir).unwrap_err();
    assert!(matches!(err, RevealError::Asset(_)), "{err}");
}

#[test]
fn zero_size_figures_build_by_default() {
    let dir = fixture("zero_size");
    let zero = r#"<svg xmlns="http://www.w3.org/2000/svg" width="0" height="0"><rect x="0" y="0" width="1" height="1"/></svg>"#;
    for name in [DEFAULT_LOGO, DEFAULT_TWO_FIGURES, DEFAULT_ANGEL] {
        std::fs::write(dir.join(name), zero).unwrap();
    }

    let page = build_page(&BuildConfig::default(), &dir).unwrap();
    assert_eq!(page.total_rects(), 3);
    assert_eq!(page.html.matches(zero).count(), 3);
    write_page(&page).unwrap();
    assert!(page.output_path.is_file());

    // usvg refuses a zero-size document, so only an opted-in check fails.
    assert!(matches!(
        build_page(&validating(), &dir).unwrap_err(),
        RevealError::Asset(_)
    ));
}

#[test]
fn empty_fragment_only_fails_when_validating() {
    let dir = fixture("empty");
    std::fs::write(dir.join(DEFAULT_LOGO), "<?xml version=\"1.0\"?>\n").unwrap();

    let page = build_page(&BuildConfig::default(), &dir).unwrap();
    assert_eq!(page.fragments[0].rects, 0);

    let err = build_page(&validating(), &dir).unwrap_err();
    assert!(matches!(err, RevealError::Asset(_)), "{err}");
}

#[test]
fn sha256_is_lowercase_hex() {
    let dir = fixture("digest");
    let page = build_page(&BuildConfig::default(), &dir).unwrap();
    let hex = page.sha256_hex();
    assert_eq!(hex.len(), 64);
    assert!(hex.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')));
}
