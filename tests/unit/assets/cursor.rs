use super::*;

fn decode_payload(url: &str) -> String {
    let payload = url.strip_prefix(SVG_DATA_URL_PREFIX).unwrap();
    percent_encoding::percent_decode_str(payload)
        .decode_utf8()
        .unwrap()
        .into_owned()
}

#[test]
fn decoding_returns_original_text() {
    let svg = "<?xml version=\"1.0\"?>\n<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"16\" height=\"16\"><path d=\"M0 0L8 12z\" fill=\"#2563eb\"/></svg>\n";
    let url = cursor_data_url(svg);
    assert_eq!(decode_payload(&url), svg);
}

#[test]
fn matches_encode_uri_component() {
    assert_eq!(
        cursor_data_url("<a b=\"c\">#%&/?;:@ü</a>"),
        "data:image/svg+xml,%3Ca%20b%3D%22c%22%3E%23%25%26%2F%3F%3B%3A%40%C3%BC%3C%2Fa%3E"
    );
    assert_eq!(
        cursor_data_url("AZaz09-_.!~*'()"),
        "data:image/svg+xml,AZaz09-_.!~*'()"
    );
}

#[test]
fn output_never_contains_css_breaking_characters() {
    let url = cursor_data_url("<svg>\"quoted\" \\ back\nslash</svg>");
    assert!(!url.contains('"'));
    assert!(!url.contains('\\'));
    assert!(!url.contains('\n'));
    assert!(!url.contains(' '));
}
