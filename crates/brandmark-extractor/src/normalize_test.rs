use super::*;

#[test]
fn blank_inputs_are_empty() {
    for raw in ["", " ", "\t\n", "   \r\n  "] {
        let err = normalize_target_url(raw).unwrap_err();
        assert!(
            matches!(err, ExtractorError::EmptyInput),
            "expected EmptyInput for {raw:?}, got: {err:?}"
        );
    }
}

#[test]
fn non_absolute_inputs_are_malformed() {
    for raw in ["not a url", "http://", "example.com", "/about", "mailto:hi@example.com"] {
        let err = normalize_target_url(raw).unwrap_err();
        assert!(
            matches!(err, ExtractorError::MalformedUrl { .. }),
            "expected MalformedUrl for {raw:?}, got: {err:?}"
        );
    }
}

#[test]
fn canonicalizes_host_port_and_path() {
    let url = normalize_target_url("  HTTPS://Example.COM:443  ").unwrap();
    assert_eq!(url.as_str(), "https://example.com/");
}

#[test]
fn keeps_non_default_port_and_query() {
    let url = normalize_target_url("http://example.com:8080/shop?ref=a b").unwrap();
    assert_eq!(url.as_str(), "http://example.com:8080/shop?ref=a%20b");
}

#[test]
fn join_resolves_relative_paths() {
    let url = normalize_target_url("https://example.com/about/team").unwrap();
    assert_eq!(
        url.join("../img/logo.png").map(|u| u.to_string()).as_deref(),
        Some("https://example.com/img/logo.png")
    );
    assert_eq!(
        url.join("//cdn.example.com/a.png")
            .map(|u| u.to_string())
            .as_deref(),
        Some("https://cdn.example.com/a.png")
    );
}
