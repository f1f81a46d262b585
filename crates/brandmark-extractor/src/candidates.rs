//! Logo candidate discovery and relevance scoring over `<img>` elements.
//!
//! Only raster `.jpg`/`.jpeg`/`.png` sources are considered. Each qualifying
//! image is scored from its lowercased `src`, `alt`, `id`, and `class`; the
//! orchestrator then tries candidates highest score first.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::ScoreWeights;
use crate::markup::{PageDocument, PageElement};
use crate::normalize::TargetUrl;

static RASTER_EXT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\.(?:jpe?g|png)(?:[?#].*)?$").expect("valid raster extension regex")
});
static LOGO_PATH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/logo\.").expect("valid logo path regex"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogoCandidate {
    pub url: String,
    pub score: i32,
}

/// Collects a scored candidate for every qualifying `<img>`, in document order.
///
/// An image is skipped when its `src` is empty, is a `data:` URL, does not
/// end in a raster extension, or cannot be resolved against `base`.
#[must_use]
pub fn scan_logo_candidates(
    document: &PageDocument,
    base: &TargetUrl,
    weights: &ScoreWeights,
) -> Vec<LogoCandidate> {
    document
        .images()
        .filter_map(|img| candidate_from_image(img, base, weights))
        .collect()
}

fn candidate_from_image(
    img: PageElement<'_>,
    base: &TargetUrl,
    weights: &ScoreWeights,
) -> Option<LogoCandidate> {
    let raw_src = img.attr_or_empty("src").trim();
    if raw_src.is_empty() {
        return None;
    }
    let src = raw_src.to_ascii_lowercase();
    if src.starts_with("data:") || !RASTER_EXT_RE.is_match(&src) {
        return None;
    }

    let url = base.join(raw_src)?.to_string();
    let score = score_image(
        &src,
        img.attr_or_empty("alt"),
        img.attr_or_empty("id"),
        img.attr_or_empty("class"),
        weights,
    );

    Some(LogoCandidate { url, score })
}

/// Additive relevance score for one image.
///
/// `src` must already be lowercased; the other attributes are lowercased here.
#[must_use]
pub fn score_image(src: &str, alt: &str, id: &str, class: &str, weights: &ScoreWeights) -> i32 {
    let marker = [src, alt, id, class].join(" ").to_lowercase();

    let mut score = 0;
    if marker.contains("logo") {
        score += weights.logo;
    }
    if marker.contains("brand") {
        score += weights.brand;
    }
    if marker.contains("header") || marker.contains("navbar") {
        score += weights.header_or_navbar;
    }
    if marker.contains("site") || marker.contains("main") {
        score += weights.site_or_main;
    }
    if LOGO_PATH_RE.is_match(src) {
        score += weights.logo_path;
    }
    score
}
