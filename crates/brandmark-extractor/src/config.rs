//! Fixed tables and thresholds for one extraction, injected into
//! [`crate::Extractor`] rather than read from globals.

use std::time::Duration;

use brandmark_core::AppConfig;

use crate::social::Platform;

/// Hard upper bound on logo size. A body of exactly this many bytes is rejected.
pub const DEFAULT_MAX_LOGO_BYTES: usize = 2 * 1024 * 1024;

/// Pages of this many bytes or more are not parsed.
pub const DEFAULT_MAX_PAGE_BYTES: usize = 8 * 1024 * 1024;

pub const DEFAULT_USER_AGENT: &str = "brandmark/0.1 (logo-extractor)";

/// Platform to domain table. Hostnames match a domain exactly or as a
/// `.`-separated suffix.
pub const DEFAULT_SOCIAL_DOMAINS: &[(Platform, &[&str])] = &[
    (Platform::Facebook, &["facebook.com"]),
    (Platform::Linkedin, &["linkedin.com"]),
    (Platform::Twitter, &["twitter.com", "x.com"]),
    (Platform::Youtube, &["youtube.com", "youtu.be"]),
    (Platform::Discord, &["discord.com"]),
    (Platform::Instagram, &["instagram.com"]),
    (Platform::Pinterest, &["pinterest.com"]),
    (Platform::Snapchat, &["snapchat.com"]),
    (Platform::Tiktok, &["tiktok.com"]),
];

/// Additive weights for the logo relevance heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreWeights {
    /// Marker text contains `logo`.
    pub logo: i32,
    /// Marker text contains `brand`.
    pub brand: i32,
    /// Marker text contains `header` or `navbar`.
    pub header_or_navbar: i32,
    /// Marker text contains `site` or `main`.
    pub site_or_main: i32,
    /// `src` contains a `/logo.` path segment.
    pub logo_path: i32,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            logo: 10,
            brand: 4,
            header_or_navbar: 2,
            site_or_main: 1,
            logo_path: 5,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ExtractorConfig {
    pub user_agent: String,
    pub fetch_timeout: Duration,
    pub connect_timeout: Duration,
    pub max_redirects: usize,
    pub max_logo_bytes: usize,
    pub max_page_bytes: usize,
    pub weights: ScoreWeights,
    pub social_domains: &'static [(Platform, &'static [&'static str])],
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            fetch_timeout: Duration::from_secs(20),
            connect_timeout: Duration::from_secs(10),
            max_redirects: 10,
            max_logo_bytes: DEFAULT_MAX_LOGO_BYTES,
            max_page_bytes: DEFAULT_MAX_PAGE_BYTES,
            weights: ScoreWeights::default(),
            social_domains: DEFAULT_SOCIAL_DOMAINS,
        }
    }
}

impl ExtractorConfig {
    /// Overlays the env-driven HTTP and size settings onto the default tables.
    #[must_use]
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            user_agent: config.user_agent.clone(),
            fetch_timeout: Duration::from_secs(config.fetch_timeout_secs),
            connect_timeout: Duration::from_secs(config.connect_timeout_secs),
            max_redirects: config.max_redirects,
            max_logo_bytes: config.max_logo_bytes,
            ..Self::default()
        }
    }
}
