//! Social profile discovery from anchor `href`s.

use serde::Serialize;

use crate::markup::PageDocument;
use crate::normalize::TargetUrl;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Facebook,
    Linkedin,
    Twitter,
    Youtube,
    Discord,
    Instagram,
    Pinterest,
    Snapchat,
    Tiktok,
}

impl Platform {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Facebook => "facebook",
            Platform::Linkedin => "linkedin",
            Platform::Twitter => "twitter",
            Platform::Youtube => "youtube",
            Platform::Discord => "discord",
            Platform::Instagram => "instagram",
            Platform::Pinterest => "pinterest",
            Platform::Snapchat => "snapchat",
            Platform::Tiktok => "tiktok",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One nullable profile URL per platform. Each field is written at most once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SocialProfiles {
    pub facebook: Option<String>,
    pub linkedin: Option<String>,
    pub twitter: Option<String>,
    pub youtube: Option<String>,
    pub discord: Option<String>,
    pub instagram: Option<String>,
    pub pinterest: Option<String>,
    pub snapchat: Option<String>,
    pub tiktok: Option<String>,
}

impl SocialProfiles {
    #[must_use]
    pub fn get(&self, platform: Platform) -> Option<&str> {
        self.slot(platform).as_deref()
    }

    /// Iterates over the filled platforms in table order.
    pub fn iter(&self) -> impl Iterator<Item = (Platform, &str)> {
        [
            Platform::Facebook,
            Platform::Linkedin,
            Platform::Twitter,
            Platform::Youtube,
            Platform::Discord,
            Platform::Instagram,
            Platform::Pinterest,
            Platform::Snapchat,
            Platform::Tiktok,
        ]
        .into_iter()
        .filter_map(|p| self.get(p).map(|url| (p, url)))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    fn slot(&self, platform: Platform) -> &Option<String> {
        match platform {
            Platform::Facebook => &self.facebook,
            Platform::Linkedin => &self.linkedin,
            Platform::Twitter => &self.twitter,
            Platform::Youtube => &self.youtube,
            Platform::Discord => &self.discord,
            Platform::Instagram => &self.instagram,
            Platform::Pinterest => &self.pinterest,
            Platform::Snapchat => &self.snapchat,
            Platform::Tiktok => &self.tiktok,
        }
    }

    fn slot_mut(&mut self, platform: Platform) -> &mut Option<String> {
        match platform {
            Platform::Facebook => &mut self.facebook,
            Platform::Linkedin => &mut self.linkedin,
            Platform::Twitter => &mut self.twitter,
            Platform::Youtube => &mut self.youtube,
            Platform::Discord => &mut self.discord,
            Platform::Instagram => &mut self.instagram,
            Platform::Pinterest => &mut self.pinterest,
            Platform::Snapchat => &mut self.snapchat,
            Platform::Tiktok => &mut self.tiktok,
        }
    }
}

/// `true` if `host` equals `domain` or is a subdomain of it.
fn host_matches(host: &str, domain: &str) -> bool {
    host == domain
        || host
            .strip_suffix(domain)
            .is_some_and(|prefix| prefix.ends_with('.'))
}

/// Finds the first matching anchor for every platform in `domains`.
///
/// Anchors are visited in document order; a platform keeps the first URL
/// that matched it. Hrefs that cannot be resolved against `base`, or that
/// resolve to a URL without a host, are skipped.
#[must_use]
pub fn classify_social_links(
    document: &PageDocument,
    base: &TargetUrl,
    domains: &[(Platform, &[&str])],
) -> SocialProfiles {
    let mut profiles = SocialProfiles::default();

    for anchor in document.anchors() {
        let href = anchor.attr_or_empty("href").trim();
        if href.is_empty() {
            continue;
        }
        let Some(resolved) = base.join(href) else {
            continue;
        };
        let Some(host) = resolved.host_str().map(str::to_ascii_lowercase) else {
            continue;
        };

        let matched = domains.iter().find(|(platform, platform_domains)| {
            profiles.slot(*platform).is_none()
                && platform_domains.iter().any(|d| host_matches(&host, d))
        });

        if let Some((platform, _)) = matched {
            tracing::debug!(platform = %platform, url = %resolved, "social profile found");
            *profiles.slot_mut(*platform) = Some(resolved.to_string());
        }
    }

    profiles
}
