//! Validation and canonicalization of the caller-supplied site URL.

use reqwest::Url;

use crate::error::ExtractorError;

/// An absolute URL with a host, in canonical serialized form.
///
/// Only [`normalize_target_url`] constructs one, so holding a `TargetUrl`
/// means the input already passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetUrl(Url);

impl TargetUrl {
    #[must_use]
    pub fn as_url(&self) -> &Url {
        &self.0
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Resolves `href` against this URL. Returns `None` when it cannot be joined.
    #[must_use]
    pub fn join(&self, href: &str) -> Option<Url> {
        self.0.join(href).ok()
    }
}

impl std::fmt::Display for TargetUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0.as_str())
    }
}

/// Parses `raw` into a [`TargetUrl`].
///
/// Surrounding whitespace is ignored. Parsing follows the WHATWG URL rules,
/// so default ports are dropped, hosts are lowercased, and an empty path
/// becomes `/`.
///
/// # Errors
///
/// - [`ExtractorError::EmptyInput`] if `raw` is empty after trimming.
/// - [`ExtractorError::MalformedUrl`] if it is not an absolute URL with a host.
pub fn normalize_target_url(raw: &str) -> Result<TargetUrl, ExtractorError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ExtractorError::EmptyInput);
    }

    let url = Url::parse(trimmed).map_err(|e| ExtractorError::MalformedUrl {
        input: trimmed.to_string(),
        reason: e.to_string(),
    })?;

    if url.host_str().is_none_or(str::is_empty) {
        return Err(ExtractorError::MalformedUrl {
            input: trimmed.to_string(),
            reason: "URL has no host".to_string(),
        });
    }

    Ok(TargetUrl(url))
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
