//! Candidate image download and gating by content type and size.

use reqwest::Client;

use crate::body::{read_capped, BodyRead};

/// Accepted raster formats. `image/jpg` is folded into [`ImageType::Jpeg`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageType {
    Jpeg,
    Png,
}

impl ImageType {
    #[must_use]
    pub fn mime(self) -> &'static str {
        match self {
            ImageType::Jpeg => "image/jpeg",
            ImageType::Png => "image/png",
        }
    }

    /// Classifies a `Content-Type` header value by prefix, case-insensitively.
    ///
    /// The header is trusted as-is; the body is never sniffed.
    #[must_use]
    pub fn from_content_type(value: &str) -> Option<Self> {
        let value = value.trim().to_ascii_lowercase();
        if value.starts_with("image/jpeg") || value.starts_with("image/jpg") {
            Some(ImageType::Jpeg)
        } else if value.starts_with("image/png") {
            Some(ImageType::Png)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedLogo {
    pub url: String,
    pub size_bytes: usize,
    pub content_type: ImageType,
    pub data: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    FetchFailed { status: u16 },
    UnsupportedType { content_type: String },
    DownloadError { reason: String },
    TooLarge { size: usize },
}

impl Rejection {
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Rejection::FetchFailed { .. } => "fetch_failed",
            Rejection::UnsupportedType { .. } => "unsupported_type",
            Rejection::DownloadError { .. } => "download_error",
            Rejection::TooLarge { .. } => "too_large",
        }
    }
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rejection::FetchFailed { status } => write!(f, "fetch_failed (HTTP {status})"),
            Rejection::UnsupportedType { content_type } => {
                write!(f, "unsupported_type ({content_type})")
            }
            Rejection::DownloadError { reason } => write!(f, "download_error ({reason})"),
            Rejection::TooLarge { size } => write!(f, "too_large ({size} bytes)"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadOutcome {
    Accepted(ValidatedLogo),
    Rejected(Rejection),
}

/// Downloads one candidate image and checks it against the format and size gates.
///
/// Never fails: transport errors become [`Rejection::DownloadError`]. The
/// content type is checked before the body is read, so unsupported assets
/// are not downloaded at all. Bodies of `max_bytes` or more are refused from
/// their declared length, or cut off once that many bytes have arrived; the
/// reported size is whatever was observed at that point.
pub async fn download_image(client: &Client, url: &str, max_bytes: usize) -> DownloadOutcome {
    let response = match client.get(url).send().await {
        Ok(response) => response,
        Err(e) => {
            return DownloadOutcome::Rejected(Rejection::DownloadError {
                reason: e.to_string(),
            })
        }
    };

    let status = response.status();
    if !status.is_success() {
        return DownloadOutcome::Rejected(Rejection::FetchFailed {
            status: status.as_u16(),
        });
    }

    let raw_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    let Some(content_type) = ImageType::from_content_type(&raw_type) else {
        return DownloadOutcome::Rejected(Rejection::UnsupportedType {
            content_type: raw_type,
        });
    };

    let data = match read_capped(response, max_bytes).await {
        Ok(BodyRead::Complete(data)) => data,
        Ok(BodyRead::Exceeded { observed }) => {
            return DownloadOutcome::Rejected(Rejection::TooLarge { size: observed });
        }
        Err(e) => {
            return DownloadOutcome::Rejected(Rejection::DownloadError {
                reason: e.to_string(),
            })
        }
    };

    DownloadOutcome::Accepted(ValidatedLogo {
        url: url.to_string(),
        size_bytes: data.len(),
        content_type,
        data,
    })
}
