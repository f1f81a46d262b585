//! JSON wire shape of an [`ExtractionResult`], shared by the HTTP server and the CLI.

use base64::Engine;
use serde::Serialize;

use crate::download::ValidatedLogo;
use crate::pipeline::{ExtractionResult, FailureReason};
use crate::social::SocialProfiles;

/// `{ success, message, logo?, socialProfiles? }`. Absent fields are omitted.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogoResponse {
    pub success: bool,
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<LogoBody>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub social_profiles: Option<SocialProfiles>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogoBody {
    pub url: String,
    pub size: usize,
    pub content_type: &'static str,
    /// Standard padded base64 of the image bytes.
    pub data: String,
}

impl From<ValidatedLogo> for LogoBody {
    fn from(logo: ValidatedLogo) -> Self {
        Self {
            data: base64::engine::general_purpose::STANDARD.encode(&logo.data),
            url: logo.url,
            size: logo.size_bytes,
            content_type: logo.content_type.mime(),
        }
    }
}

impl LogoResponse {
    /// Response for a request that never reached the pipeline because `url` was blank.
    #[must_use]
    pub fn empty_url() -> Self {
        Self {
            success: false,
            message: FailureReason::EmptyUrl.message(),
            logo: None,
            social_profiles: None,
        }
    }
}

impl From<ExtractionResult> for LogoResponse {
    fn from(result: ExtractionResult) -> Self {
        let message = result.message();
        match result {
            ExtractionResult::Success {
                logo,
                social_profiles,
            } => Self {
                success: true,
                message,
                logo: Some(logo.into()),
                social_profiles: Some(social_profiles),
            },
            ExtractionResult::Failure {
                social_profiles, ..
            } => Self {
                success: false,
                message,
                logo: None,
                social_profiles,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::download::ImageType;

    #[test]
    fn empty_url_has_only_success_and_message() {
        let json = serde_json::to_value(LogoResponse::empty_url()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "success": false, "message": "False" })
        );
    }

    #[test]
    fn downstream_failure_keeps_all_nine_profile_fields() {
        let response = LogoResponse::from(ExtractionResult::Failure {
            reason: FailureReason::LogoTooLarge,
            social_profiles: Some(SocialProfiles {
                tiktok: Some("https://www.tiktok.com/@acme".to_string()),
                ..SocialProfiles::default()
            }),
        });
        let json = serde_json::to_value(response).unwrap();
        assert_eq!(json["message"], "logo greater than image limit");
        assert!(json.get("logo").is_none());
        let profiles = json["socialProfiles"].as_object().unwrap();
        assert_eq!(profiles.len(), 9);
        assert_eq!(profiles["tiktok"], "https://www.tiktok.com/@acme");
        assert!(profiles["snapchat"].is_null());
    }

    #[test]
    fn logo_bytes_round_trip_through_base64() {
        let bytes: Vec<u8> = (0..=255).collect();
        let response = LogoResponse::from(ExtractionResult::Success {
            logo: ValidatedLogo {
                url: "https://example.com/logo.jpg".to_string(),
                size_bytes: bytes.len(),
                content_type: ImageType::Jpeg,
                data: bytes.clone(),
            },
            social_profiles: SocialProfiles::default(),
        });
        let json = serde_json::to_value(response).unwrap();
        assert_eq!(json["logo"]["contentType"], "image/jpeg");
        assert_eq!(json["logo"]["size"], 256);
        let decoded = base64::engine::general_purpose::STANDARD
            .decode(json["logo"]["data"].as_str().unwrap())
            .unwrap();
        assert_eq!(decoded, bytes);
    }
}
