//! Extraction orchestrator: normalize, fetch, parse, classify, scan, then
//! validate candidates highest score first.

use std::any::Any;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;
use reqwest::Client;

use crate::candidates::{scan_logo_candidates, LogoCandidate};
use crate::config::ExtractorConfig;
use crate::download::{download_image, DownloadOutcome, Rejection, ValidatedLogo};
use crate::error::ExtractorError;
use crate::fetch::{build_client, fetch_page};
use crate::markup::PageDocument;
use crate::normalize::{normalize_target_url, TargetUrl};
use crate::social::{classify_social_links, SocialProfiles};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureReason {
    EmptyUrl,
    MalformedUrl,
    /// Page unreachable, no qualifying image, every candidate rejected for a
    /// non-size reason, or an internal failure.
    CouldNotIdentifyLogo,
    LogoTooLarge,
}

impl FailureReason {
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            FailureReason::EmptyUrl => "empty_url",
            FailureReason::MalformedUrl => "malformed_url",
            FailureReason::CouldNotIdentifyLogo => "could_not_identify_logo",
            FailureReason::LogoTooLarge => "logo_too_large",
        }
    }

    /// Fixed caller-facing message token.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            FailureReason::EmptyUrl => "False",
            FailureReason::MalformedUrl => "Malformed URL",
            FailureReason::CouldNotIdentifyLogo => "could not identify logo",
            FailureReason::LogoTooLarge => "logo greater than image limit",
        }
    }
}

/// Terminal outcome of one extraction.
///
/// Input validation failures carry no social profiles; every later failure
/// carries whatever was discovered (possibly all empty).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractionResult {
    Success {
        logo: ValidatedLogo,
        social_profiles: SocialProfiles,
    },
    Failure {
        reason: FailureReason,
        social_profiles: Option<SocialProfiles>,
    },
}

impl ExtractionResult {
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, ExtractionResult::Success { .. })
    }

    #[must_use]
    pub fn message(&self) -> &'static str {
        match self {
            ExtractionResult::Success { .. } => "OK",
            ExtractionResult::Failure { reason, .. } => reason.message(),
        }
    }

    #[must_use]
    pub fn failure_reason(&self) -> Option<FailureReason> {
        match self {
            ExtractionResult::Success { .. } => None,
            ExtractionResult::Failure { reason, .. } => Some(*reason),
        }
    }

    #[must_use]
    pub fn social_profiles(&self) -> Option<&SocialProfiles> {
        match self {
            ExtractionResult::Success {
                social_profiles, ..
            } => Some(social_profiles),
            ExtractionResult::Failure {
                social_profiles, ..
            } => social_profiles.as_ref(),
        }
    }

    fn failure(reason: FailureReason, social_profiles: Option<SocialProfiles>) -> Self {
        ExtractionResult::Failure {
            reason,
            social_profiles,
        }
    }
}

/// What the candidate loop does with one download outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CandidateStep {
    /// Stop and return this logo.
    Accept(ValidatedLogo),
    /// Try the next candidate.
    Continue(Rejection),
    /// Stop trying candidates altogether.
    Halt(Rejection),
}

impl From<DownloadOutcome> for CandidateStep {
    fn from(outcome: DownloadOutcome) -> Self {
        match outcome {
            DownloadOutcome::Accepted(logo) => CandidateStep::Accept(logo),
            DownloadOutcome::Rejected(rejection @ Rejection::TooLarge { .. }) => {
                CandidateStep::Halt(rejection)
            }
            DownloadOutcome::Rejected(rejection) => CandidateStep::Continue(rejection),
        }
    }
}

/// Sorts candidates by descending score. Ties keep discovery order.
pub fn rank_candidates(candidates: &mut [LogoCandidate]) {
    candidates.sort_by(|a, b| b.score.cmp(&a.score));
}

/// Awaits `pipeline`, turning a panic into a could-not-identify failure with
/// empty profiles.
async fn guard_panics<F>(pipeline: F) -> ExtractionResult
where
    F: Future<Output = ExtractionResult>,
{
    match AssertUnwindSafe(pipeline).catch_unwind().await {
        Ok(result) => result,
        Err(payload) => {
            tracing::error!(panic = panic_message(payload.as_ref()), "extraction panicked");
            ExtractionResult::failure(
                FailureReason::CouldNotIdentifyLogo,
                Some(SocialProfiles::default()),
            )
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("unknown panic")
}

struct PageScan {
    social_profiles: SocialProfiles,
    candidates: Vec<LogoCandidate>,
}

/// Stateless entry point for logo and social profile extraction.
///
/// Cheap to clone; clones share the HTTP connection pool.
#[derive(Clone)]
pub struct Extractor {
    client: Client,
    config: Arc<ExtractorConfig>,
}

impl Extractor {
    /// # Errors
    ///
    /// Returns [`ExtractorError::ClientBuild`] if the HTTP client cannot be built.
    pub fn new(config: ExtractorConfig) -> Result<Self, ExtractorError> {
        let client = build_client(&config)?;
        Ok(Self {
            client,
            config: Arc::new(config),
        })
    }

    /// Runs the full pipeline for one caller-supplied URL.
    ///
    /// Always returns a result value. A panic after normalization yields
    /// [`FailureReason::CouldNotIdentifyLogo`]. All work runs inside the
    /// returned future, so dropping it stops any in-flight download.
    #[tracing::instrument(skip_all, fields(input = %raw))]
    pub async fn extract(&self, raw: &str) -> ExtractionResult {
        let target = match normalize_target_url(raw) {
            Ok(target) => target,
            Err(ExtractorError::EmptyInput) => {
                return ExtractionResult::failure(FailureReason::EmptyUrl, None);
            }
            Err(e) => {
                tracing::debug!(error = %e, "rejecting input URL");
                return ExtractionResult::failure(FailureReason::MalformedUrl, None);
            }
        };

        guard_panics(self.extract_from(&target)).await
    }

    async fn extract_from(&self, target: &TargetUrl) -> ExtractionResult {
        let html = match fetch_page(&self.client, target, self.config.max_page_bytes).await {
            Ok(html) => html,
            Err(e) => {
                tracing::warn!(url = %target, error = %e, "page fetch failed");
                return ExtractionResult::failure(
                    FailureReason::CouldNotIdentifyLogo,
                    Some(SocialProfiles::default()),
                );
            }
        };

        let PageScan {
            social_profiles,
            mut candidates,
        } = self.scan_page(&html, target);

        if candidates.is_empty() {
            tracing::info!(url = %target, "no raster logo candidates on page");
            return ExtractionResult::failure(
                FailureReason::CouldNotIdentifyLogo,
                Some(social_profiles),
            );
        }

        rank_candidates(&mut candidates);

        for candidate in candidates {
            let outcome =
                download_image(&self.client, &candidate.url, self.config.max_logo_bytes).await;
            match CandidateStep::from(outcome) {
                CandidateStep::Accept(logo) => {
                    tracing::info!(
                        url = %logo.url,
                        score = candidate.score,
                        size = logo.size_bytes,
                        "logo accepted"
                    );
                    return ExtractionResult::Success {
                        logo,
                        social_profiles,
                    };
                }
                CandidateStep::Halt(rejection) => {
                    tracing::info!(
                        url = %candidate.url,
                        reason = %rejection,
                        "logo exceeds size limit; not trying further candidates"
                    );
                    return ExtractionResult::failure(
                        FailureReason::LogoTooLarge,
                        Some(social_profiles),
                    );
                }
                CandidateStep::Continue(rejection) => {
                    tracing::debug!(
                        url = %candidate.url,
                        score = candidate.score,
                        reason = %rejection,
                        "candidate rejected"
                    );
                }
            }
        }

        tracing::info!(url = %target, "every logo candidate was rejected");
        ExtractionResult::failure(FailureReason::CouldNotIdentifyLogo, Some(social_profiles))
    }

    // The parsed document lives only inside this call.
    fn scan_page(&self, html: &str, target: &TargetUrl) -> PageScan {
        let document = PageDocument::parse(html);
        let social_profiles =
            classify_social_links(&document, target, self.config.social_domains);
        let candidates = scan_logo_candidates(&document, target, &self.config.weights);
        PageScan {
            social_profiles,
            candidates,
        }
    }
}
