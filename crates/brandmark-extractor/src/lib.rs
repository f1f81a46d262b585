//! Company logo and social profile extraction from a website URL.

mod body;
pub mod candidates;
pub mod config;
pub mod download;
pub mod error;
pub mod fetch;
pub mod markup;
pub mod normalize;
pub mod pipeline;
pub mod response;
pub mod social;

pub use candidates::LogoCandidate;
pub use config::{ExtractorConfig, ScoreWeights};
pub use download::{DownloadOutcome, ImageType, Rejection, ValidatedLogo};
pub use error::ExtractorError;
pub use normalize::{normalize_target_url, TargetUrl};
pub use pipeline::{CandidateStep, ExtractionResult, Extractor, FailureReason};
pub use response::LogoResponse;
pub use social::{Platform, SocialProfiles};
