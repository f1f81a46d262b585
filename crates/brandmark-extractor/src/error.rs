use thiserror::Error;

/// Failures raised inside the extraction pipeline.
///
/// None of these reach the caller of [`crate::Extractor::extract`]; the
/// orchestrator folds each one into an [`crate::ExtractionResult::Failure`].
#[derive(Debug, Error)]
pub enum ExtractorError {
    #[error("empty URL")]
    EmptyInput,

    #[error("malformed URL \"{input}\": {reason}")]
    MalformedUrl { input: String, reason: String },

    #[error("unexpected HTTP status {status} from {url}")]
    HttpStatus { status: u16, url: String },

    #[error("page at {url} is {size} bytes or more")]
    PageTooLarge { size: usize, url: String },

    /// DNS, TLS, connection, timeout, or redirect-cap failure.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),
}
