//! HTTP client construction and page retrieval.

use reqwest::redirect::Policy;
use reqwest::Client;

use crate::body::{read_capped, BodyRead};
use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use crate::normalize::TargetUrl;

/// Builds the client shared by the page fetch and every image fetch.
///
/// # Errors
///
/// Returns [`ExtractorError::ClientBuild`] if the underlying `reqwest::Client`
/// cannot be constructed (e.g., invalid TLS config).
pub fn build_client(config: &ExtractorConfig) -> Result<Client, ExtractorError> {
    Client::builder()
        .timeout(config.fetch_timeout)
        .connect_timeout(config.connect_timeout)
        .redirect(Policy::limited(config.max_redirects))
        .user_agent(config.user_agent.as_str())
        .build()
        .map_err(ExtractorError::ClientBuild)
}

/// Fetches the raw markup at `url`, following redirects up to the client's cap.
///
/// The body is decoded as UTF-8, replacing invalid sequences.
///
/// # Errors
///
/// - [`ExtractorError::HttpStatus`] for any non-2xx final response.
/// - [`ExtractorError::PageTooLarge`] once the body reaches `max_bytes`.
/// - [`ExtractorError::Network`] for transport failures, timeouts, too many
///   redirects, or a body that cannot be read.
pub async fn fetch_page(
    client: &Client,
    url: &TargetUrl,
    max_bytes: usize,
) -> Result<String, ExtractorError> {
    let response = client
        .get(url.as_str())
        .header(
            reqwest::header::ACCEPT,
            "text/html,application/xhtml+xml;q=0.9,*/*;q=0.8",
        )
        .header(reqwest::header::ACCEPT_LANGUAGE, "en-US,en;q=0.9")
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(ExtractorError::HttpStatus {
            status: status.as_u16(),
            url: response.url().to_string(),
        });
    }

    let final_url = response.url().to_string();
    match read_capped(response, max_bytes).await? {
        BodyRead::Complete(data) => Ok(String::from_utf8_lossy(&data).into_owned()),
        BodyRead::Exceeded { observed } => Err(ExtractorError::PageTooLarge {
            size: observed,
            url: final_url,
        }),
    }
}
