//! `brandmark-cli extract` command.

use std::path::Path;

use anyhow::Context;
use brandmark_extractor::{ExtractionResult, Extractor, LogoResponse};

/// Runs one extraction and reports it on stdout.
///
/// Returns whether a logo was found.
pub(super) async fn run_extract(
    extractor: &Extractor,
    url: &str,
    output: Option<&Path>,
    json: bool,
) -> anyhow::Result<bool> {
    let result = extractor.extract(url).await;
    let succeeded = result.is_success();

    if let (Some(path), ExtractionResult::Success { logo, .. }) = (output, &result) {
        std::fs::write(path, &logo.data)
            .with_context(|| format!("failed to write logo to {}", path.display()))?;
        tracing::info!(path = %path.display(), size = logo.size_bytes, "logo written");
    }

    if json {
        let body = serde_json::to_string_pretty(&LogoResponse::from(result))?;
        println!("{body}");
    } else {
        print_summary(&result);
    }

    Ok(succeeded)
}

fn print_summary(result: &ExtractionResult) {
    println!("{}", result.message());

    if let ExtractionResult::Success { logo, .. } = result {
        println!(
            "logo: {} ({}, {} bytes)",
            logo.url,
            logo.content_type.mime(),
            logo.size_bytes
        );
    }

    match result.social_profiles() {
        Some(profiles) if !profiles.is_empty() => {
            for (platform, url) in profiles.iter() {
                println!("{platform}: {url}");
            }
        }
        Some(_) => println!("no social profiles found"),
        None => {}
    }
}
