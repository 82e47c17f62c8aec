pub mod api;
pub mod config;
pub mod error;
pub mod model;
pub mod seed;
pub mod store;
pub mod transport;

use anyhow::Context;
use reqwest::Url;
use std::path::Path;

pub use error::{LoadError, ManifestError};
pub use model::*;
pub use seed::{dispatch, run_manifest, InstructionOutcome, RunSummary};
pub use transport::{HttpRestClient, RestClient, RestRequest, RestResponse};

/// Seed the API at `host` with the instructions in the manifest at `manifest_path`.
///
/// The manifest is read and checked before any request is sent. One HTTP
/// client serves the whole run and is released when the run ends.
pub async fn run(host: &Url, manifest_path: &Path) -> anyhow::Result<RunSummary> {
    let manifest = Manifest::load(manifest_path)?;
    manifest.validate()?;
    if manifest.is_empty() {
        log::warn!("Manifest {} has no instructions", manifest_path.display());
    }
    log::info!(
        "Loaded {} instruction(s) from {}",
        manifest.len(),
        manifest_path.display()
    );

    let client = HttpRestClient::new(host.clone()).context("Failed to create HTTP client")?;
    let summary = run_manifest(&client, &manifest).await?;

    log::info!(
        "Run finished: {} completed, {} failed, {} skipped",
        summary.completed(),
        summary.failed(),
        summary.skipped()
    );
    Ok(summary)
}
