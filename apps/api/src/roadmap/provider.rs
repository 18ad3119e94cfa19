//! Roadmap Provider — pluggable, trait-based roadmap source.
//!
//! Default: `LocalRoadmapGenerator` (pure catalog lookup, zero network).
//! Optional: `RemoteRoadmapClient` (POSTs to an external roadmap service,
//! falling back to the local generator on any failure so callers always
//! receive a roadmap).
//!
//! `AppState` holds an `Arc<dyn RoadmapProvider>`, swapped at startup via
//! `ROADMAP_API_URL`.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::AppError;
use crate::roadmap::{roadmap_for, Roadmap};

#[async_trait]
pub trait RoadmapProvider: Send + Sync {
    async fn generate(&self, career_title: &str) -> Result<Roadmap, AppError>;
}

/// Pure in-process generator. Deterministic, no I/O.
pub struct LocalRoadmapGenerator;

#[async_trait]
impl RoadmapProvider for LocalRoadmapGenerator {
    async fn generate(&self, career_title: &str) -> Result<Roadmap, AppError> {
        Ok(roadmap_for(career_title))
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RemoteRoadmapRequest<'a> {
    career_title: &'a str,
}

#[derive(Debug, Deserialize)]
struct RemoteRoadmapResponse {
    success: bool,
    roadmap: Option<Roadmap>,
}

/// Network-backed provider. The remote service returns the same roadmap
/// shape as the local generator; any transport or contract failure degrades
/// to the local catalog so the endpoint never errors on roadmap generation.
pub struct RemoteRoadmapClient {
    client: Client,
    base_url: String,
}

impl RemoteRoadmapClient {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("Failed to build HTTP client"),
            base_url,
        }
    }

    async fn fetch(&self, career_title: &str) -> Result<Roadmap, anyhow::Error> {
        let url = format!("{}/api/roadmap/generate", self.base_url.trim_end_matches('/'));
        let response = self
            .client
            .post(&url)
            .json(&RemoteRoadmapRequest { career_title })
            .send()
            .await?
            .error_for_status()?;

        let body: RemoteRoadmapResponse = response.json().await?;
        if !body.success {
            anyhow::bail!("roadmap service reported failure");
        }
        body.roadmap
            .ok_or_else(|| anyhow::anyhow!("roadmap service returned no roadmap"))
    }
}

#[async_trait]
impl RoadmapProvider for RemoteRoadmapClient {
    async fn generate(&self, career_title: &str) -> Result<Roadmap, AppError> {
        match self.fetch(career_title).await {
            Ok(roadmap) => Ok(roadmap),
            Err(e) => {
                warn!("Remote roadmap generation failed ({e}), using local catalog");
                Ok(roadmap_for(career_title))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_local_provider_matches_pure_generator() {
        let provider = LocalRoadmapGenerator;
        let generated = provider.generate("Data Scientist").await.unwrap();
        assert_eq!(generated, roadmap_for("Data Scientist"));
    }

    #[tokio::test]
    async fn test_remote_provider_falls_back_when_unreachable() {
        // Nothing listens on the discard port; the connection is refused and
        // the client must hand back the local catalog roadmap.
        let provider = RemoteRoadmapClient::new("http://127.0.0.1:9".to_string());
        let generated = provider.generate("UX/UI Designer").await.unwrap();
        assert_eq!(generated, roadmap_for("UX/UI Designer"));
    }
}
