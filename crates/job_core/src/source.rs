//! Data source capability: one read of the job payload.

use std::path::PathBuf;

use async_trait::async_trait;
use reqwest::Client;
use shared::{
    domain::{parse_job_payload, JobRecord},
    error::LoadError,
};
use tracing::{info, warn};
use url::Url;

#[async_trait]
pub trait DataSource: Send + Sync {
    /// Fetches and decodes the full job collection.
    async fn fetch(&self) -> Result<Vec<JobRecord>, LoadError>;

    fn describe(&self) -> String;
}

pub struct FileDataSource {
    path: PathBuf,
}

impl FileDataSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl DataSource for FileDataSource {
    async fn fetch(&self) -> Result<Vec<JobRecord>, LoadError> {
        let bytes = tokio::fs::read(&self.path).await.map_err(|err| {
            warn!(path = %self.path.display(), "failed to read job file: {err}");
            LoadError::unreachable(format!("{}: {err}", self.path.display()))
        })?;
        let records = parse_job_payload(&bytes)?;
        info!(path = %self.path.display(), jobs = records.len(), "read job file");
        Ok(records)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

pub struct HttpDataSource {
    client: Client,
    url: Url,
}

impl HttpDataSource {
    pub fn new(url: Url) -> Self {
        Self::with_client(Client::new(), url)
    }

    pub fn with_client(client: Client, url: Url) -> Self {
        Self { client, url }
    }
}

#[async_trait]
impl DataSource for HttpDataSource {
    async fn fetch(&self) -> Result<Vec<JobRecord>, LoadError> {
        let response = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .map_err(|err| {
                warn!(url = %self.url, "job request failed: {err}");
                LoadError::unreachable(err.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(url = %self.url, %status, "job request rejected");
            return Err(LoadError::unreachable(
                status
                    .canonical_reason()
                    .map(str::to_string)
                    .unwrap_or_else(|| status.to_string()),
            ));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|err| LoadError::unreachable(err.to_string()))?;
        let records = parse_job_payload(&bytes)?;
        info!(url = %self.url, jobs = records.len(), "fetched jobs");
        Ok(records)
    }

    fn describe(&self) -> String {
        self.url.to_string()
    }
}

/// `http(s)://` locations are fetched over HTTP, anything else is treated
/// as a filesystem path.
pub fn data_source_for(location: &str) -> Box<dyn DataSource> {
    match Url::parse(location) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Box::new(HttpDataSource::new(url)),
        _ => Box::new(FileDataSource::new(location)),
    }
}

#[cfg(test)]
#[path = "tests/source_tests.rs"]
mod tests;
