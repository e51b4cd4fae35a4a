use super::JobService;
use crate::error::{Error, Result};
use crate::types::{FileBlob, FileName, JobId, JobInfo, JobRecord};

use async_trait::async_trait;
use chrono::DateTime;
use reqwest::{header, Client, StatusCode};
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::Mutex;
use tracing::debug;
use uuid::Uuid;

/// Endpoint the production deployment talks to.
pub const DEFAULT_ENDPOINT: &str = "https://bspsa.cineca.it/advanced/pizdaint/rest/core";

// e.g. "2019-10-17T14:32:06+0200"
const SUBMISSION_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%z";

#[derive(Debug, Deserialize)]
struct JobsListing {
    jobs: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct Href {
    href: String,
}

#[derive(Debug, Deserialize)]
struct JobProperties {
    name: String,
    #[serde(rename = "submissionTime")]
    submission_time: String,
    #[serde(rename = "_links")]
    links: HashMap<String, Href>,
}

#[derive(Debug, Deserialize)]
struct DirListing {
    children: Vec<String>,
}

/// Client for a UNICORE-style job-management REST endpoint.
///
/// A job's outputs are staged in a working directory on a storage service;
/// the job's properties carry a link to it, and the storage exposes
/// `files` (listing) and `files/{name}` (content) resources.
pub struct RestClient {
    http: Client,
    endpoint: String,
    // a job's working directory is stable, resolve it once per job
    storage_urls: Mutex<HashMap<JobId, String>>,
}

impl RestClient {
    pub fn new(endpoint: &str, token: &str) -> Result<Self> {
        let mut auth = header::HeaderValue::from_str(&format!("Bearer {}", token))
            .map_err(|_| Error::Malformed("token is not a valid header value".to_string()))?;
        auth.set_sensitive(true);
        let mut headers = header::HeaderMap::new();
        headers.insert(header::AUTHORIZATION, auth);
        let http = Client::builder().default_headers(headers).build()?;
        Ok(Self {
            http,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            storage_urls: Mutex::new(HashMap::new()),
        })
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T> {
        debug!(url = %url, "GET");
        let response = self
            .http
            .get(url)
            .header(header::ACCEPT, "application/json")
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(Error::Service {
                status: response.status(),
                url: url.to_string(),
            });
        }
        Ok(response.json().await?)
    }

    async fn properties(&self, job_id: JobId) -> Result<JobProperties> {
        let url = format!("{}/jobs/{}", self.endpoint, job_id);
        match self.get_json(&url).await {
            Err(Error::Service { status, .. }) if status == StatusCode::NOT_FOUND => {
                Err(Error::JobNotFound(job_id))
            }
            other => other,
        }
    }

    async fn working_dir(&self, job_id: JobId) -> Result<String> {
        if let Some(url) = self.storage_urls.lock().unwrap().get(&job_id) {
            return Ok(url.clone());
        }
        let props = self.properties(job_id).await?;
        let url = props
            .links
            .get("workingDirectory")
            .map(|link| link.href.trim_end_matches('/').to_string())
            .ok_or_else(|| {
                Error::Malformed(format!("job {} has no workingDirectory link", job_id))
            })?;
        self.storage_urls
            .lock()
            .unwrap()
            .insert(job_id, url.clone());
        Ok(url)
    }
}

#[async_trait]
impl JobService for RestClient {
    async fn job_info(&self, job_id: JobId) -> Result<JobInfo> {
        let props = self.properties(job_id).await?;
        Ok(JobInfo { name: props.name })
    }

    async fn list_files(&self, job_id: JobId) -> Result<Vec<FileName>> {
        let storage = self.working_dir(job_id).await?;
        let listing: DirListing = self.get_json(&format!("{}/files", storage)).await?;
        Ok(listing
            .children
            .into_iter()
            .map(|child| child.trim_start_matches('/').to_string())
            .collect())
    }

    async fn read_file(&self, job_id: JobId, name: &str) -> Result<FileBlob> {
        let storage = self.working_dir(job_id).await?;
        let url = format!("{}/files/{}", storage, name);
        debug!(url = %url, "GET");
        let response = self
            .http
            .get(&url)
            .header(header::ACCEPT, "application/octet-stream")
            .send()
            .await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(Error::FileNotFound(name.to_string()));
        }
        if !response.status().is_success() {
            return Err(Error::Service {
                status: response.status(),
                url,
            });
        }
        Ok(response.bytes().await?)
    }

    async fn list_jobs(&self) -> Result<Vec<JobRecord>> {
        let listing: JobsListing = self.get_json(&format!("{}/jobs", self.endpoint)).await?;
        let mut records = Vec::with_capacity(listing.jobs.len());
        for url in &listing.jobs {
            let id = job_id_from_url(url)?;
            let props = self.properties(id).await?;
            let submitted =
                DateTime::parse_from_str(&props.submission_time, SUBMISSION_TIME_FORMAT).map_err(
                    |err| Error::Malformed(format!("bad submissionTime for job {}: {}", id, err)),
                )?;
            records.push(JobRecord {
                id,
                name: props.name,
                submitted,
            });
        }
        Ok(records)
    }
}

fn job_id_from_url(url: &str) -> Result<JobId> {
    let tail = url.trim_end_matches('/').rsplit('/').next().unwrap_or("");
    Uuid::parse_str(tail).map_err(|_| Error::Malformed(format!("job url without a job id: {}", url)))
}
