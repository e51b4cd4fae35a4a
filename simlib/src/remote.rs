pub mod rest;

use crate::error::Result;
use crate::types::{FileBlob, FileName, JobId, JobInfo, JobRecord};

use async_trait::async_trait;

/// Narrow contract onto the remote job-management service: name a job, list
/// its staged output files, read one of them, enumerate jobs.
#[async_trait]
pub trait JobService {
    async fn job_info(&self, job_id: JobId) -> Result<JobInfo>;
    async fn list_files(&self, job_id: JobId) -> Result<Vec<FileName>>;
    async fn read_file(&self, job_id: JobId, name: &str) -> Result<FileBlob>;
    async fn list_jobs(&self) -> Result<Vec<JobRecord>>;
}
