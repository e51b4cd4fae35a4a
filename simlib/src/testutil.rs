use crate::error::{Error, Result};
use crate::remote::JobService;
use crate::types::{FileBlob, FileName, JobId, JobInfo, JobRecord};

use async_trait::async_trait;
use std::collections::BTreeMap;

/// In-memory stand-in for the remote job service.
pub struct FakeService {
    pub job_name: String,
    pub files: BTreeMap<FileName, FileBlob>,
    pub jobs: Vec<JobRecord>,
    pub fail_reads: bool,
}

impl FakeService {
    pub fn with_files(files: &[(&str, &[u8])]) -> Self {
        Self {
            job_name: "sim".to_string(),
            files: files
                .iter()
                .map(|(name, body)| ((*name).to_string(), FileBlob::copy_from_slice(body)))
                .collect(),
            jobs: Vec::new(),
            fail_reads: false,
        }
    }

    pub fn with_jobs(jobs: Vec<JobRecord>) -> Self {
        Self {
            job_name: "sim".to_string(),
            files: BTreeMap::new(),
            jobs,
            fail_reads: false,
        }
    }
}

#[async_trait]
impl JobService for FakeService {
    async fn job_info(&self, _job_id: JobId) -> Result<JobInfo> {
        Ok(JobInfo {
            name: self.job_name.clone(),
        })
    }

    async fn list_files(&self, _job_id: JobId) -> Result<Vec<FileName>> {
        Ok(self.files.keys().cloned().collect())
    }

    async fn read_file(&self, _job_id: JobId, name: &str) -> Result<FileBlob> {
        if self.fail_reads {
            return Err(Error::Malformed(format!("unexpected read of [{}]", name)));
        }
        self.files
            .get(name)
            .cloned()
            .ok_or_else(|| Error::FileNotFound(name.to_string()))
    }

    async fn list_jobs(&self) -> Result<Vec<JobRecord>> {
        Ok(self.jobs.clone())
    }
}
