use crate::error::Result;
use crate::remote::JobService;
use crate::types::JobRecord;

pub const DEFAULT_LISTING_CAP: usize = 1000;

/// Lists an account's jobs for human browsing. Rendering is the caller's
/// problem; this only produces sorted records.
pub struct JobFinder<S> {
    service: S,
}

impl<S: JobService> JobFinder<S> {
    pub fn new(service: S) -> Self {
        Self { service }
    }

    /// Jobs visible to the caller, oldest first, capped at `limit`.
    pub async fn find(&self, limit: Option<usize>) -> Result<Vec<JobRecord>> {
        let mut jobs = self.service.list_jobs().await?;
        jobs.sort_by_key(|job| job.submitted);
        jobs.truncate(limit.unwrap_or(DEFAULT_LISTING_CAP));
        Ok(jobs)
    }
}
