use chrono::{DateTime, FixedOffset};
use uuid::Uuid;

pub type JobId = Uuid;
pub type FileName = String;
pub type FileBlob = bytes::Bytes;

/// Display metadata for a single job.
#[derive(Clone, Debug)]
pub struct JobInfo {
    pub name: String,
}

/// One entry of the account's job listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JobRecord {
    pub id: JobId,
    pub name: String,
    pub submitted: DateTime<FixedOffset>,
}
