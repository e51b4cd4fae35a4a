use std::path::PathBuf;
use std::result;
use thiserror::Error;

use crate::types::JobId;

#[derive(Error, Debug)]
pub enum Error {
    #[error("no such job: {0}")]
    JobNotFound(JobId),
    #[error("remote file not found: [{0}]")]
    FileNotFound(String),
    #[error("circuit path does not exist: {0}")]
    CircuitDirMissing(PathBuf),
    #[error("job service returned {status} for {url}")]
    Service {
        status: reqwest::StatusCode,
        url: String,
    },
    #[error("malformed response from job service: {0}")]
    Malformed(String),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = result::Result<T, Error>;
