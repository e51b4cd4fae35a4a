use crate::error::{Error, Result};
use crate::remote::JobService;
use crate::rewrite::PathRewriter;
use crate::types::{FileName, JobId};

use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const DEFAULT_WD_BASE: &str = "/home/simulation-results";
pub const DEFAULT_CIRCUIT_DIR: &str = "/home/data-bbp/20191017/";

/// Where the cluster stages circuit data and job working directories.
pub const ORIGIN_CIRCUIT_PATH: &str = "/store/hbp/ich002/antonel/O1/20191017/";
pub const ORIGIN_DIR_PATH: &str = "/scratch/snx3000/unicore/FILESPACE/";

const CONFIG_FILE: &str = "BlueConfig";
const LOG_FILE: &str = "out.dat";
const REPORT_PATTERN: &str = ".bbp";

/// Local artifacts of one fetched job.
#[derive(Clone, Debug)]
pub struct FetchedResults {
    pub job_id: JobId,
    pub local_dir: PathBuf,
    pub blueconfig: PathBuf,
}

/// Retrieves a job's result artifacts into a local directory tree.
///
/// For each job: the config file (rewritten so its cluster paths point at
/// local copies), every report file, and the log file. Files already on
/// disk are never transferred again.
pub struct ResultsFetcher<S> {
    service: S,
    wd_base: PathBuf,
    circuit_dir: PathBuf,
}

impl<S: JobService> ResultsFetcher<S> {
    pub fn new(
        service: S,
        wd_base: Option<PathBuf>,
        circuit_dir: Option<PathBuf>,
    ) -> Result<Self> {
        let wd_base = wd_base.unwrap_or_else(|| PathBuf::from(DEFAULT_WD_BASE));
        let circuit_dir = circuit_dir.unwrap_or_else(|| PathBuf::from(DEFAULT_CIRCUIT_DIR));
        if !circuit_dir.is_dir() {
            return Err(Error::CircuitDirMissing(circuit_dir));
        }
        Ok(Self {
            service,
            wd_base,
            circuit_dir,
        })
    }

    /// Fetch the artifacts of a single job.
    pub async fn fetch(&self, job_id: JobId) -> Result<FetchedResults> {
        let local_dir = self.wd_base.join(job_id.to_string());
        tokio::fs::create_dir_all(&local_dir).await?;

        let info = self.service.job_info(job_id).await?;
        info!("fetching results of [{}]", info.name);
        let files = self.service.list_files(job_id).await?;

        let rewriter = PathRewriter::new()
            .rule(ORIGIN_CIRCUIT_PATH, with_trailing_slash(&self.circuit_dir))
            .rule(
                format!("{}{}", ORIGIN_DIR_PATH, job_id),
                local_dir.to_string_lossy(),
            );

        self.download(job_id, &files, &local_dir, CONFIG_FILE, Some(&rewriter))
            .await?;
        self.download_reports(job_id, &files, &local_dir).await?;
        self.download(job_id, &files, &local_dir, LOG_FILE, None)
            .await?;
        info!("results were saved at: {}", local_dir.display());

        Ok(FetchedResults {
            job_id,
            blueconfig: local_dir.join(CONFIG_FILE),
            local_dir,
        })
    }

    /// Fetch several jobs, one after another.
    pub async fn fetch_many(&self, job_ids: &[JobId]) -> Result<Vec<FetchedResults>> {
        let total = job_ids.len();
        let mut all = Vec::with_capacity(total);
        for (idx, job_id) in job_ids.iter().enumerate() {
            info!("({}/{})", idx + 1, total);
            all.push(self.fetch(*job_id).await?);
        }
        Ok(all)
    }

    async fn download_reports(
        &self,
        job_id: JobId,
        files: &[FileName],
        local_dir: &Path,
    ) -> Result<()> {
        let reports: Vec<FileName> = files
            .iter()
            .filter(|name| name.contains(REPORT_PATTERN))
            .cloned()
            .collect();
        if reports.is_empty() {
            info!("no reports were found");
            return Ok(());
        }
        for report in &reports {
            self.download(job_id, files, local_dir, report, None).await?;
        }
        Ok(())
    }

    async fn download(
        &self,
        job_id: JobId,
        files: &[FileName],
        local_dir: &Path,
        name: &str,
        rewriter: Option<&PathRewriter>,
    ) -> Result<()> {
        let dest = local_dir.join(name);
        if dest.exists() {
            info!("[{}] already exists, skipping download", name);
            return Ok(());
        }
        if !files.iter().any(|file| file == name) {
            return Err(Error::FileNotFound(name.to_string()));
        }

        debug!("fetching [{}]", name);
        let blob = self.service.read_file(job_id, name).await?;
        match rewriter {
            Some(rewriter) => {
                let text = std::str::from_utf8(&blob)
                    .map_err(|_| Error::Malformed(format!("[{}] is not valid utf-8", name)))?;
                tokio::fs::write(&dest, rewriter.rewrite(text)).await?;
            }
            None => tokio::fs::write(&dest, &blob).await?,
        }
        info!("[{}] downloaded", name);
        Ok(())
    }
}

// config rules replace a slash-terminated origin prefix, so the local side
// has to be slash-terminated too
fn with_trailing_slash(path: &Path) -> String {
    let mut s = path.to_string_lossy().into_owned();
    if !s.ends_with('/') {
        s.push('/');
    }
    s
}
