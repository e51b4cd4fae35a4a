use simlib::{JobFinder, RestClient, ResultsFetcher};
use std::path::PathBuf;
use uuid::Uuid;

pub struct ClientCli {
    client: RestClient,
}

impl ClientCli {
    pub fn connect(server: &str, token: &str) -> anyhow::Result<Self> {
        let client = RestClient::new(server, token)?;
        Ok(Self { client })
    }

    pub async fn fetch_results(
        self,
        job_ids: &[Uuid],
        output_dir: Option<PathBuf>,
        circuit_dir: Option<PathBuf>,
    ) -> anyhow::Result<()> {
        let fetcher = ResultsFetcher::new(self.client, output_dir, circuit_dir)?;
        for results in fetcher.fetch_many(job_ids).await? {
            println!("Results were saved at: {}", results.local_dir.display());
        }
        Ok(())
    }

    pub async fn list_jobs(self, limit: Option<usize>) -> anyhow::Result<()> {
        let finder = JobFinder::new(self.client);
        for job in finder.find(limit).await? {
            println!(
                "{}  {}  {}",
                job.submitted.format("%d-%m-%Y %H:%M"),
                job.id,
                job.name
            );
        }
        Ok(())
    }
}
