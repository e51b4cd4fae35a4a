use clap::{Parser, Subcommand};
use std::path::PathBuf;
use uuid::Uuid;

/// Retrieve simulation results from a remote job service
#[derive(Debug, Parser)]
pub struct ArgParser {
    /// Base url of the job service REST endpoint
    #[clap(short = 's', long = "server", default_value = simlib::DEFAULT_ENDPOINT)]
    pub server: String,

    /// Bearer token for the job service
    #[clap(long, env = "UNICORE_TOKEN", hide_env_values = true)]
    pub token: String,

    /// The sub-command to use
    #[clap(subcommand)]
    pub sub_command: SubCommand,
}

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Subcommand)]
pub enum SubCommand {
    /// fetch the result artifacts of one or more jobs
    Fetch {
        /// Uuid v4 strings of the jobs to fetch
        #[clap(required = true, multiple_values = true)]
        job_ids: Vec<Uuid>,

        #[clap(long)]
        /// base directory results are written under
        output_dir: Option<PathBuf>,

        #[clap(long)]
        /// local copy of the circuit the configs reference
        circuit_dir: Option<PathBuf>,
    },
    /// list jobs sorted by submission time
    List {
        /// maximum number of jobs to show
        #[clap(long)]
        limit: Option<usize>,
    },
}
