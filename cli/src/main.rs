mod arg_parser;
mod client_cli;

use arg_parser::{ArgParser, SubCommand};
use client_cli::ClientCli;

use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let args = ArgParser::parse();
    let client = ClientCli::connect(&args.server, &args.token)?;

    match args.sub_command {
        SubCommand::Fetch {
            job_ids,
            output_dir,
            circuit_dir,
        } => {
            client
                .fetch_results(&job_ids, output_dir, circuit_dir)
                .await?;
        }
        SubCommand::List { limit } => {
            client.list_jobs(limit).await?;
        }
    }

    Ok(())
}
