pub mod error;
mod jobs;
pub mod remote;
mod results;
mod rewrite;
pub mod types;

#[cfg(test)]
mod testutil;

pub use jobs::{JobFinder, DEFAULT_LISTING_CAP};
pub use remote::rest::{RestClient, DEFAULT_ENDPOINT};
pub use remote::JobService;
pub use results::{
    FetchedResults, ResultsFetcher, DEFAULT_CIRCUIT_DIR, DEFAULT_WD_BASE, ORIGIN_CIRCUIT_PATH,
    ORIGIN_DIR_PATH,
};
pub use rewrite::PathRewriter;
