pub mod indeed;
pub mod proxy;
pub mod types;

pub use indeed::{parse_job_cards, scrape_jobs, try_scrape_jobs};
pub use proxy::ProxyConfig;
pub use types::{Error, JobListing, Result};
