use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Terminal error: '{0}'")]
    Io(#[from] std::io::Error),
    #[error("Scraper error: '{0}'")]
    Scraper(#[from] job_scraper::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
