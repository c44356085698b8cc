use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Request error: '{0}'")]
    Request(#[from] reqwest::Error),
    #[error("Failed to scrape data from: '{0}'")]
    RequestNotOk(String),
    #[error("Invalid url: '{0}'")]
    InvalidUrl(#[from] url::ParseError),
    #[error("Environment variable not set: '{0}'")]
    MissingEnv(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;

/// A single search hit as shown in the job list.
/// Missing fields are filled with placeholder text, never left empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobListing {
    pub title: String,
    pub company: String,
    pub link: String,
}

impl JobListing {
    pub fn new(title: String, company: String, link: String) -> Self {
        Self {
            title,
            company,
            link,
        }
    }
}
