use url::Url;

use crate::types::{Error, Result};

pub const DEFAULT_API_URL: &str = "https://api.scraperapi.com";
pub const DEFAULT_SITE_URL: &str = "https://www.indeed.com";

/// Where to send the search request and which job board the proxy should fetch.
#[derive(Debug, Clone)]
pub struct ProxyConfig {
    pub api_url: String,
    pub api_key: String,
    pub site_url: String,
}

impl ProxyConfig {
    pub fn new(api_key: String) -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_owned(),
            api_key,
            site_url: DEFAULT_SITE_URL.to_owned(),
        }
    }

    /// Reads `SCRAPER_API_KEY`, `SCRAPER_API_URL` and `JOB_SITE_URL`.
    /// Only the key is mandatory.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("SCRAPER_API_KEY")
            .map_err(|_| Error::MissingEnv("SCRAPER_API_KEY"))?;
        let mut config = Self::new(api_key);
        if let Ok(api_url) = std::env::var("SCRAPER_API_URL") {
            config.api_url = api_url;
        }
        if let Ok(site_url) = std::env::var("JOB_SITE_URL") {
            config.site_url = site_url;
        }
        Ok(config)
    }
}

pub(crate) fn search_url(site_url: &str, query: &str) -> String {
    let keywords = query
        .split_whitespace()
        .map(urlencoding::encode)
        .collect::<Vec<_>>()
        .join("+");
    format!("{}/jobs?q={}&l=", site_url.trim_end_matches('/'), keywords)
}

/// The target url travels as a single, encoded query parameter of the proxy request.
pub(crate) fn proxy_url(config: &ProxyConfig, target: &str) -> Result<Url> {
    let url = Url::parse_with_params(
        &config.api_url,
        &[("api_key", config.api_key.as_str()), ("url", target)],
    )?;
    Ok(url)
}
