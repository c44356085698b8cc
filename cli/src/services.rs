use career_advisor::{Advisor, AdvisorConfig};
use job_scraper::{scrape_jobs, JobListing, ProxyConfig};
use reqwest::Client;

/// The two backends the views talk to. Neither depends on the other.
pub struct Services {
    client: Client,
    proxy: Option<ProxyConfig>,
    advisor: Advisor,
}

impl Services {
    pub fn new(client: Client, proxy: Option<ProxyConfig>, advisor: Advisor) -> Self {
        Self {
            client,
            proxy,
            advisor,
        }
    }

    /// Reads both configurations from the environment and loads the model.
    /// Missing configuration is logged, the affected view then reports no results.
    pub async fn from_env(client: Client) -> Self {
        let proxy = match ProxyConfig::from_env() {
            Ok(config) => Some(config),
            Err(e) => {
                log::error!("Job search disabled: {}", e);
                None
            }
        };
        let advisor = load_advisor(client.clone()).await;
        Self::new(client, proxy, advisor)
    }

    pub async fn search_jobs(&self, query: &str) -> Vec<JobListing> {
        match &self.proxy {
            Some(config) => scrape_jobs(&self.client, config, query).await,
            None => {
                log::error!("Error scraping jobs: scraping proxy is not configured");
                Vec::new()
            }
        }
    }

    pub async fn get_advice(&self, question: &str) -> String {
        self.advisor.get_advice(question).await
    }
}

pub async fn load_advisor(client: Client) -> Advisor {
    match AdvisorConfig::from_env() {
        Ok(config) => Advisor::load(client, &config).await,
        Err(e) => {
            log::error!("Error reading advisor configuration: {}", e);
            Advisor::unavailable()
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[tokio::test]
    async fn test_unconfigured_services_degrade() {
        let services = Services::new(Client::new(), None, Advisor::unavailable());
        assert!(services.search_jobs("rust").await.is_empty());
        assert_eq!(
            services.get_advice("q").await,
            career_advisor::MODEL_UNAVAILABLE
        );
    }
}
