use lazy_static::lazy_static;
use reqwest::Client;
use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::proxy::{proxy_url, search_url, ProxyConfig};
use crate::types::{Error, JobListing, Result};

/// Only the first cards of the result page are considered.
pub const MAX_RESULTS: usize = 5;
pub const NO_TITLE: &str = "No Title";
pub const UNKNOWN_COMPANY: &str = "Unknown Company";
pub const NO_LINK: &str = "#";

lazy_static! {
    static ref CARD_SELECTOR: Selector = Selector::parse("div.job_seen_beacon").unwrap();
    static ref TITLE_SELECTOR: Selector = Selector::parse("h2.jobTitle").unwrap();
    static ref COMPANY_SELECTOR: Selector = Selector::parse("span.companyName").unwrap();
    static ref LINK_SELECTOR: Selector = Selector::parse("a").unwrap();
}

fn element_text(card: ElementRef, selector: &Selector) -> Option<String> {
    card.select(selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_owned())
        .filter(|text| !text.is_empty())
}

fn absolute_link(site_url: &str, href: &str) -> String {
    match Url::parse(site_url).and_then(|base| base.join(href)) {
        Ok(url) => url.into(),
        Err(_) => format!("{}{}", site_url.trim_end_matches('/'), href),
    }
}

/// Returns `None` for a card whose link has no target.
fn parse_card(card: ElementRef, site_url: &str) -> Option<JobListing> {
    let title = element_text(card, &TITLE_SELECTOR).unwrap_or_else(|| NO_TITLE.to_owned());
    let company =
        element_text(card, &COMPANY_SELECTOR).unwrap_or_else(|| UNKNOWN_COMPANY.to_owned());
    let link = match card.select(&LINK_SELECTOR).next() {
        Some(anchor) => absolute_link(site_url, anchor.value().attr("href")?),
        None => NO_LINK.to_owned(),
    };
    Some(JobListing::new(title, company, link))
}

/// Extract job listings from a search result page.
/// Relative links are resolved against `site_url`.
pub fn parse_job_cards(html: &str, site_url: &str) -> Vec<JobListing> {
    let doc = Html::parse_document(html);
    doc.select(&CARD_SELECTOR)
        .take(MAX_RESULTS)
        .enumerate()
        .filter_map(|(position, card)| {
            let job = parse_card(card, site_url);
            if job.is_none() {
                log::warn!(
                    "Error parsing job card at position {}: link without href",
                    position
                );
            }
            job
        })
        .collect()
}

/// Fetch the search result page for `query` through the scraping proxy.
pub async fn try_scrape_jobs(
    client: &Client,
    config: &ProxyConfig,
    query: &str,
) -> Result<Vec<JobListing>> {
    let target = search_url(&config.site_url, query);
    let url = proxy_url(config, &target)?;
    log::info!("requesting jobs through proxy, search: {}", query);
    // reqwest errors carry the request url, which holds the api key
    let resp = client
        .get(url)
        .send()
        .await
        .map_err(|e| Error::Request(e.without_url()))?;
    let status = resp.status();
    log::debug!("response status to job search: {}", status);
    if !status.is_success() {
        let error_body = resp.text().await;
        log::error!(
            "failed to retrieve results for search: {}, status: {}, error resp body: {:?}",
            query,
            status,
            error_body,
        );
        return Err(Error::RequestNotOk(target));
    }
    let html = resp
        .text()
        .await
        .map_err(|e| Error::Request(e.without_url()))?;
    Ok(parse_job_cards(&html, &config.site_url))
}

/// Never fails: any error is logged and an empty list is returned.
pub async fn scrape_jobs(client: &Client, config: &ProxyConfig, query: &str) -> Vec<JobListing> {
    match try_scrape_jobs(client, config, query).await {
        Ok(jobs) => {
            if jobs.is_empty() {
                log::warn!("No jobs found. The structure of the page might have changed.");
            }
            jobs
        }
        Err(e) => {
            log::error!("Error scraping jobs: {}", e);
            Vec::new()
        }
    }
}
