use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use http::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::{debug, error, info};

use crate::{
    config::ApiConfig,
    contact::{ContactForm, ContactReply, ContactResponseBody},
    portfolio::{PortfolioData, PortfolioEnvelope},
};

const PORTFOLIO_PATH: &str = "portfolio";
const CONTACT_PATH: &str = "contact";

/// Successful `/portfolio` payloads, keyed by endpoint URL.
pub static GLOBAL_PORTFOLIO_CACHE: LazyLock<DashMap<String, CachedPortfolio>> =
    LazyLock::new(DashMap::new);

#[derive(Debug, Clone)]
pub struct CachedPortfolio {
    pub fetched_at: DateTime<Utc>,
    pub data: PortfolioData,
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} answered {status}")]
    Status { url: String, status: StatusCode },
    #[error("couldn't decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

#[derive(Debug, Clone)]
pub struct PortfolioClient {
    http: Client,
    config: ApiConfig,
}

impl PortfolioClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    fn cached(&self, url: &str) -> Option<PortfolioData> {
        let entry = GLOBAL_PORTFOLIO_CACHE.get(url)?;
        let age = Utc::now().signed_duration_since(entry.fetched_at);
        let fresh = age
            .to_std()
            .map(|age| age < self.config.revalidate)
            .unwrap_or(false);
        if fresh {
            debug!(url = %url, age_secs = age.num_seconds(), "portfolio cache hit");
            Some(entry.data.clone())
        } else {
            debug!(url = %url, age_secs = age.num_seconds(), "portfolio cache entry expired");
            None
        }
    }

    /// Fetches the portfolio, reusing a payload younger than the revalidation window.
    pub async fn fetch_portfolio(&self) -> Result<PortfolioData, ApiError> {
        let url = self.config.endpoint(PORTFOLIO_PATH);
        if let Some(data) = self.cached(&url) {
            return Ok(data);
        }

        let resp = self
            .http
            .get(&url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|source| ApiError::Transport {
                url: url.clone(),
                source,
            })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::Status { url, status });
        }

        let envelope: PortfolioEnvelope = resp.json().await.map_err(|source| ApiError::Decode {
            url: url.clone(),
            source,
        })?;

        info!(
            url = %url,
            projects = envelope.data.projects.len(),
            skill_categories = envelope.data.skills.iter().count(),
            "fetched portfolio"
        );
        GLOBAL_PORTFOLIO_CACHE.insert(
            url,
            CachedPortfolio {
                fetched_at: Utc::now(),
                data: envelope.data.clone(),
            },
        );
        Ok(envelope.data)
    }

    /// Page-load variant: any failure is logged and becomes `None`.
    pub async fn load_portfolio(&self) -> Option<PortfolioData> {
        match self.fetch_portfolio().await {
            Ok(data) => Some(data),
            Err(e) => {
                error!(error = %e, "Error fetching portfolio");
                None
            }
        }
    }

    pub async fn submit_contact(&self, form: &ContactForm) -> Result<ContactReply, ApiError> {
        let url = self.config.endpoint(CONTACT_PATH);
        let resp = self
            .http
            .post(&url)
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .json(form)
            .send()
            .await
            .map_err(|source| ApiError::Transport {
                url: url.clone(),
                source,
            })?;

        let status = resp.status();
        // the body is JSON on both outcomes; anything else counts as a failed request
        let body: ContactResponseBody = resp.json().await.map_err(|source| ApiError::Decode {
            url: url.clone(),
            source,
        })?;

        info!(url = %url, status = status.as_u16(), "contact submitted");
        Ok(ContactReply::from_body(status.is_success(), body))
    }
}
