use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};

use crate::domain::PageEnvelope;
use crate::error::UrlGenError;

pub const DEFAULT_BASE_URL: &str = "https://www.ebi.ac.uk/metagenomics/api/v1";

pub trait MgnifyClient: Send + Sync {
    fn base_url(&self) -> &str;

    /// GET `{base}/analyses` with the filter parameters. A non-2xx status
    /// is an error here; global paged-URL mode treats it as fatal.
    fn search_analyses(
        &self,
        pairs: &[(&'static str, &str)],
    ) -> Result<PageEnvelope, UrlGenError>;

    /// GET one page of `{base}/studies/{study}/analyses`, carrying the same
    /// filter parameters. Returns the raw body text so the caller decides
    /// how to handle a body that does not parse as JSON.
    fn study_analyses_page(
        &self,
        study: &str,
        pairs: &[(&'static str, &str)],
        page: u64,
    ) -> Result<String, UrlGenError>;
}

#[derive(Clone)]
pub struct MgnifyHttpClient {
    client: Client,
    base_url: String,
}

impl MgnifyHttpClient {
    pub fn new() -> Result<Self, UrlGenError> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, UrlGenError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&format!("mgnify-urlgen/{}", env!("CARGO_PKG_VERSION")))
                .map_err(|err| UrlGenError::Http(err.to_string()))?,
        );
        // No request timeout: a slow page fetch waits as long as it takes.
        let client = Client::builder()
            .default_headers(headers)
            .timeout(None)
            .build()
            .map_err(|err| UrlGenError::Http(err.to_string()))?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }
}

impl MgnifyClient for MgnifyHttpClient {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn search_analyses(
        &self,
        pairs: &[(&'static str, &str)],
    ) -> Result<PageEnvelope, UrlGenError> {
        let url = format!("{}/analyses", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(pairs)
            .send()
            .map_err(|err| UrlGenError::Http(err.to_string()))?;
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response
                .text()
                .unwrap_or_else(|_| "MGnify request failed".to_string());
            return Err(UrlGenError::Status { status, message });
        }
        response
            .json()
            .map_err(|err| UrlGenError::Http(err.to_string()))
    }

    fn study_analyses_page(
        &self,
        study: &str,
        pairs: &[(&'static str, &str)],
        page: u64,
    ) -> Result<String, UrlGenError> {
        let url = format!("{}/studies/{}/analyses", self.base_url, study);
        let response = self
            .client
            .get(&url)
            .query(pairs)
            .query(&[("page", page)])
            .send()
            .map_err(|err| UrlGenError::Http(err.to_string()))?;
        response
            .text()
            .map_err(|err| UrlGenError::Http(err.to_string()))
    }
}
