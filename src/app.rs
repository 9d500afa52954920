use std::io::Write;

use tracing::{debug, warn};

use crate::config::Filters;
use crate::domain::{Analysis, PageEnvelope, is_included_experiment};
use crate::error::UrlGenError;
use crate::mgnify::MgnifyClient;
use crate::urls;

const LOG_SNIPPET_CHARS: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    GlobalPages,
    StudyExpansion,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerateResult {
    pub mode: Mode,
    pub pages: u64,
    pub urls: u64,
}

pub struct App<C: MgnifyClient> {
    client: C,
    filters: Filters,
}

impl<C: MgnifyClient> App<C> {
    pub fn new(client: C, filters: Filters) -> Self {
        Self { client, filters }
    }

    pub fn into_client(self) -> C {
        self.client
    }

    pub fn generate<W: Write>(&self, out: &mut W) -> Result<GenerateResult, UrlGenError> {
        match &self.filters.study_accession {
            Some(study) => self.expand_study(study, out),
            None => self.global_pages(out),
        }
    }

    /// One search request to discover the page count, then one query URL
    /// per page. Any HTTP failure here is fatal.
    fn global_pages<W: Write>(&self, out: &mut W) -> Result<GenerateResult, UrlGenError> {
        let pairs = self.filters.query_pairs();
        let envelope = self.client.search_analyses(&pairs)?;
        let total_pages = envelope.total_pages();
        for page in 1..=total_pages {
            let url = urls::page_url(self.client.base_url(), &pairs, page);
            writeln!(out, "{url}").map_err(|err| UrlGenError::Filesystem(err.to_string()))?;
        }
        Ok(GenerateResult {
            mode: Mode::GlobalPages,
            pages: total_pages,
            urls: total_pages,
        })
    }

    /// Walk the study's analyses page by page, emitting one resource URL per
    /// assembly or metagenomic analysis. A body that fails to parse as JSON
    /// or an empty page stops the walk and keeps whatever was written so far.
    fn expand_study<W: Write>(
        &self,
        study: &str,
        out: &mut W,
    ) -> Result<GenerateResult, UrlGenError> {
        let pairs = self.filters.query_pairs();
        let mut page = 1u64;
        let mut pages_visited = 0u64;
        let mut urls_written = 0u64;
        loop {
            debug!(study, page, "fetching study analyses page");
            let body = self.client.study_analyses_page(study, &pairs, page)?;
            let envelope: PageEnvelope = match serde_json::from_str(&body) {
                Ok(envelope) => envelope,
                Err(err) => {
                    warn!(
                        error = %err,
                        body = snippet(&body),
                        "page body is not valid JSON, stopping"
                    );
                    break;
                }
            };
            pages_visited += 1;
            let total_pages = envelope.total_pages();
            let resources = envelope.into_resources();
            if resources.is_empty() {
                debug!(page, "no analyses on page, stopping");
                break;
            }
            for raw in &resources {
                let analysis = Analysis::new(raw);
                let Some(accession) = analysis.accession() else {
                    warn!(
                        resource = snippet(&raw.to_string()),
                        "analysis without accession, skipping"
                    );
                    continue;
                };
                match analysis.experiment_type() {
                    Some(experiment_type) if is_included_experiment(experiment_type) => {
                        let url = urls::analysis_url(self.client.base_url(), accession);
                        writeln!(out, "{url}")
                            .map_err(|err| UrlGenError::Filesystem(err.to_string()))?;
                        urls_written += 1;
                    }
                    experiment_type => {
                        debug!(
                            accession,
                            experiment_type = experiment_type.unwrap_or("unknown"),
                            "skipping analysis"
                        );
                    }
                }
            }
            if page >= total_pages {
                break;
            }
            page += 1;
        }
        Ok(GenerateResult {
            mode: Mode::StudyExpansion,
            pages: pages_visited,
            urls: urls_written,
        })
    }
}

fn snippet(text: &str) -> &str {
    match text.char_indices().nth(LOG_SNIPPET_CHARS) {
        Some((index, _)) => &text[..index],
        None => text,
    }
}
