#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filters {
    pub page_size: String,
    pub biome_name: Option<String>,
    pub lineage: Option<String>,
    pub experiment_type: Option<String>,
    pub study_accession: Option<String>,
    pub sample_accession: Option<String>,
    pub instrument_platform: Option<String>,
    pub instrument_model: Option<String>,
    pub pipeline_version: Option<String>,
}

impl Filters {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let optional = |name: &str| lookup(name).filter(|value| !value.is_empty());
        Self {
            page_size: lookup("PAGE_SIZE").unwrap_or_else(|| "100".to_string()),
            biome_name: optional("BIOME_NAME"),
            lineage: optional("LINEAGE"),
            experiment_type: optional("EXPERIMENT_TYPE"),
            study_accession: optional("STUDY_ACCESSION"),
            sample_accession: optional("SAMPLE_ACCESSION"),
            instrument_platform: optional("INSTRUMENT_PLATFORM"),
            instrument_model: optional("INSTRUMENT_MODEL"),
            pipeline_version: optional("PIPELINE_VERSION"),
        }
    }

    /// Filter parameters in the order they are sent to the API and written
    /// into generated query URLs. `page` is always appended after these.
    pub fn query_pairs(&self) -> Vec<(&'static str, &str)> {
        let mut pairs = vec![("page_size", self.page_size.as_str())];
        let optional: [(&'static str, &Option<String>); 8] = [
            ("biome_name", &self.biome_name),
            ("lineage", &self.lineage),
            ("experiment_type", &self.experiment_type),
            ("study_accession", &self.study_accession),
            ("sample_accession", &self.sample_accession),
            ("instrument_platform", &self.instrument_platform),
            ("instrument_model", &self.instrument_model),
            ("pipeline_version", &self.pipeline_version),
        ];
        for (name, value) in optional {
            if let Some(value) = value {
                pairs.push((name, value.as_str()));
            }
        }
        pairs
    }
}
