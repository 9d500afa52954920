use serde::Deserialize;
use serde_json::Value;

/// Top-level shape of an MGnify collection page. Only the fields the
/// generator reads are modeled; everything else stays in the raw values.
#[derive(Debug, Deserialize)]
pub struct PageEnvelope {
    #[serde(default)]
    pub data: Option<DataField>,
    #[serde(default)]
    pub meta: Option<Meta>,
}

/// The API returns `data` either as an array of resources or as a single
/// resource object. Resolved into a uniform sequence right after parsing.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum DataField {
    Many(Vec<Value>),
    One(Value),
}

#[derive(Debug, Deserialize)]
pub struct Meta {
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

#[derive(Debug, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub pages: Option<u64>,
}

impl PageEnvelope {
    pub fn total_pages(&self) -> u64 {
        self.meta
            .as_ref()
            .and_then(|meta| meta.pagination.as_ref())
            .and_then(|pagination| pagination.pages)
            .unwrap_or(1)
    }

    pub fn into_resources(self) -> Vec<Value> {
        match self.data {
            Some(DataField::Many(items)) => items,
            Some(DataField::One(item)) => vec![item],
            None => Vec::new(),
        }
    }
}

/// Read-only view over a raw analysis resource.
pub struct Analysis<'a>(&'a Value);

impl<'a> Analysis<'a> {
    pub fn new(raw: &'a Value) -> Self {
        Self(raw)
    }

    pub fn accession(&self) -> Option<&'a str> {
        self.0
            .get("attributes")
            .and_then(|v| v.get("accession"))
            .and_then(|v| v.as_str())
    }

    pub fn experiment_type(&self) -> Option<&'a str> {
        self.0
            .get("attributes")
            .and_then(|v| v.get("experiment-type"))
            .and_then(|v| v.as_str())
    }
}

pub fn is_included_experiment(experiment_type: &str) -> bool {
    matches!(experiment_type, "assembly" | "metagenomic")
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn parse_envelope_with_array_data() {
        let envelope: PageEnvelope = serde_json::from_value(json!({
            "data": [{"attributes": {"accession": "MGYA001"}}],
            "meta": {"pagination": {"pages": 7}}
        }))
        .unwrap();
        assert_eq!(envelope.total_pages(), 7);
        assert_eq!(envelope.into_resources().len(), 1);
    }

    #[test]
    fn single_object_data_becomes_one_element() {
        let envelope: PageEnvelope = serde_json::from_value(json!({
            "data": {"attributes": {"accession": "MGYA001"}}
        }))
        .unwrap();
        let resources = envelope.into_resources();
        assert_eq!(resources.len(), 1);
        assert_eq!(
            Analysis::new(&resources[0]).accession(),
            Some("MGYA001")
        );
    }

    #[test]
    fn total_pages_defaults_to_one() {
        let envelope: PageEnvelope = serde_json::from_value(json!({"data": []})).unwrap();
        assert_eq!(envelope.total_pages(), 1);
    }

    #[test]
    fn included_experiment_types() {
        assert!(is_included_experiment("assembly"));
        assert!(is_included_experiment("metagenomic"));
        assert!(!is_included_experiment("amplicon"));
        assert!(!is_included_experiment(""));
    }
}
