use std::collections::HashMap;

use mgnify_urlgen::config::Filters;

fn env(entries: &[(&str, &str)]) -> HashMap<String, String> {
    entries
        .iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect()
}

#[test]
fn builds_full_filter_set_in_order() {
    let vars = env(&[
        ("PAGE_SIZE", "50"),
        ("BIOME_NAME", "Ocean"),
        ("LINEAGE", "root:Environmental:Aquatic"),
        ("EXPERIMENT_TYPE", "assembly"),
        ("STUDY_ACCESSION", "SRP000001"),
        ("SAMPLE_ACCESSION", "SRS000002"),
        ("INSTRUMENT_PLATFORM", "ILLUMINA"),
        ("INSTRUMENT_MODEL", "HiSeq 2500"),
        ("PIPELINE_VERSION", "5.0"),
    ]);
    let filters = Filters::from_lookup(|name| vars.get(name).cloned());

    assert_eq!(
        filters.query_pairs(),
        vec![
            ("page_size", "50"),
            ("biome_name", "Ocean"),
            ("lineage", "root:Environmental:Aquatic"),
            ("experiment_type", "assembly"),
            ("study_accession", "SRP000001"),
            ("sample_accession", "SRS000002"),
            ("instrument_platform", "ILLUMINA"),
            ("instrument_model", "HiSeq 2500"),
            ("pipeline_version", "5.0"),
        ]
    );
}

#[test]
fn default_page_size_when_unset() {
    let filters = Filters::from_lookup(|_| None);
    assert_eq!(filters.page_size, "100");
    assert_eq!(filters.study_accession, None);
}

#[test]
fn empty_optional_variables_are_dropped() {
    let vars = env(&[("BIOME_NAME", ""), ("STUDY_ACCESSION", "SRP000001")]);
    let filters = Filters::from_lookup(|name| vars.get(name).cloned());

    assert_eq!(filters.biome_name, None);
    assert_eq!(filters.study_accession.as_deref(), Some("SRP000001"));
    assert_eq!(
        filters.query_pairs(),
        vec![("page_size", "100"), ("study_accession", "SRP000001")]
    );
}
