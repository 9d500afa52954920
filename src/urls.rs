/// Query URLs are assembled by verbatim `key=value` joining, without
/// percent-encoding. Downstream consumers of `page_urls.txt` expect the
/// unencoded form, so values are written exactly as configured.
pub fn page_url(base: &str, pairs: &[(&'static str, &str)], page: u64) -> String {
    let mut query: Vec<String> = pairs
        .iter()
        .map(|(name, value)| format!("{name}={value}"))
        .collect();
    query.push(format!("page={page}"));
    format!("{base}/analyses?{}", query.join("&"))
}

pub fn analysis_url(base: &str, accession: &str) -> String {
    format!("{base}/analyses/{accession}")
}
