use url::Url;

/// Appends `t=<unix_secs>` to the query of `url`, keeping any existing query.
pub fn cache_busting_url(url: &str, unix_secs: u64) -> Result<Url, url::ParseError> {
    let mut parsed = Url::parse(url)?;
    parsed
        .query_pairs_mut()
        .append_pair("t", &unix_secs.to_string());
    Ok(parsed)
}
