use super::*;

/// Fetches one page of stories created inside `window` with more than the
/// configured number of points.
pub(crate) async fn search<T: Transport>(
  transport: &T,
  config: &Config,
  window: Window,
) -> Result<Vec<SearchHit>> {
  let url = url(config, window)?;

  info!(%url, "fetching search results");

  let reply = transport
    .get(url.as_str())
    .await
    .context("search request failed")?;

  if reply.is_server_error() {
    bail!("search request returned status {}", reply.status);
  }

  let response = serde_json::from_str::<SearchResponse>(&reply.body)
    .with_context(|| {
      format!("search response with status {} is malformed", reply.status)
    })?;

  ensure!(!response.hits.is_empty(), "no results found");

  info!(
    hits = response.hits.len(),
    total = response.nb_hits,
    page = response.page,
    pages = response.nb_pages,
    per_page = response.hits_per_page,
    "received search results"
  );

  Ok(response.hits)
}

fn url(config: &Config, window: Window) -> Result<reqwest::Url> {
  let filters = format!(
    "created_at_i>{},created_at_i<{},points>{}",
    window.start, window.end, config.min_points
  );

  reqwest::Url::parse_with_params(
    &config.search_endpoint,
    [
      ("tags", "story"),
      ("numericFilters", filters.as_str()),
      ("hitsPerPage", config.hits_per_page.to_string().as_str()),
    ],
  )
  .with_context(|| {
    format!("invalid search endpoint `{}`", config.search_endpoint)
  })
}
