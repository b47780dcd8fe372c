use super::*;

/// One full feed run: search the window, sample comments for every hit,
/// render and replace the feed file. Returns the number of items written.
pub(crate) async fn run<T: Transport>(
  config: &Config,
  transport: &T,
  window: Window,
) -> Result<usize> {
  info!(start = window.start, end = window.end, "creating feed");

  let hits = search::search(transport, config, window).await?;

  let fetcher = Fetcher::new(config, transport);

  let stories = Enricher::new(Walker::new(config, &fetcher))
    .enrich(hits)
    .await;

  if let Some(sample) = stories.first() {
    debug!(sample = %serde_json::to_string(sample)?, "first enriched story");
  }

  let now = Utc::now();

  let items = render::prepare(stories, now)?;

  let xml = feed::to_xml(&Channel::new(config), &items, now)?;

  feed::write(&config.feed_path(), &xml).await?;

  info!(
    items = items.len(),
    path = %config.feed_path().display(),
    "created new feed"
  );

  Ok(items.len())
}
