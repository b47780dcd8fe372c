use super::*;

/// Earliest configured wall-clock run time in the zone of `now` that is
/// strictly after `now`. Times skipped by a daylight saving jump are dropped.
pub(crate) fn next_run(
  now: DateTime<Tz>,
  times: &[NaiveTime],
) -> Option<DateTime<Tz>> {
  let zone = now.timezone();

  let today = now.date_naive();

  // Three days so a time lost to a daylight saving jump tomorrow still has
  // a successor.
  std::iter::successors(Some(today), |date| date.succ_opt())
    .take(3)
    .flat_map(|date| times.iter().map(move |time| date.and_time(*time)))
    .filter_map(|naive| naive.and_local_timezone(zone).earliest())
    .filter(|candidate| *candidate > now)
    .min()
}

/// Regenerates the feed at every scheduled time, forever. A failed run is
/// logged and the next one is still scheduled.
pub(crate) async fn run<T: Transport>(config: &Config, transport: &T) -> Result {
  loop {
    let now = Utc::now().with_timezone(&config.timezone);

    let next = next_run(now, &config.schedule)
      .context("schedule has no upcoming run")?;

    info!(next = %next.to_rfc3339(), "next feed run scheduled");

    tokio::time::sleep((next - now).to_std().unwrap_or_default()).await;

    info!("running scheduled feed update");

    let outcome = match Window::trailing(config) {
      Ok(window) => pipeline::run(config, transport, window).await,
      Err(error) => Err(error),
    };

    if let Err(error) = outcome {
      error!(error = %format!("{error:#}"), "scheduled feed update failed");
    }
  }
}
