use super::*;

/// Fails unless `url` answers with 200.
pub(crate) async fn check(client: &reqwest::Client, url: &str) -> Result {
  let response = client
    .get(url)
    .send()
    .await
    .with_context(|| format!("health check failed: {url} is unreachable"))?;

  let status = response.status();

  ensure!(
    status == reqwest::StatusCode::OK,
    "health check failed: {url} returned status {status}"
  );

  info!(url, "health check passed");

  Ok(())
}
