use super::*;

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Reply {
  pub(crate) body: String,
  pub(crate) status: u16,
}

impl Reply {
  pub(crate) fn is_server_error(&self) -> bool {
    self.status >= 500
  }
}

/// A single HTTP GET. Non-success statuses are not errors at this level.
pub(crate) trait Transport {
  async fn get(&self, url: &str) -> Result<Reply>;
}

impl Transport for reqwest::Client {
  async fn get(&self, url: &str) -> Result<Reply> {
    let response = reqwest::Client::get(self, url).send().await?;

    let status = response.status().as_u16();

    let body = response.text().await?;

    Ok(Reply { body, status })
  }
}

impl<T: Transport> Transport for &T {
  async fn get(&self, url: &str) -> Result<Reply> {
    (**self).get(url).await
  }
}

/// HTTP client whose requests fail once `request_timeout` has elapsed, so a
/// peer that stops answering cannot hold up a run.
pub(crate) fn client(config: &Config) -> Result<reqwest::Client> {
  reqwest::Client::builder()
    .timeout(config.request_timeout())
    .build()
    .context("failed to build HTTP client")
}
