use {super::*, tokio::sync::Mutex};

/// Anything that can resolve an item id.
pub(crate) trait ItemSource {
  async fn fetch(&self, id: u64) -> Lookup;
}

/// Fetches single items from the item API, one request at a time, waiting
/// the configured throttle before every request.
pub(crate) struct Fetcher<T> {
  endpoint: String,
  gate: Mutex<()>,
  throttle: Duration,
  transport: T,
}

impl<T: Transport> Fetcher<T> {
  pub(crate) fn new(config: &Config, transport: T) -> Self {
    Self {
      endpoint: config.item_endpoint.clone(),
      gate: Mutex::new(()),
      throttle: config.throttle(),
      transport,
    }
  }

  fn url(&self, id: u64) -> String {
    self
      .endpoint
      .replace(config::ITEM_ID_PLACEHOLDER, &id.to_string())
  }
}

impl<T: Transport> ItemSource for Fetcher<T> {
  async fn fetch(&self, id: u64) -> Lookup {
    // Held across the wait and the request so shared callers stay paced.
    let _guard = self.gate.lock().await;

    tokio::time::sleep(self.throttle).await;

    let url = self.url(id);

    debug!(id, %url, "fetching item");

    let reply = match self.transport.get(&url).await {
      Ok(reply) => reply,
      Err(error) => {
        warn!(id, error = %format!("{error:#}"), "item request failed");
        return Lookup::NotFound;
      }
    };

    if reply.is_server_error() {
      warn!(id, status = reply.status, "item request returned server error");
      return Lookup::NotFound;
    }

    match serde_json::from_str::<Option<Item>>(&reply.body) {
      Ok(Some(item)) => Lookup::Found(item),
      Ok(None) => {
        warn!(id, status = reply.status, "item does not exist");
        Lookup::NotFound
      }
      Err(error) => {
        warn!(id, status = reply.status, %error, "item response is not an item");
        Lookup::NotFound
      }
    }
  }
}

#[cfg(test)]
pub(crate) struct StubSource {
  calls: std::sync::Mutex<Vec<u64>>,
  items: BTreeMap<u64, Item>,
}

#[cfg(test)]
impl StubSource {
  pub(crate) fn calls(&self) -> Vec<u64> {
    self.calls.lock().unwrap().clone()
  }

  pub(crate) fn new(items: impl IntoIterator<Item = Item>) -> Self {
    Self {
      calls: std::sync::Mutex::new(Vec::new()),
      items: items.into_iter().map(|item| (item.id, item)).collect(),
    }
  }
}

#[cfg(test)]
impl ItemSource for StubSource {
  async fn fetch(&self, id: u64) -> Lookup {
    self.calls.lock().unwrap().push(id);

    self
      .items
      .get(&id)
      .cloned()
      .map_or(Lookup::NotFound, Lookup::Found)
  }
}
