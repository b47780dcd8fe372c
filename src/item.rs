use super::*;

/// A story or comment as returned by the item API.
///
/// Only `id` and `kids` drive traversal. Fields this type does not name are
/// kept in `extra` so they survive into the enriched output untouched.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub(crate) struct Item {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub(crate) by: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub(crate) dead: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub(crate) deleted: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub(crate) descendants: Option<u64>,
  #[serde(flatten)]
  pub(crate) extra: Map<String, Value>,
  pub(crate) id: u64,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub(crate) kids: Option<Vec<u64>>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub(crate) parent: Option<u64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub(crate) score: Option<u64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub(crate) text: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub(crate) time: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub(crate) title: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub(crate) r#type: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub(crate) url: Option<String>,
}

impl Item {
  pub(crate) fn first_kid(&self) -> Option<u64> {
    self.kids.as_ref()?.first().copied()
  }

  pub(crate) fn header(&self) -> String {
    let author = self.by.as_deref().unwrap_or("unknown");

    match (self.deleted.unwrap_or(false), self.dead.unwrap_or(false)) {
      (true, _) => format!("{author} (deleted)"),
      (_, true) => format!("{author} (dead)"),
      _ => author.to_string(),
    }
  }

  pub(crate) fn kids(&self) -> &[u64] {
    self.kids.as_deref().unwrap_or_default()
  }

  #[cfg(test)]
  pub(crate) fn new(id: u64, kids: &[u64]) -> Self {
    Self {
      by: None,
      dead: None,
      deleted: None,
      descendants: None,
      extra: Map::new(),
      id,
      kids: Some(kids.to_vec()),
      parent: None,
      score: None,
      text: None,
      time: None,
      title: None,
      r#type: None,
      url: None,
    }
  }

  pub(crate) fn permalink(&self) -> String {
    format!("{HN_ITEM_URL}{}", self.id)
  }
}
