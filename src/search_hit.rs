use super::*;

/// A story as returned by the search API.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub(crate) struct SearchHit {
  #[serde(default)]
  pub(crate) author: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub(crate) children: Option<Vec<u64>>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub(crate) comment_text: Option<String>,
  #[serde(default)]
  pub(crate) created_at: String,
  #[serde(default)]
  pub(crate) created_at_i: i64,
  #[serde(flatten)]
  pub(crate) extra: Map<String, Value>,
  pub(crate) num_comments: Option<u64>,
  #[serde(rename = "objectID")]
  pub(crate) object_id: String,
  #[serde(default)]
  pub(crate) points: u64,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub(crate) story_text: Option<String>,
  #[serde(rename = "_tags", default)]
  pub(crate) tags: Vec<String>,
  #[serde(default)]
  pub(crate) title: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub(crate) updated_at: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub(crate) url: Option<String>,
}

impl SearchHit {
  pub(crate) fn discussion_url(&self) -> String {
    format!("{HN_ITEM_URL}{}", self.object_id)
  }

  /// Numeric item id, when the object id is one.
  pub(crate) fn item_id(&self) -> Option<u64> {
    self.object_id.parse().ok()
  }

  #[cfg(test)]
  pub(crate) fn new(object_id: &str, points: u64, title: &str) -> Self {
    Self {
      author: "test".into(),
      children: None,
      comment_text: None,
      created_at: "2024-03-14T15:00:00Z".into(),
      created_at_i: 1_710_428_400,
      extra: Map::new(),
      num_comments: Some(0),
      object_id: object_id.into(),
      points,
      story_text: None,
      tags: vec!["story".into()],
      title: title.into(),
      updated_at: None,
      url: None,
    }
  }
}
