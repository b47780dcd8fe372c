use super::*;

/// A search hit plus its sampled comments, serialized as one flat record
/// where comments appear under their slot keys (`p1D1`, `p1D2`, ...).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub(crate) struct EnrichedStory {
  #[serde(flatten)]
  pub(crate) comments: Comments,
  #[serde(flatten)]
  pub(crate) story: SearchHit,
}

impl EnrichedStory {
  pub(crate) fn new(mut story: SearchHit, comments: Comments) -> Self {
    story.extra.retain(|key, _| key.parse::<Slot>().is_err());

    Self { comments, story }
  }
}
