use super::*;

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct FeedItem {
  pub(crate) date: String,
  pub(crate) description: String,
  pub(crate) guid: String,
  pub(crate) link: String,
  pub(crate) title: String,
}

impl FeedItem {
  /// Dated `points` seconds before `now`, so readers that sort by date list
  /// the highest scoring stories first.
  pub(crate) fn new(story: &EnrichedStory, now: DateTime<Utc>) -> Result<Self> {
    let age = i64::try_from(story.story.points)
      .ok()
      .and_then(TimeDelta::try_seconds)
      .unwrap_or_else(TimeDelta::zero);

    Ok(Self {
      date: now.checked_sub_signed(age).unwrap_or(now).to_rfc2822(),
      description: render::describe(story)?,
      guid: story.story.object_id.clone(),
      link: story.story.discussion_url(),
      title: format!("{}p | {}", story.story.points, story.story.title),
    })
  }
}
