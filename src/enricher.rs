use super::*;

/// Attaches sampled comments to each story, one story at a time.
pub(crate) struct Enricher<'a, S> {
  walker: Walker<'a, S>,
}

impl<'a, S: ItemSource> Enricher<'a, S> {
  pub(crate) async fn enrich(&self, stories: Vec<SearchHit>) -> Vec<EnrichedStory> {
    let mut enriched = Vec::with_capacity(stories.len());

    for story in stories {
      let comments = match story.item_id() {
        Some(id) => self.walker.walk(id).await,
        None => {
          warn!(object_id = %story.object_id, "story id is not numeric, skipping comments");
          Comments::default()
        }
      };

      debug!(
        object_id = %story.object_id,
        comments = comments.len(),
        "enriched story"
      );

      enriched.push(EnrichedStory::new(story, comments));
    }

    enriched
  }

  pub(crate) fn new(walker: Walker<'a, S>) -> Self {
    Self { walker }
  }
}
