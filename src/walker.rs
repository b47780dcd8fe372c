use super::*;

/// Samples a story's discussion: the first `branches` top-level replies,
/// each followed down its first-reply chain to `depth` levels.
pub(crate) struct Walker<'a, S> {
  branches: usize,
  depth: usize,
  source: &'a S,
}

impl<'a, S: ItemSource> Walker<'a, S> {
  pub(crate) fn new(config: &Config, source: &'a S) -> Self {
    Self {
      branches: config.branch_count,
      depth: config.depth_per_branch,
      source,
    }
  }

  pub(crate) async fn walk(&self, root_id: u64) -> Comments {
    let mut comments = Comments::default();

    let Some(root) = self.source.fetch(root_id).await.into_item() else {
      debug!(root_id, "story unavailable, no comments collected");
      return comments;
    };

    for (index, &id) in root.kids().iter().take(self.branches).enumerate() {
      self.walk_branch(index + 1, id, &mut comments).await;
    }

    debug!(root_id, comments = comments.len(), "walked comment tree");

    comments
  }

  async fn walk_branch(&self, branch: usize, id: u64, comments: &mut Comments) {
    let mut next = Some(id);

    for depth in 1..=self.depth {
      let Some(id) = next else {
        break;
      };

      let Some(item) = self.source.fetch(id).await.into_item() else {
        debug!(id, branch, depth, "branch cut short");
        break;
      };

      next = item.first_kid();

      comments.insert(Slot::new(branch, depth), item);
    }
  }
}
