use super::*;

/// Sparse mapping from comment slot to the item fetched there.
///
/// A slot is only present when its own fetch succeeded and every slot above
/// it on the same branch is present too.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct Comments {
  items: BTreeMap<Slot, Item>,
}

impl Serialize for Comments {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(self.items.len()))?;

    for (slot, item) in &self.items {
      map.serialize_entry(&slot.to_string(), item)?;
    }

    map.end()
  }
}

impl Comments {
  /// Items grouped by branch, each branch ordered from depth 1 downwards.
  pub(crate) fn branches(&self) -> Vec<Vec<&Item>> {
    let mut branches: Vec<Vec<&Item>> = Vec::new();

    let mut current = None;

    for (slot, item) in &self.items {
      if current != Some(slot.branch) {
        current = Some(slot.branch);
        branches.push(Vec::new());
      }

      if let Some(branch) = branches.last_mut() {
        branch.push(item);
      }
    }

    branches
  }

  #[cfg(test)]
  pub(crate) fn get(&self, slot: Slot) -> Option<&Item> {
    self.items.get(&slot)
  }

  pub(crate) fn insert(&mut self, slot: Slot, item: Item) {
    self.items.insert(slot, item);
  }

  #[cfg(test)]
  pub(crate) fn is_empty(&self) -> bool {
    self.items.is_empty()
  }

  pub(crate) fn len(&self) -> usize {
    self.items.len()
  }

  #[cfg(test)]
  pub(crate) fn slots(&self) -> impl Iterator<Item = Slot> + '_ {
    self.items.keys().copied()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn sample() -> Comments {
    let mut comments = Comments::default();

    comments.insert(Slot::new(2, 1), Item::new(21, &[]));
    comments.insert(Slot::new(1, 2), Item::new(12, &[]));
    comments.insert(Slot::new(1, 1), Item::new(11, &[12]));

    comments
  }

  #[test]
  fn serializes_with_slot_keys() {
    let value = serde_json::to_value(sample()).unwrap();

    let keys = value.as_object().unwrap().keys().cloned().collect::<Vec<_>>();

    assert_eq!(keys.len(), 3);
    assert_eq!(value["p1D1"]["id"], 11);
    assert_eq!(value["p1D2"]["id"], 12);
    assert_eq!(value["p2D1"]["id"], 21);
  }

  #[test]
  fn branches_group_in_order() {
    let comments = sample();

    let ids = comments
      .branches()
      .iter()
      .map(|branch| branch.iter().map(|item| item.id).collect::<Vec<_>>())
      .collect::<Vec<_>>();

    assert_eq!(ids, [vec![11, 12], vec![21]]);
  }

  #[test]
  fn empty_has_no_branches() {
    let comments = Comments::default();

    assert!(comments.is_empty());
    assert!(comments.branches().is_empty());
    assert_eq!(serde_json::to_string(&comments).unwrap(), "{}");
  }
}
