use super::*;

/// Outcome of a single item fetch.
///
/// `NotFound` covers both a missing item and a failed request. Callers stop
/// descending either way; the fetcher logs which one it was.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Lookup {
  Found(Item),
  NotFound,
}

impl Lookup {
  pub(crate) fn into_item(self) -> Option<Item> {
    match self {
      Self::Found(item) => Some(item),
      Self::NotFound => None,
    }
  }
}
