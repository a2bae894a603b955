use super::*;

/// A parsed top-stories response.
#[derive(Debug)]
pub(crate) enum Listing {
  /// Bare ids, each needing its own item request.
  Ids(Vec<u64>),
  /// Stories already denormalized into the listing.
  Stories(Vec<Item>),
}

impl Listing {
  pub(crate) fn into_ids(self) -> Vec<u64> {
    match self {
      Self::Ids(ids) => ids,
      Self::Stories(stories) => {
        stories.into_iter().map(|story| story.id).collect()
      }
    }
  }
}
