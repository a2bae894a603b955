use super::*;

/// A story as the adapters see it. `Item::default()` is the all-zero record
/// and never comes out of a parsed response.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct Item {
  pub(crate) by: String,
  #[allow(dead_code)]
  pub(crate) dead: bool,
  #[allow(dead_code)]
  pub(crate) deleted: bool,
  pub(crate) descendants: Option<u64>,
  pub(crate) id: u64,
  pub(crate) kids: Vec<u64>,
  #[allow(dead_code)]
  pub(crate) kind: String,
  #[allow(dead_code)]
  pub(crate) parent: Option<u64>,
  #[allow(dead_code)]
  pub(crate) parts: Vec<u64>,
  pub(crate) score: u64,
  #[allow(dead_code)]
  pub(crate) text: Option<String>,
  #[allow(dead_code)]
  pub(crate) time: u64,
  pub(crate) title: String,
  pub(crate) url: Option<String>,
}

impl Item {
  pub(crate) fn comment_count(&self) -> u64 {
    self
      .descendants
      .unwrap_or_else(|| u64::try_from(self.kids.len()).unwrap_or(u64::MAX))
  }

  pub(crate) fn comments_url(&self) -> String {
    format!("{HN_ITEM_URL}{}", self.id)
  }

  /// The external link, falling back to the comments page for text posts.
  pub(crate) fn display_url(&self) -> String {
    self
      .url
      .clone()
      .filter(|url| !url.is_empty())
      .unwrap_or_else(|| self.comments_url())
  }

  pub(crate) fn summary(&self) -> String {
    format!(
      "{} points by {} | {} comments",
      self.score,
      self.by,
      self.comment_count()
    )
  }
}
