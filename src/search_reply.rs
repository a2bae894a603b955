use super::*;

/// The host's side of a running search.
pub(crate) trait SearchReply {
  /// Reports a failure the host should surface instead of results.
  fn error(&mut self, error: Error);

  /// Returns `false` once the host wants no more results.
  fn push(&mut self, result: CategorisedResult) -> bool;

  fn register_category(&mut self, category: &Category);
}
