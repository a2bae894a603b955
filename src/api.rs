use super::*;

/// One shape of the remote API: where its endpoints live and how their
/// bodies turn into records.
pub(crate) trait Api: Send + Sync {
  /// Whether the top-stories listing already carries every story.
  fn denormalized(&self) -> bool {
    false
  }

  fn item(&self, id: u64) -> Endpoint;

  fn parse_item(&self, body: Value) -> Result<Item>;

  fn parse_listing(&self, body: Value) -> Result<Listing>;

  fn parse_user(&self, body: Value) -> Result<User> {
    Ok(serde_json::from_value(body)?)
  }

  fn top_stories(&self, query: &str) -> Endpoint;

  fn user(&self, id: &str) -> Endpoint;
}
