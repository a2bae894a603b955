use super::*;

/// The official API: a listing of ids plus one request per item.
pub(crate) struct Firebase;

impl Api for Firebase {
  fn item(&self, id: u64) -> Endpoint {
    let file = format!("{id}.json");
    Endpoint::new(["item", file.as_str()])
  }

  fn parse_item(&self, body: Value) -> Result<Item> {
    serde_json::from_value::<FirebaseItem>(body)?.try_into()
  }

  fn parse_listing(&self, body: Value) -> Result<Listing> {
    Ok(Listing::Ids(serde_json::from_value(body)?))
  }

  fn top_stories(&self, query: &str) -> Endpoint {
    Endpoint::new(["topstories.json"]).parameter("q", query)
  }

  fn user(&self, id: &str) -> Endpoint {
    let file = format!("{id}.json");
    Endpoint::new(["user", file.as_str()])
  }
}
