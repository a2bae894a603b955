use super::*;

/// The `/news` style API, whose listing already carries each story.
pub(crate) struct News;

impl Api for News {
  fn denormalized(&self) -> bool {
    true
  }

  fn item(&self, id: u64) -> Endpoint {
    let id = id.to_string();
    Endpoint::new(["item", id.as_str()])
  }

  fn parse_item(&self, body: Value) -> Result<Item> {
    serde_json::from_value::<NewsItem>(body)?.try_into()
  }

  fn parse_listing(&self, body: Value) -> Result<Listing> {
    let stories = serde_json::from_value::<Vec<NewsItem>>(body)?
      .into_iter()
      .take(TOP_STORIES_LIMIT)
      .filter_map(|item| match Item::try_from(item) {
        Ok(story) => Some(story),
        Err(error) => {
          debug!(%error, "dropping listing entry");
          None
        }
      })
      .collect();

    Ok(Listing::Stories(stories))
  }

  fn top_stories(&self, query: &str) -> Endpoint {
    Endpoint::new(["news"]).parameter("q", query)
  }

  fn user(&self, id: &str) -> Endpoint {
    Endpoint::new(["user", id])
  }
}
