use super::*;

pub(crate) struct Query {
  client: Client,
  query: CannedQuery,
}

impl Query {
  const CATEGORY_ID: &str = "stories";

  const CATEGORY_TITLE: &str = "Top Stories";

  fn category() -> Category {
    Category {
      icon: String::new(),
      id: Self::CATEGORY_ID.into(),
      renderer: json!({
        "schema-version": 1,
        "template": {
          "category-layout": "grid",
          "card-layout": "horizontal",
          "card-size": "small"
        },
        "components": {
          "title": "title",
          "subtitle": "author"
        }
      }),
      title: Self::CATEGORY_TITLE.into(),
    }
  }

  fn fail(reply: &mut dyn SearchReply, error: Error) {
    if matches!(error, Error::Cancelled) {
      return;
    }

    warn!(%error, "could not load top stories");

    reply.error(error);
  }

  pub(crate) fn new(query: CannedQuery, config: Arc<Config>) -> Result<Self> {
    Ok(Self {
      client: Client::new(config)?,
      query,
    })
  }

  fn result(category: &Category, item: &Item) -> CategorisedResult {
    let mut result = CategorisedResult::new(category);

    result.title.clone_from(&item.title);
    result.uri = item.display_url();
    result.set("author", item.summary());
    result.set("comments", item.comments_url());

    result
  }
}

impl SearchQuery for Query {
  fn cancelled(&self) {
    self.client.cancel();
  }

  async fn run(&self, reply: &mut dyn SearchReply) {
    let query = self.query.query_string.trim();

    debug!(query, variant = %self.client.config().variant, "running search");

    let category = Self::category();

    reply.register_category(&category);

    if self.client.has_denormalized_listing() {
      match self.client.top_stories(query).await {
        Ok(stories) => {
          for story in stories {
            if !reply.push(Self::result(&category, &story)) {
              debug!("host stopped accepting results");
              return;
            }
          }
        }
        Err(error) => Self::fail(reply, error),
      }

      return;
    }

    let ids = match self.client.get_top_stories(query).await {
      Ok(ids) => ids,
      Err(error) => {
        Self::fail(reply, error);
        return;
      }
    };

    debug!(query, count = ids.len(), "loaded top stories");

    for id in ids {
      let item = match self.client.get_item(id).await {
        Ok(item) => item,
        Err(
          error @ (Error::ItemNotFound { .. }
          | Error::UnsupportedItemType { .. }),
        ) => {
          debug!(id, %error, "skipping item");
          continue;
        }
        Err(error) if error.is_skippable() => {
          warn!(id, %error, "could not load item");
          continue;
        }
        Err(_) => return,
      };

      if !reply.push(Self::result(&category, &item)) {
        debug!("host stopped accepting results");
        return;
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use {
    super::*,
    mockito::{Matcher, Mock, Server, ServerGuard},
    std::{thread, time::Duration},
  };

  #[derive(Default)]
  struct RecordingReply {
    accept: Option<usize>,
    categories: Vec<Category>,
    errors: Vec<Error>,
    results: Vec<CategorisedResult>,
  }

  impl SearchReply for RecordingReply {
    fn error(&mut self, error: Error) {
      self.errors.push(error);
    }

    fn push(&mut self, result: CategorisedResult) -> bool {
      self.results.push(result);
      self.accept.is_none_or(|accept| self.results.len() < accept)
    }

    fn register_category(&mut self, category: &Category) {
      self.categories.push(category.clone());
    }
  }

  async fn fixture(server: &mut ServerGuard, path: &str, body: Value) -> Mock {
    server
      .mock("GET", path)
      .with_header("content-type", "application/json")
      .with_body(body.to_string())
      .create_async()
      .await
  }

  async fn front_page(server: &mut ServerGuard) -> Vec<Mock> {
    vec![
      top_stories(server, json!([1, 2, 3])).await,
      fixture(server, "/v0/item/1.json", story(1, Some("https://e.com/1")))
        .await,
      fixture(server, "/v0/item/2.json", json!({ "id": 2, "type": "comment" }))
        .await,
      fixture(server, "/v0/item/3.json", story(3, None)).await,
    ]
  }

  fn query(server: &ServerGuard, query_string: &str) -> Query {
    query_with(server, query_string, ApiVariant::Firebase)
  }

  fn query_with(
    server: &ServerGuard,
    query_string: &str,
    variant: ApiVariant,
  ) -> Query {
    Query::new(
      CannedQuery::new(query_string),
      Arc::new(Config::mock(server, variant)),
    )
    .unwrap()
  }

  fn story(id: u64, url: Option<&str>) -> Value {
    json!({
      "by": "pg",
      "id": id,
      "kids": [1, 2, 3],
      "score": 10,
      "title": format!("Story {id}"),
      "type": "story",
      "url": url
    })
  }

  async fn top_stories(server: &mut ServerGuard, ids: Value) -> Mock {
    server
      .mock("GET", "/v0/topstories.json")
      .match_query(Matcher::Any)
      .with_header("content-type", "application/json")
      .with_body(ids.to_string())
      .create_async()
      .await
  }

  async fn unrequested(server: &mut ServerGuard, path: &str) -> Mock {
    server
      .mock("GET", path)
      .expect(0)
      .create_async()
      .await
  }

  #[tokio::test]
  async fn run_pushes_one_result_per_story() {
    let mut server = Server::new_async().await;

    let _mocks = front_page(&mut server).await;

    let mut reply = RecordingReply::default();

    query(&server, "").run(&mut reply).await;

    assert_eq!(reply.categories.len(), 1);
    assert_eq!(reply.categories[0].id, "stories");
    assert!(reply.errors.is_empty());
    assert_eq!(reply.results.len(), 2);

    let first = &reply.results[0];

    assert_eq!(first.category, "stories");
    assert_eq!(first.title, "Story 1");
    assert_eq!(first.uri, "https://e.com/1");
    assert_eq!(first.attribute("author"), Some("10 points by pg | 3 comments"));
    assert_eq!(
      first.attribute("comments"),
      Some("https://news.ycombinator.com/item?id=1")
    );
  }

  #[tokio::test]
  async fn story_without_url_links_to_comments() {
    let mut server = Server::new_async().await;

    let _mocks = front_page(&mut server).await;

    let mut reply = RecordingReply::default();

    query(&server, "").run(&mut reply).await;

    let result = &reply.results[1];

    assert_eq!(result.uri, "https://news.ycombinator.com/item?id=3");
    assert_eq!(result.attribute("comments"), Some(result.uri.as_str()));
  }

  #[tokio::test]
  async fn run_trims_query_string() {
    let mut server = Server::new_async().await;

    let listing = server
      .mock("GET", "/v0/topstories.json")
      .match_query(Matcher::UrlEncoded("q".into(), "rust".into()))
      .with_body("[1]")
      .expect(1)
      .create_async()
      .await;

    let _item = fixture(&mut server, "/v0/item/1.json", story(1, None)).await;

    let mut reply = RecordingReply::default();

    query(&server, "  rust  ").run(&mut reply).await;

    listing.assert_async().await;

    assert_eq!(reply.results.len(), 1);
  }

  #[tokio::test]
  async fn rejected_push_stops_iteration() {
    let mut server = Server::new_async().await;

    let _mocks = vec![
      top_stories(&mut server, json!([1, 2, 3])).await,
      fixture(&mut server, "/v0/item/1.json", story(1, None)).await,
    ];

    let skipped = vec![
      unrequested(&mut server, "/v0/item/2.json").await,
      unrequested(&mut server, "/v0/item/3.json").await,
    ];

    let mut reply = RecordingReply {
      accept: Some(1),
      ..RecordingReply::default()
    };

    query(&server, "").run(&mut reply).await;

    assert_eq!(reply.results.len(), 1);
    assert!(reply.errors.is_empty());

    for mock in skipped {
      mock.assert_async().await;
    }
  }

  #[tokio::test]
  async fn rejected_push_stops_denormalized_listing() {
    let mut server = Server::new_async().await;

    let news = server
      .mock("GET", "/v0/news")
      .match_query(Matcher::Any)
      .with_header("content-type", "application/json")
      .with_body(
        json!([
          { "id": 1, "points": 3, "title": "One", "type": "link" },
          { "id": 2, "points": 2, "title": "Two", "type": "link" },
          { "id": 3, "points": 1, "title": "Three", "type": "ask" }
        ])
        .to_string(),
      )
      .expect(1)
      .create_async()
      .await;

    let items = server
      .mock("GET", Matcher::Regex("^/v0/item/".into()))
      .expect(0)
      .create_async()
      .await;

    let mut reply = RecordingReply {
      accept: Some(1),
      ..RecordingReply::default()
    };

    query_with(&server, "", ApiVariant::News)
      .run(&mut reply)
      .await;

    assert_eq!(reply.results.len(), 1);
    assert_eq!(reply.results[0].title, "One");
    assert!(reply.errors.is_empty());

    news.assert_async().await;
    items.assert_async().await;
  }

  #[tokio::test]
  async fn failed_listing_is_reported() {
    let mut server = Server::new_async().await;

    let _listing = server
      .mock("GET", "/v0/topstories.json")
      .match_query(Matcher::Any)
      .with_status(500)
      .with_body("\"down\"")
      .create_async()
      .await;

    let mut reply = RecordingReply::default();

    query(&server, "").run(&mut reply).await;

    assert!(reply.results.is_empty());
    assert_eq!(reply.errors.len(), 1);
    assert!(matches!(reply.errors[0], Error::Status { .. }));
  }

  #[tokio::test]
  async fn failed_item_is_skipped() {
    let mut server = Server::new_async().await;

    let _mocks = vec![
      top_stories(&mut server, json!([1, 2])).await,
      server
        .mock("GET", "/v0/item/1.json")
        .with_status(502)
        .with_body("\"bad gateway\"")
        .create_async()
        .await,
      fixture(&mut server, "/v0/item/2.json", story(2, None)).await,
    ];

    let mut reply = RecordingReply::default();

    query(&server, "").run(&mut reply).await;

    assert!(reply.errors.is_empty());
    assert_eq!(reply.results.len(), 1);
    assert_eq!(reply.results[0].title, "Story 2");
  }

  #[tokio::test]
  async fn cancellation_stops_pushing() {
    let mut server = Server::new_async().await;

    let _mocks = vec![
      top_stories(&mut server, json!([1, 2, 3])).await,
      fixture(&mut server, "/v0/item/1.json", story(1, None)).await,
      server
        .mock("GET", "/v0/item/2.json")
        .with_chunked_body(|writer| {
          thread::sleep(Duration::from_secs(30));
          writer.write_all(story(2, None).to_string().as_bytes())
        })
        .create_async()
        .await,
    ];

    let third = unrequested(&mut server, "/v0/item/3.json").await;

    let query = Arc::new(query(&server, ""));

    {
      let query = Arc::clone(&query);

      tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(200)).await;
        query.cancelled();
      });
    }

    let mut reply = RecordingReply::default();

    tokio::time::timeout(Duration::from_secs(10), query.run(&mut reply))
      .await
      .expect("cancelled query should return");

    assert_eq!(reply.results.len(), 1);
    assert!(reply.errors.is_empty());

    third.assert_async().await;
  }

  #[tokio::test]
  async fn cancelled_before_run_pushes_nothing() {
    let mut server = Server::new_async().await;

    let anything = server
      .mock("GET", Matcher::Any)
      .expect(0)
      .create_async()
      .await;

    let query = query(&server, "");

    query.cancelled();

    let mut reply = RecordingReply::default();

    query.run(&mut reply).await;

    assert!(reply.results.is_empty());
    assert!(reply.errors.is_empty());

    anything.assert_async().await;
  }
}
