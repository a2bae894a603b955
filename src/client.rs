use super::*;

pub(crate) struct Client {
  api: Box<dyn Api>,
  cancellation: Cancellation,
  config: Arc<Config>,
  http: reqwest::Client,
}

impl Client {
  pub(crate) fn cancel(&self) {
    debug!("cancelling pending requests");
    self.cancellation.cancel();
  }

  pub(crate) fn config(&self) -> Arc<Config> {
    Arc::clone(&self.config)
  }

  async fn get(&self, endpoint: Endpoint) -> Result<Value> {
    let url = self.url(&endpoint)?;

    if self.cancellation.is_cancelled() {
      return Err(Error::Cancelled);
    }

    debug!(%url, "requesting");

    tokio::select! {
      biased;
      () = self.cancellation.cancelled() => {
        debug!(%url, "request aborted");
        Err(Error::Cancelled)
      }
      result = self.request(url.clone()) => result,
    }
  }

  pub(crate) async fn get_item(&self, id: u64) -> Result<Item> {
    let body = self.get(self.api.item(id)).await?;

    if body.is_null() {
      return Err(Error::ItemNotFound { id });
    }

    self.api.parse_item(body)
  }

  /// Ids of the current front page, best first, at most twenty.
  pub(crate) async fn get_top_stories(&self, query: &str) -> Result<Vec<u64>> {
    let body = self.get(self.api.top_stories(query)).await?;

    Ok(
      self
        .api
        .parse_listing(body)?
        .into_ids()
        .into_iter()
        .take(TOP_STORIES_LIMIT)
        .collect(),
    )
  }

  pub(crate) async fn get_user(&self, id: &str) -> Result<User> {
    let body = self.get(self.api.user(id)).await?;

    if body.is_null() {
      return Err(Error::UserNotFound { id: id.into() });
    }

    self.api.parse_user(body)
  }

  pub(crate) fn has_denormalized_listing(&self) -> bool {
    self.api.denormalized()
  }

  pub(crate) fn new(config: Arc<Config>) -> Result<Self> {
    let http = reqwest::Client::builder()
      .user_agent(config.user_agent.as_str())
      .build()?;

    Ok(Self {
      api: config.variant.api(),
      cancellation: Cancellation::default(),
      config,
      http,
    })
  }

  async fn request(&self, url: Url) -> Result<Value> {
    let response = self.http.get(url).send().await?;

    let status = response.status();

    if !status.is_success() {
      let body = response.text().await.unwrap_or_default();
      return Err(Error::Status { body, status });
    }

    Ok(response.json::<Value>().await?)
  }

  /// Populated top stories. Items that fail to load or aren't stories are
  /// skipped; only a failed listing request is an error.
  pub(crate) async fn top_stories(&self, query: &str) -> Result<Vec<Item>> {
    let body = self.get(self.api.top_stories(query)).await?;

    let ids = match self.api.parse_listing(body)? {
      Listing::Stories(stories) => {
        return Ok(stories.into_iter().take(TOP_STORIES_LIMIT).collect());
      }
      Listing::Ids(ids) => ids,
    };

    let responses = stream::iter(
      ids
        .into_iter()
        .take(TOP_STORIES_LIMIT)
        .map(move |id| async move { (id, self.get_item(id).await) }),
    )
    .buffered(ITEM_FETCH_CONCURRENCY)
    .collect::<Vec<_>>()
    .await;

    let mut stories = Vec::with_capacity(responses.len());

    for (id, response) in responses {
      match response {
        Ok(story) => stories.push(story),
        Err(error) if error.is_skippable() => {
          warn!(id, %error, "skipping item");
        }
        Err(error) => return Err(error),
      }
    }

    Ok(stories)
  }

  fn url(&self, endpoint: &Endpoint) -> Result<Url> {
    let root = &self.config.api_root;

    let invalid = |message: String| Error::ApiRoot {
      message,
      root: root.clone(),
    };

    let mut url = Url::parse(root).map_err(|error| invalid(error.to_string()))?;

    url
      .path_segments_mut()
      .map_err(|()| invalid("cannot be a base URL".into()))?
      .pop_if_empty()
      .extend(&endpoint.path);

    if !endpoint.parameters.is_empty() {
      url.query_pairs_mut().extend_pairs(&endpoint.parameters);
    }

    Ok(url)
  }
}
