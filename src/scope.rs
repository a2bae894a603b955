use super::*;

/// Entry point the host talks to: one `Query` per search, one `Preview` per
/// preview request, all sharing the same configuration.
pub(crate) struct Scope {
  config: Arc<Config>,
}

impl Scope {
  pub(crate) fn new(config: Config) -> Self {
    info!(
      api_root = %config.api_root,
      variant = %config.variant,
      "starting scope"
    );

    Self {
      config: Arc::new(config),
    }
  }

  pub(crate) fn preview(&self, result: CategorisedResult) -> Preview {
    Preview::new(result)
  }

  pub(crate) fn search(&self, query: CannedQuery) -> Result<Query> {
    Query::new(query, Arc::clone(&self.config))
  }
}
