#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct CannedQuery {
  pub(crate) query_string: String,
}

impl CannedQuery {
  pub(crate) fn new(query_string: impl Into<String>) -> Self {
    Self {
      query_string: query_string.into(),
    }
  }
}
