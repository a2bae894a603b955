use super::*;

#[derive(Debug, thiserror::Error)]
pub(crate) enum Error {
  #[error("invalid API root `{root}`: {message}")]
  ApiRoot { message: String, root: String },
  #[error("request cancelled")]
  Cancelled,
  #[error("item {id} not found")]
  ItemNotFound { id: u64 },
  #[error("malformed response: {0}")]
  Json(#[from] serde_json::Error),
  #[error("unexpected status {status}: {body}")]
  Status { body: String, status: StatusCode },
  #[error("transport error: {0}")]
  Transport(#[from] reqwest::Error),
  #[error("item {id} has unsupported type `{kind}`")]
  UnsupportedItemType { id: u64, kind: String },
  #[error("user `{id}` not found")]
  UserNotFound { id: String },
}

impl Error {
  /// Whether a listing can carry on past this failure for a single item.
  pub(crate) fn is_skippable(&self) -> bool {
    !matches!(self, Self::ApiRoot { .. } | Self::Cancelled)
  }
}
