use super::*;

/// A group of results and the template the host renders them with.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub(crate) struct Category {
  pub(crate) icon: String,
  pub(crate) id: String,
  pub(crate) renderer: Value,
  pub(crate) title: String,
}
