use super::*;

/// A button on a preview, as the host receives it.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub(crate) struct Action {
  pub(crate) id: String,
  pub(crate) label: String,
  pub(crate) uri: String,
}
