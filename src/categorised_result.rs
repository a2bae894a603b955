use super::*;

/// One search result handed to the host. `uri` and `title` are built in;
/// anything else the renderer or a preview needs goes in `attributes`.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub(crate) struct CategorisedResult {
  pub(crate) attributes: BTreeMap<String, Value>,
  pub(crate) category: String,
  pub(crate) title: String,
  pub(crate) uri: String,
}

impl CategorisedResult {
  pub(crate) fn attribute(&self, key: &str) -> Option<&str> {
    self.attributes.get(key).and_then(Value::as_str)
  }

  pub(crate) fn new(category: &Category) -> Self {
    Self {
      category: category.id.clone(),
      ..Self::default()
    }
  }

  pub(crate) fn set(&mut self, key: &str, value: impl Into<Value>) {
    self.attributes.insert(key.into(), value.into());
  }

  /// Looks a field up by name the way widget attribute mappings do.
  pub(crate) fn value(&self, key: &str) -> Option<Value> {
    match key {
      "title" => Some(Value::String(self.title.clone())),
      "uri" => Some(Value::String(self.uri.clone())),
      _ => self.attributes.get(key).cloned(),
    }
  }
}
