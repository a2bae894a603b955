use super::*;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub(crate) struct PreviewWidget {
  pub(crate) attribute_mappings: BTreeMap<String, String>,
  pub(crate) attribute_values: BTreeMap<String, Value>,
  pub(crate) id: String,
  #[serde(rename = "type")]
  pub(crate) widget_type: String,
}

impl PreviewWidget {
  /// Actions carried by an `actions` widget; empty for any other.
  pub(crate) fn actions(&self) -> Vec<Action> {
    self
      .attribute_values
      .get("actions")
      .cloned()
      .and_then(|actions| serde_json::from_value(actions).ok())
      .unwrap_or_default()
  }

  /// Fills widget attribute `key` from result field `field`.
  pub(crate) fn add_attribute_mapping(&mut self, key: &str, field: &str) {
    self.attribute_mappings.insert(key.into(), field.into());
  }

  pub(crate) fn add_attribute_value(&mut self, key: &str, value: Value) {
    self.attribute_values.insert(key.into(), value);
  }

  pub(crate) fn new(id: &str, widget_type: &str) -> Self {
    Self {
      attribute_mappings: BTreeMap::new(),
      attribute_values: BTreeMap::new(),
      id: id.into(),
      widget_type: widget_type.into(),
    }
  }
}
