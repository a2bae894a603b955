use super::*;

/// Which widgets go in which column when the host has `size` columns.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub(crate) struct ColumnLayout {
  columns: Vec<Vec<String>>,
  size: usize,
}

impl ColumnLayout {
  pub(crate) fn add_column(&mut self, widgets: &[&str]) {
    self
      .columns
      .push(widgets.iter().map(|widget| (*widget).to_string()).collect());
  }

  pub(crate) fn new(size: usize) -> Self {
    Self {
      columns: Vec::with_capacity(size),
      size,
    }
  }

  pub(crate) fn size(&self) -> usize {
    self.size
  }

  /// Widget ids in reading order.
  pub(crate) fn widgets(&self) -> impl Iterator<Item = &str> {
    self.columns.iter().flatten().map(String::as_str)
  }
}
