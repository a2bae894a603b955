use super::*;

/// The host's side of a running preview.
pub(crate) trait PreviewReply {
  /// Returns `false` if the host dropped the widgets.
  fn push(&mut self, widgets: Vec<PreviewWidget>) -> bool;

  fn register_layout(&mut self, layouts: &[ColumnLayout]);
}
