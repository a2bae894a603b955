use super::*;

/// Prints preview widgets for one result, resolving attribute mappings
/// against it and laying widgets out in the single-column order the preview
/// asked for.
pub(crate) struct PreviewConsole<W: Write> {
  json: bool,
  layout: Option<ColumnLayout>,
  output: W,
  result: CategorisedResult,
  widgets: Vec<PreviewWidget>,
}

impl<W: Write> PreviewConsole<W> {
  pub(crate) fn finish(self) -> io::Result<Vec<PreviewWidget>> {
    let mut output = self.output;
    output.flush()?;
    Ok(self.widgets)
  }

  pub(crate) fn new(output: W, json: bool, result: CategorisedResult) -> Self {
    Self {
      json,
      layout: None,
      output,
      result,
      widgets: Vec::new(),
    }
  }

  fn ordered<'a>(
    &self,
    widgets: &'a [PreviewWidget],
  ) -> Vec<&'a PreviewWidget> {
    let Some(layout) = &self.layout else {
      return widgets.iter().collect();
    };

    layout
      .widgets()
      .filter_map(|id| widgets.iter().find(|widget| widget.id == id))
      .collect()
  }

  fn write_widget(&mut self, widget: &PreviewWidget) -> io::Result<()> {
    if self.json {
      let mut resolved = widget.attribute_values.clone();

      for (key, field) in &widget.attribute_mappings {
        if let Some(value) = self.result.value(field) {
          resolved.insert(key.clone(), value);
        }
      }

      serde_json::to_writer(
        &mut self.output,
        &json!({
          "attributes": resolved,
          "id": widget.id,
          "type": widget.widget_type
        }),
      )?;

      return writeln!(self.output);
    }

    for (key, field) in &widget.attribute_mappings {
      if let Some(Value::String(value)) = self.result.value(field) {
        writeln!(self.output, "{key}: {value}")?;
      }
    }

    for action in widget.actions() {
      writeln!(self.output, "[{}] {} {}", action.id, action.label, action.uri)?;
    }

    Ok(())
  }
}

impl<W: Write> PreviewReply for PreviewConsole<W> {
  fn push(&mut self, widgets: Vec<PreviewWidget>) -> bool {
    let ordered = self
      .ordered(&widgets)
      .into_iter()
      .cloned()
      .collect::<Vec<_>>();

    for widget in &ordered {
      if let Err(error) = self.write_widget(widget) {
        warn!(%error, "could not write preview");
        return false;
      }
    }

    self.widgets.extend(ordered);

    true
  }

  fn register_layout(&mut self, layouts: &[ColumnLayout]) {
    self.layout = layouts.iter().find(|layout| layout.size() == 1).cloned();

    if self.layout.is_none() {
      debug!(
        count = layouts.len(),
        "no single-column layout, using push order"
      );
    }
  }
}
