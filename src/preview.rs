use super::*;

/// Static preview of a result: its header and two buttons. Everything it
/// shows is already on the result, so it never touches the network.
pub(crate) struct Preview {
  result: CategorisedResult,
}

impl Preview {
  pub(crate) fn new(result: CategorisedResult) -> Self {
    Self { result }
  }
}

impl PreviewQuery for Preview {
  fn cancelled(&self) {}

  fn run(&self, reply: &mut dyn PreviewReply) {
    let mut layout = ColumnLayout::new(1);
    layout.add_column(&["header", "actions"]);

    reply.register_layout(&[layout]);

    let mut header = PreviewWidget::new("header", "header");
    header.add_attribute_mapping("title", "title");
    header.add_attribute_mapping("subtitle", "author");

    let mut actions = PreviewWidget::new("actions", "actions");

    let buttons = [
      Action {
        id: "comments".into(),
        label: "Comments".into(),
        uri: self.result.attribute("comments").unwrap_or_default().into(),
      },
      Action {
        id: "open".into(),
        label: "Open".into(),
        uri: self.result.uri.clone(),
      },
    ];

    match serde_json::to_value(buttons) {
      Ok(value) => actions.add_attribute_value("actions", value),
      Err(error) => warn!(%error, "could not encode preview actions"),
    }

    if !reply.push(vec![header, actions]) {
      debug!("host dropped preview widgets");
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[derive(Default)]
  struct RecordingReply {
    layouts: Vec<ColumnLayout>,
    widgets: Vec<PreviewWidget>,
  }

  impl PreviewReply for RecordingReply {
    fn push(&mut self, widgets: Vec<PreviewWidget>) -> bool {
      self.widgets.extend(widgets);
      true
    }

    fn register_layout(&mut self, layouts: &[ColumnLayout]) {
      self.layouts.extend_from_slice(layouts);
    }
  }

  fn result() -> CategorisedResult {
    let mut result = CategorisedResult {
      category: "stories".into(),
      title: "Show HN: Thing".into(),
      uri: "https://example.com/thing".into(),
      ..CategorisedResult::default()
    };

    result.set("author", "12 points by alice | 4 comments");
    result.set("comments", "https://news.ycombinator.com/item?id=99");

    result
  }

  fn run() -> RecordingReply {
    let mut reply = RecordingReply::default();
    Preview::new(result()).run(&mut reply);
    reply
  }

  #[test]
  fn registers_single_column_layout() {
    let reply = run();

    assert_eq!(reply.layouts.len(), 1);
    assert_eq!(reply.layouts[0].size(), 1);
    assert_eq!(
      reply.layouts[0].widgets().collect::<Vec<_>>(),
      vec!["header", "actions"]
    );
  }

  #[test]
  fn header_maps_title_and_author() {
    let reply = run();

    let header = &reply.widgets[0];

    assert_eq!(header.id, "header");
    assert_eq!(header.widget_type, "header");
    assert_eq!(header.attribute_mappings["title"], "title");
    assert_eq!(header.attribute_mappings["subtitle"], "author");
  }

  #[test]
  fn actions_point_at_comments_and_story() {
    let reply = run();

    assert_eq!(
      reply.widgets[1].actions(),
      vec![
        Action {
          id: "comments".into(),
          label: "Comments".into(),
          uri: "https://news.ycombinator.com/item?id=99".into(),
        },
        Action {
          id: "open".into(),
          label: "Open".into(),
          uri: "https://example.com/thing".into(),
        },
      ]
    );
  }

  #[test]
  fn cancelling_does_not_change_widgets() {
    let preview = Preview::new(result());

    preview.cancelled();

    let mut reply = RecordingReply::default();
    preview.run(&mut reply);

    assert_eq!(reply.widgets, run().widgets);
  }

  #[test]
  fn header_has_no_actions() {
    assert!(run().widgets[0].actions().is_empty());
  }
}
