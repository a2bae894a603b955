use super::*;

pub(crate) trait PreviewQuery {
  fn cancelled(&self);

  fn run(&self, reply: &mut dyn PreviewReply);
}
