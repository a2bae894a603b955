use super::*;

/// A search the host drives: it calls `run` once and may call `cancelled`
/// from another thread while `run` is in progress.
pub(crate) trait SearchQuery {
  fn cancelled(&self);

  async fn run(&self, reply: &mut dyn SearchReply);
}
