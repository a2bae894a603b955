use super::*;

/// Prints search results to a terminal-like writer, numbering them so a
/// preview can be picked afterwards.
pub(crate) struct SearchConsole<W: Write> {
  error: Option<Error>,
  json: bool,
  limit: Option<usize>,
  output: W,
  results: Vec<CategorisedResult>,
}

impl<W: Write> SearchConsole<W> {
  /// The accepted results, or the error the query reported.
  pub(crate) fn finish(self) -> Result<Vec<CategorisedResult>> {
    match self.error {
      Some(error) => Err(error),
      None => Ok(self.results),
    }
  }

  pub(crate) fn new(output: W, json: bool, limit: Option<usize>) -> Self {
    Self {
      error: None,
      json,
      limit,
      output,
      results: Vec::new(),
    }
  }

  fn write_result(&mut self, result: &CategorisedResult) -> io::Result<()> {
    if self.json {
      serde_json::to_writer(&mut self.output, result)?;
      return writeln!(self.output);
    }

    writeln!(
      self.output,
      "{:>2}. {}",
      self.results.len() + 1,
      truncate(&result.title, TITLE_WIDTH)
    )?;

    if let Some(author) = result.attribute("author") {
      writeln!(self.output, "    {author}")?;
    }

    writeln!(self.output, "    {}", result.uri)
  }
}

impl<W: Write> SearchReply for SearchConsole<W> {
  fn error(&mut self, error: Error) {
    self.error = Some(error);
  }

  fn push(&mut self, result: CategorisedResult) -> bool {
    if self.limit.is_some_and(|limit| self.results.len() >= limit) {
      return false;
    }

    if let Err(error) = self.write_result(&result) {
      warn!(%error, "could not write result");
      return false;
    }

    self.results.push(result);

    self.limit.is_none_or(|limit| self.results.len() < limit)
  }

  fn register_category(&mut self, category: &Category) {
    debug!(id = %category.id, title = %category.title, "registered category");

    if self.json {
      return;
    }

    if let Err(error) = writeln!(self.output, "{}\n", category.title) {
      warn!(%error, "could not write category");
    }
  }
}
