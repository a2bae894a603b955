/// A request against the API root, before it is resolved into a URL.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct Endpoint {
  pub(crate) parameters: Vec<(String, String)>,
  pub(crate) path: Vec<String>,
}

impl Endpoint {
  pub(crate) fn new<'a>(segments: impl IntoIterator<Item = &'a str>) -> Self {
    Self {
      parameters: Vec::new(),
      path: segments.into_iter().map(str::to_string).collect(),
    }
  }

  pub(crate) fn parameter(mut self, key: &str, value: &str) -> Self {
    self.parameters.push((key.into(), value.into()));
    self
  }
}
