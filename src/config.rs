use super::*;

/// Where the client talks to and how it introduces itself.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Config {
  pub(crate) api_root: String,
  pub(crate) user_agent: String,
  pub(crate) variant: ApiVariant,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      api_root: DEFAULT_API_ROOT.into(),
      user_agent: DEFAULT_USER_AGENT.into(),
      variant: ApiVariant::default(),
    }
  }
}

#[cfg(test)]
impl Config {
  pub(crate) fn mock(
    server: &mockito::ServerGuard,
    variant: ApiVariant,
  ) -> Self {
    Self {
      api_root: format!("{}/v0/", server.url()),
      user_agent: "hn-scope tests".into(),
      variant,
    }
  }
}
