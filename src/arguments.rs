use super::*;

/// Run the Hacker News scope against a console host
#[derive(Debug, Parser)]
#[command(name = "hn-scope", version, about, long_about = None)]
pub(crate) struct Arguments {
  /// Root of all API request URLs
  #[arg(long, env = "HN_SCOPE_API_ROOT", default_value = DEFAULT_API_ROOT)]
  pub(crate) api_root: String,

  /// Print results and widgets as JSON lines
  #[arg(long)]
  pub(crate) json: bool,

  /// Stop accepting results after this many
  #[arg(short, long)]
  pub(crate) limit: Option<usize>,

  /// Open the URI of this preview action (`comments` or `open`)
  #[arg(long, requires = "preview")]
  pub(crate) open: Option<String>,

  /// Preview the result at this position, starting from 1
  #[arg(short, long)]
  pub(crate) preview: Option<usize>,

  /// Search terms
  pub(crate) query: Vec<String>,

  /// User agent sent with every request
  #[arg(long, env = "HN_SCOPE_USER_AGENT", default_value = DEFAULT_USER_AGENT)]
  pub(crate) user_agent: String,

  /// Show this user's profile instead of searching
  #[arg(long, conflicts_with_all = ["limit", "preview"])]
  pub(crate) user: Option<String>,

  /// Shape of the remote API (`firebase` or `news`)
  #[arg(long, env = "HN_SCOPE_VARIANT", default_value_t)]
  pub(crate) variant: ApiVariant,

  /// Enable verbose logging
  #[arg(short, long)]
  pub(crate) verbose: bool,
}

impl Arguments {
  pub(crate) fn config(&self) -> Config {
    Config {
      api_root: self.api_root.clone(),
      user_agent: self.user_agent.clone(),
      variant: self.variant,
    }
  }

  pub(crate) fn query(&self) -> CannedQuery {
    CannedQuery::new(self.query.join(" "))
  }
}
