use super::*;

#[derive(Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub(crate) struct User {
  pub(crate) about: Option<String>,
  #[serde(alias = "created_time")]
  pub(crate) created: u64,
  pub(crate) delay: u64,
  pub(crate) id: String,
  pub(crate) karma: u64,
  pub(crate) submitted: Vec<u64>,
}

impl Display for User {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    writeln!(f, "{} ({} karma)", self.id, self.karma)?;
    writeln!(f, "created {}, delay {} minutes", self.created, self.delay)?;
    write!(f, "{} submissions", self.submitted.len())?;

    if let Some(about) =
      self.about.as_deref().filter(|about| !about.is_empty())
    {
      write!(f, "\n\n{about}")?;
    }

    Ok(())
  }
}
