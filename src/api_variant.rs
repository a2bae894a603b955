use super::*;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) enum ApiVariant {
  #[default]
  Firebase,
  News,
}

impl ApiVariant {
  pub(crate) fn api(self) -> Box<dyn Api> {
    match self {
      Self::Firebase => Box::new(Firebase),
      Self::News => Box::new(News),
    }
  }
}

impl Display for ApiVariant {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    f.write_str(match self {
      Self::Firebase => "firebase",
      Self::News => "news",
    })
  }
}

impl FromStr for ApiVariant {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_ascii_lowercase().as_str() {
      "firebase" => Ok(Self::Firebase),
      "news" => Ok(Self::News),
      _ => Err(format!(
        "unknown API variant `{s}`, expected `firebase` or `news`"
      )),
    }
  }
}
