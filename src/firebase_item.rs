use super::*;

/// An item as served by `hacker-news.firebaseio.com`. Every field is
/// optional upstream, so missing ones fall back to their defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct FirebaseItem {
  pub(crate) by: Option<String>,
  pub(crate) dead: bool,
  pub(crate) deleted: bool,
  pub(crate) id: u64,
  pub(crate) kids: Vec<u64>,
  pub(crate) parent: Option<u64>,
  pub(crate) parts: Vec<u64>,
  pub(crate) score: u64,
  pub(crate) text: Option<String>,
  pub(crate) time: u64,
  pub(crate) title: Option<String>,
  pub(crate) r#type: Option<String>,
  pub(crate) url: Option<String>,
}

impl TryFrom<FirebaseItem> for Item {
  type Error = Error;

  fn try_from(item: FirebaseItem) -> Result<Self> {
    let kind = item.r#type.unwrap_or_default();

    if kind != STORY_TYPE {
      return Err(Error::UnsupportedItemType { id: item.id, kind });
    }

    Ok(Self {
      by: item.by.unwrap_or_default(),
      dead: item.dead,
      deleted: item.deleted,
      descendants: None,
      id: item.id,
      kids: item.kids,
      kind,
      parent: item.parent,
      parts: item.parts,
      score: item.score,
      text: item.text,
      time: item.time,
      title: item.title.unwrap_or_default(),
      url: item.url,
    })
  }
}
