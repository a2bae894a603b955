use super::*;

/// A denormalized story from the `/news` style API.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct NewsItem {
  pub(crate) comments_count: Option<u64>,
  pub(crate) content: Option<String>,
  pub(crate) dead: bool,
  pub(crate) deleted: bool,
  pub(crate) id: u64,
  pub(crate) points: Option<u64>,
  pub(crate) time: u64,
  pub(crate) title: Option<String>,
  pub(crate) r#type: Option<String>,
  pub(crate) url: Option<String>,
  pub(crate) user: Option<String>,
}

impl NewsItem {
  const STORY_KINDS: [&str; 2] = ["ask", "link"];
}

impl TryFrom<NewsItem> for Item {
  type Error = Error;

  fn try_from(item: NewsItem) -> Result<Self> {
    match item.r#type {
      Some(kind) if !NewsItem::STORY_KINDS.contains(&kind.as_str()) => {
        return Err(Error::UnsupportedItemType { id: item.id, kind });
      }
      _ => {}
    }

    // Text posts link back to themselves with a relative `item?id=` URL.
    let url = item.url.filter(|url| !url.starts_with("item?id="));

    Ok(Self {
      by: item.user.unwrap_or_default(),
      dead: item.dead,
      deleted: item.deleted,
      descendants: item.comments_count,
      id: item.id,
      kids: Vec::new(),
      kind: STORY_TYPE.into(),
      parent: None,
      parts: Vec::new(),
      score: item.points.unwrap_or_default(),
      text: item.content,
      time: item.time,
      title: item.title.unwrap_or_default(),
      url,
    })
  }
}
