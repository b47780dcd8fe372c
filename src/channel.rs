use super::*;

const DESCRIPTION: &str = "HN Items with Comments";
const SITE_URL: &str = "https://news.ycombinator.com/";
const TITLE: &str = "Hacker News RSS Feed";

pub(crate) struct Channel {
  pub(crate) description: String,
  pub(crate) link: String,
  pub(crate) self_link: String,
  pub(crate) title: String,
}

impl Channel {
  pub(crate) fn new(config: &Config) -> Self {
    Self {
      description: DESCRIPTION.into(),
      link: SITE_URL.into(),
      self_link: config.feed_url(),
      title: TITLE.into(),
    }
  }
}
