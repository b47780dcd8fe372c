use {
  super::*,
  html_escape::{encode_double_quoted_attribute, encode_text},
  std::fmt::Write,
};

/// Highest scoring stories first; ties keep search order.
pub(crate) fn prepare(
  mut stories: Vec<EnrichedStory>,
  now: DateTime<Utc>,
) -> Result<Vec<FeedItem>> {
  stories.sort_by(|a, b| b.story.points.cmp(&a.story.points));

  stories
    .iter()
    .map(|story| FeedItem::new(story, now))
    .collect()
}

/// HTML body of a feed item: story link and stats, the story text if any,
/// then each sampled branch as nested quotes.
pub(crate) fn describe(story: &EnrichedStory) -> Result<String> {
  let hit = &story.story;

  let mut html = String::new();

  if let Some(url) = hit.url.as_deref().filter(|url| !url.is_empty()) {
    write!(
      html,
      r#"<p><a href="{}">{}</a></p>"#,
      encode_double_quoted_attribute(url),
      encode_text(&site(url)),
    )?;
  }

  write!(
    html,
    r#"<p>{} by {} | <a href="{}">{}</a></p>"#,
    format_points(hit.points),
    encode_text(&hit.author),
    encode_double_quoted_attribute(&hit.discussion_url()),
    format_comments(hit.num_comments.unwrap_or_default()),
  )?;

  if let Some(text) = hit.story_text.as_deref().filter(|text| !text.is_empty())
  {
    write!(html, "<div>{text}</div>")?;
  }

  for branch in story.comments.branches() {
    html.push_str("<hr/>");

    for item in &branch {
      write!(
        html,
        r#"<blockquote><p><b><a href="{}">{}</a></b></p>{}"#,
        encode_double_quoted_attribute(&item.permalink()),
        encode_text(&item.header()),
        item.text.as_deref().unwrap_or_default(),
      )?;
    }

    html.push_str(&"</blockquote>".repeat(branch.len()));
  }

  Ok(html.replace(['\n', '\t'], ""))
}

fn site(url: &str) -> String {
  reqwest::Url::parse(url)
    .ok()
    .and_then(|url| {
      url
        .host_str()
        .map(|host| host.trim_start_matches("www.").to_string())
    })
    .unwrap_or_else(|| url.to_string())
}

#[cfg(test)]
mod tests {
  use super::*;

  fn comment(id: u64, by: &str, text: &str, kids: &[u64]) -> Item {
    let mut item = Item::new(id, kids);
    item.by = Some(by.into());
    item.text = Some(text.into());
    item
  }

  fn sample_story() -> EnrichedStory {
    let mut hit = SearchHit::new("1", 42, "Example");
    hit.author = "alice".into();
    hit.num_comments = Some(3);
    hit.url = Some("https://www.example.com/post?a=1&b=2".into());

    let mut comments = Comments::default();
    comments.insert(Slot::new(1, 1), comment(11, "bob", "<p>first</p>", &[12]));
    comments.insert(Slot::new(1, 2), comment(12, "carol", "reply\n\tnested", &[]));
    comments.insert(Slot::new(2, 1), comment(21, "dave", "second", &[]));

    EnrichedStory::new(hit, comments)
  }

  #[test]
  fn describes_story_and_comment_chains() {
    let html = describe(&sample_story()).unwrap();

    assert_eq!(
      html,
      concat!(
        "<p><a href=\"https://www.example.com/post?a=1&amp;b=2\">example.com</a></p>",
        "<p>42 points by alice | <a href=\"https://news.ycombinator.com/item?id=1\">3 comments</a></p>",
        "<hr/>",
        "<blockquote><p><b><a href=\"https://news.ycombinator.com/item?id=11\">bob</a></b></p><p>first</p>",
        "<blockquote><p><b><a href=\"https://news.ycombinator.com/item?id=12\">carol</a></b></p>replynested",
        "</blockquote></blockquote>",
        "<hr/>",
        "<blockquote><p><b><a href=\"https://news.ycombinator.com/item?id=21\">dave</a></b></p>second",
        "</blockquote>",
      )
    );
  }

  #[test]
  fn describes_story_without_comments_or_url() {
    let mut hit = SearchHit::new("7", 1, "Ask HN: <anything>?");
    hit.author = "<erin>".into();
    hit.num_comments = None;
    hit.story_text = Some("<p>Question</p>".into());

    let html = describe(&EnrichedStory::new(hit, Comments::default())).unwrap();

    assert_eq!(
      html,
      "<p>1 point by &lt;erin&gt; | <a href=\"https://news.ycombinator.com/item?id=7\">0 comments</a></p><div><p>Question</p></div>"
    );
  }

  #[test]
  fn marks_deleted_comments() {
    let mut deleted = Item::new(11, &[]);
    deleted.deleted = Some(true);

    let mut comments = Comments::default();
    comments.insert(Slot::new(1, 1), deleted);

    let html =
      describe(&EnrichedStory::new(SearchHit::new("1", 5, "t"), comments))
        .unwrap();

    assert!(html.contains(">unknown (deleted)</a>"), "{html}");
  }

  #[test]
  fn prepare_orders_by_points_keeping_ties_stable() {
    let now = Utc::now();

    let stories = [("a", 10), ("b", 30), ("c", 10), ("d", 20)]
      .into_iter()
      .map(|(id, points)| {
        EnrichedStory::new(SearchHit::new(id, points, id), Comments::default())
      })
      .collect();

    let guids = prepare(stories, now)
      .unwrap()
      .into_iter()
      .map(|item| item.guid)
      .collect::<Vec<_>>();

    assert_eq!(guids, ["b", "d", "a", "c"]);
  }

  #[test]
  fn site_falls_back_to_raw_url() {
    assert_eq!(site("https://www.example.com/x"), "example.com");
    assert_eq!(site("https://sub.example.org"), "sub.example.org");
    assert_eq!(site("not a url"), "not a url");
  }
}
