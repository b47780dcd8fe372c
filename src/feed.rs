use {
  super::*,
  quick_xml::{
    Writer,
    events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event},
  },
};

const ATOM_NAMESPACE: &str = "http://www.w3.org/2005/Atom";
const GENERATOR: &str = concat!("hn-rss ", env!("CARGO_PKG_VERSION"));

pub(crate) fn to_xml(
  channel: &Channel,
  items: &[FeedItem],
  built: DateTime<Utc>,
) -> Result<String> {
  let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

  writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

  let mut rss = BytesStart::new("rss");
  rss.push_attribute(("version", "2.0"));
  rss.push_attribute(("xmlns:atom", ATOM_NAMESPACE));
  writer.write_event(Event::Start(rss))?;

  writer.write_event(Event::Start(BytesStart::new("channel")))?;

  write_text_element(&mut writer, "title", &channel.title)?;
  write_text_element(&mut writer, "description", &channel.description)?;
  write_text_element(&mut writer, "link", &channel.link)?;
  write_text_element(&mut writer, "generator", GENERATOR)?;
  write_text_element(&mut writer, "lastBuildDate", &built.to_rfc2822())?;

  let mut self_link = BytesStart::new("atom:link");
  self_link.push_attribute(("href", channel.self_link.as_str()));
  self_link.push_attribute(("rel", "self"));
  self_link.push_attribute(("type", "application/rss+xml"));
  writer.write_event(Event::Empty(self_link))?;

  for item in items {
    writer.write_event(Event::Start(BytesStart::new("item")))?;

    write_text_element(&mut writer, "title", &item.title)?;
    write_text_element(&mut writer, "description", &item.description)?;
    write_text_element(&mut writer, "link", &item.link)?;

    let mut guid = BytesStart::new("guid");
    guid.push_attribute(("isPermaLink", "false"));
    writer.write_event(Event::Start(guid))?;
    writer.write_event(Event::Text(BytesText::new(&item.guid)))?;
    writer.write_event(Event::End(BytesEnd::new("guid")))?;

    write_text_element(&mut writer, "pubDate", &item.date)?;

    writer.write_event(Event::End(BytesEnd::new("item")))?;
  }

  writer.write_event(Event::End(BytesEnd::new("channel")))?;
  writer.write_event(Event::End(BytesEnd::new("rss")))?;

  String::from_utf8(writer.into_inner()).context("feed is not valid UTF-8")
}

/// Replaces the file at `path` in one step, so readers never see a partial
/// feed.
pub(crate) async fn write(path: &Path, xml: &str) -> Result {
  if let Some(parent) = path.parent() {
    tokio::fs::create_dir_all(parent).await.with_context(|| {
      format!("failed to create directory {}", parent.display())
    })?;
  }

  let file_name = path
    .file_name()
    .with_context(|| format!("{} has no file name", path.display()))?;

  let temporary =
    path.with_file_name(format!(".{}.tmp", file_name.to_string_lossy()));

  tokio::fs::write(&temporary, xml)
    .await
    .with_context(|| format!("failed to write {}", temporary.display()))?;

  tokio::fs::rename(&temporary, path).await.with_context(|| {
    format!("failed to move feed into place at {}", path.display())
  })?;

  debug!(path = %path.display(), preview = %truncate(xml, 200), "wrote feed file");

  Ok(())
}

/// Writes an item-less feed so the server has something to serve before the
/// first scheduled run. Returns whether a file was written.
pub(crate) async fn write_placeholder_if_missing(config: &Config) -> Result<bool> {
  let path = config.feed_path();

  if tokio::fs::try_exists(&path)
    .await
    .with_context(|| format!("failed to check for {}", path.display()))?
  {
    return Ok(false);
  }

  let xml = to_xml(&Channel::new(config), &[], Utc::now())?;

  write(&path, &xml).await?;

  Ok(true)
}

fn write_text_element<W: io::Write>(
  writer: &mut Writer<W>,
  name: &str,
  text: &str,
) -> Result {
  writer.write_event(Event::Start(BytesStart::new(name)))?;
  writer.write_event(Event::Text(BytesText::new(&strip_control_chars(text))))?;
  writer.write_event(Event::End(BytesEnd::new(name)))?;
  Ok(())
}
