use super::*;

#[derive(Debug, Parser)]
#[command(
  name = "hn-rss",
  version,
  about = "Hacker News stories with their top comments, as an RSS feed"
)]
pub(crate) struct Arguments {
  #[command(subcommand)]
  command: Option<Subcommand>,
  #[command(flatten)]
  config: Config,
  /// Log filter used when RUST_LOG is not set
  #[arg(long, global = true, env = "HN_RSS_LOG_LEVEL", default_value = "info")]
  log_level: String,
}

impl Arguments {
  #[cfg(test)]
  pub(crate) fn config(&self) -> &Config {
    &self.config
  }

  pub(crate) fn init_tracing(&self) {
    let filter = EnvFilter::try_from_default_env()
      .or_else(|_| EnvFilter::try_new(&self.log_level))
      .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
  }

  pub(crate) async fn run(self) -> Result {
    self.config.validate().context("invalid configuration")?;

    self
      .command
      .unwrap_or_default()
      .run(&self.config)
      .await
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn no_subcommand_serves() {
    let arguments = Arguments::try_parse_from(["hn-rss"]).unwrap();

    assert!(matches!(
      arguments.command.unwrap_or_default(),
      Subcommand::Serve
    ));
  }

  #[test]
  fn generate_accepts_custom_window() {
    let arguments = Arguments::try_parse_from([
      "hn-rss", "generate", "--start", "100", "--end", "200",
    ])
    .unwrap();

    match arguments.command {
      Some(Subcommand::Generate { end, start }) => {
        assert_eq!(start, Some(100));
        assert_eq!(end, Some(200));
      }
      other => panic!("unexpected subcommand: {other:?}"),
    }
  }

  #[test]
  fn generate_requires_both_bounds() {
    assert!(
      Arguments::try_parse_from(["hn-rss", "generate", "--start", "100"])
        .is_err()
    );
  }

  #[test]
  fn healthcheck_takes_url() {
    let arguments = Arguments::try_parse_from([
      "hn-rss",
      "healthcheck",
      "--url",
      "http://localhost:9000/feed.xml",
    ])
    .unwrap();

    match arguments.command {
      Some(Subcommand::Healthcheck { url }) => {
        assert_eq!(url.as_deref(), Some("http://localhost:9000/feed.xml"));
      }
      other => panic!("unexpected subcommand: {other:?}"),
    }
  }
}
