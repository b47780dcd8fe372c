use super::*;

#[derive(Clone, Debug, Default, clap::Subcommand)]
pub(crate) enum Subcommand {
  /// Build the feed once and exit
  Generate {
    /// Unix timestamp the search window ends at
    #[arg(long, short, requires = "start")]
    end: Option<i64>,
    /// Unix timestamp the search window starts at
    #[arg(long, short, requires = "end")]
    start: Option<i64>,
  },
  /// Check that a running server is serving the feed
  Healthcheck {
    /// Feed URL to probe, defaults to the local server
    #[arg(long)]
    url: Option<String>,
  },
  /// Serve the feed and regenerate it on schedule
  #[default]
  Serve,
}

impl Subcommand {
  async fn generate(
    config: &Config,
    start: Option<i64>,
    end: Option<i64>,
  ) -> Result {
    let window = match (start, end) {
      (Some(start), Some(end)) => {
        info!(start, end, "creating feed for custom window");
        Window::new(start, end)?
      }
      _ => Window::trailing(config)?,
    };

    let client = transport::client(config)?;

    pipeline::run(config, &client, window).await?;

    Ok(())
  }

  async fn healthcheck(config: &Config, url: Option<String>) -> Result {
    let url = url.unwrap_or_else(|| config.local_feed_url());

    healthcheck::check(&transport::client(config)?, &url).await
  }

  pub(crate) async fn run(self, config: &Config) -> Result {
    match self {
      Self::Generate { end, start } => {
        Self::generate(config, start, end).await
      }
      Self::Healthcheck { url } => Self::healthcheck(config, url).await,
      Self::Serve => Self::serve(config).await,
    }
  }

  async fn serve(config: &Config) -> Result {
    if feed::write_placeholder_if_missing(config).await? {
      info!(path = %config.feed_path().display(), "created placeholder feed");
    }

    let listener = TcpListener::bind(("0.0.0.0", config.port))
      .await
      .with_context(|| format!("failed to bind port {}", config.port))?;

    info!(port = config.port, path = %config.rss_path, "server is running");

    let client = transport::client(config)?;

    futures::future::try_join(
      server::serve(listener, config),
      schedule::run(config, &client),
    )
    .await?;

    Ok(())
  }
}
