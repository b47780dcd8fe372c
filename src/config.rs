use super::*;

const DEFAULT_BRANCH_COUNT: usize = 2;
const DEFAULT_DEPTH_PER_BRANCH: usize = 2;
const DEFAULT_DIST_DIR: &str = "public";
const DEFAULT_HITS_PER_PAGE: usize = 10_000;
const DEFAULT_HOST_URL: &str = "https://example.com";
const DEFAULT_ITEM_ENDPOINT: &str =
  "https://hacker-news.firebaseio.com/v0/item/{id}.json";
const DEFAULT_MIN_POINTS: u64 = 12;
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 30_000;
const DEFAULT_RSS_PATH: &str = "rss_feed.xml";
const DEFAULT_SCHEDULE: &str = "08:30,20:30";
const DEFAULT_SEARCH_ENDPOINT: &str = "https://hn.algolia.com/api/v1/search";
const DEFAULT_THROTTLE_MS: u64 = 500;
const DEFAULT_TIMEZONE: &str = "America/New_York";
const DEFAULT_WINDOW_HOUR: u32 = 10;
const DEFAULT_WINDOW_MINUTE: u32 = 0;

pub(crate) const ITEM_ID_PLACEHOLDER: &str = "{id}";

#[derive(Clone, Debug, clap::Args)]
pub(crate) struct Config {
  /// Number of top-level comment threads sampled per story
  #[arg(long, global = true, env = "HN_RSS_BRANCH_COUNT", default_value_t = DEFAULT_BRANCH_COUNT)]
  pub(crate) branch_count: usize,
  /// How far down each thread's first-reply chain to follow
  #[arg(long, global = true, env = "HN_RSS_DEPTH_PER_BRANCH", default_value_t = DEFAULT_DEPTH_PER_BRANCH)]
  pub(crate) depth_per_branch: usize,
  /// Directory the feed file is written to and served from
  #[arg(long, global = true, env = "HN_RSS_DIST_DIR", default_value = DEFAULT_DIST_DIR)]
  pub(crate) dist_dir: PathBuf,
  #[arg(long, global = true, env = "HN_RSS_HITS_PER_PAGE", default_value_t = DEFAULT_HITS_PER_PAGE)]
  pub(crate) hits_per_page: usize,
  /// Public base URL the feed is reachable under
  #[arg(long, global = true, env = "HN_RSS_HOST_URL", default_value = DEFAULT_HOST_URL)]
  pub(crate) host_url: String,
  /// Item URL template, `{id}` is replaced with the item id
  #[arg(long, global = true, env = "HN_RSS_ITEM_ENDPOINT", default_value = DEFAULT_ITEM_ENDPOINT)]
  pub(crate) item_endpoint: String,
  /// Only stories with more points than this are included
  #[arg(long, global = true, env = "HN_RSS_MIN_POINTS", default_value_t = DEFAULT_MIN_POINTS)]
  pub(crate) min_points: u64,
  #[arg(long, global = true, env = "HN_RSS_PORT", default_value_t = DEFAULT_PORT)]
  pub(crate) port: u16,
  /// Upper bound on a single HTTP request, in milliseconds
  #[arg(long, global = true, env = "HN_RSS_REQUEST_TIMEOUT_MS", default_value_t = DEFAULT_REQUEST_TIMEOUT_MS)]
  pub(crate) request_timeout_ms: u64,
  /// File name of the feed, also the path it is served at
  #[arg(long, global = true, env = "HN_RSS_PATH", default_value = DEFAULT_RSS_PATH)]
  pub(crate) rss_path: String,
  /// Comma separated HH:MM times at which the feed is regenerated
  #[arg(
    long,
    global = true,
    env = "HN_RSS_SCHEDULE",
    default_value = DEFAULT_SCHEDULE,
    value_delimiter = ',',
    value_parser = parse_run_time
  )]
  pub(crate) schedule: Vec<NaiveTime>,
  #[arg(long, global = true, env = "HN_RSS_SEARCH_ENDPOINT", default_value = DEFAULT_SEARCH_ENDPOINT)]
  pub(crate) search_endpoint: String,
  /// Delay before every item request, in milliseconds
  #[arg(long, global = true, env = "HN_RSS_THROTTLE_MS", default_value_t = DEFAULT_THROTTLE_MS)]
  pub(crate) throttle_ms: u64,
  /// Time zone the search window and the schedule are computed in
  #[arg(
    long,
    global = true,
    env = "HN_RSS_TIMEZONE",
    default_value = DEFAULT_TIMEZONE,
    value_parser = parse_timezone
  )]
  pub(crate) timezone: Tz,
  /// Hour the twelve hour search windows are anchored on (0-11)
  #[arg(long, global = true, env = "HN_RSS_WINDOW_HOUR", default_value_t = DEFAULT_WINDOW_HOUR)]
  pub(crate) window_hour: u32,
  #[arg(long, global = true, env = "HN_RSS_WINDOW_MINUTE", default_value_t = DEFAULT_WINDOW_MINUTE)]
  pub(crate) window_minute: u32,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      branch_count: DEFAULT_BRANCH_COUNT,
      depth_per_branch: DEFAULT_DEPTH_PER_BRANCH,
      dist_dir: PathBuf::from(DEFAULT_DIST_DIR),
      hits_per_page: DEFAULT_HITS_PER_PAGE,
      host_url: DEFAULT_HOST_URL.into(),
      item_endpoint: DEFAULT_ITEM_ENDPOINT.into(),
      min_points: DEFAULT_MIN_POINTS,
      port: DEFAULT_PORT,
      request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
      rss_path: DEFAULT_RSS_PATH.into(),
      schedule: DEFAULT_SCHEDULE
        .split(',')
        .filter_map(|time| parse_run_time(time).ok())
        .collect(),
      search_endpoint: DEFAULT_SEARCH_ENDPOINT.into(),
      throttle_ms: DEFAULT_THROTTLE_MS,
      timezone: chrono_tz::America::New_York,
      window_hour: DEFAULT_WINDOW_HOUR,
      window_minute: DEFAULT_WINDOW_MINUTE,
    }
  }
}

impl Config {
  pub(crate) fn feed_path(&self) -> PathBuf {
    self.dist_dir.join(&self.rss_path)
  }

  pub(crate) fn feed_url(&self) -> String {
    format!("{}/{}", self.host_url.trim_end_matches('/'), self.rss_path)
  }

  pub(crate) fn local_feed_url(&self) -> String {
    format!("http://127.0.0.1:{}/{}", self.port, self.rss_path)
  }

  pub(crate) fn request_timeout(&self) -> Duration {
    Duration::from_millis(self.request_timeout_ms)
  }

  pub(crate) fn throttle(&self) -> Duration {
    Duration::from_millis(self.throttle_ms)
  }

  pub(crate) fn validate(&self) -> Result {
    ensure!(self.branch_count > 0, "branch count must be at least 1");

    ensure!(
      self.depth_per_branch > 0,
      "depth per branch must be at least 1"
    );

    ensure!(
      self.item_endpoint.contains(ITEM_ID_PLACEHOLDER),
      "item endpoint `{}` does not contain `{ITEM_ID_PLACEHOLDER}`",
      self.item_endpoint
    );

    ensure!(
      !self.rss_path.is_empty() && !self.rss_path.contains('/'),
      "feed path `{}` must be a plain file name",
      self.rss_path
    );

    ensure!(
      self.window_hour < 12,
      "window hour must be between 0 and 11, got {}",
      self.window_hour
    );

    ensure!(
      self.window_minute < 60,
      "window minute must be between 0 and 59, got {}",
      self.window_minute
    );

    ensure!(!self.schedule.is_empty(), "schedule has no run times");

    ensure!(
      self.request_timeout_ms > 0,
      "request timeout must be at least 1 millisecond"
    );

    Ok(())
  }
}

fn parse_run_time(value: &str) -> Result<NaiveTime, String> {
  NaiveTime::parse_from_str(value.trim(), "%H:%M")
    .map_err(|error| format!("invalid run time `{value}`: {error}"))
}

fn parse_timezone(value: &str) -> Result<Tz, String> {
  value
    .trim()
    .parse::<Tz>()
    .map_err(|error| format!("unknown time zone `{value}`: {error}"))
}
