use {
  anyhow::{Context, bail, ensure},
  arguments::Arguments,
  axum::{
    Router,
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
  },
  channel::Channel,
  chrono::{DateTime, NaiveDate, NaiveTime, TimeDelta, Timelike, Utc},
  chrono_tz::Tz,
  clap::Parser,
  comments::Comments,
  config::Config,
  crossterm::style::Stylize,
  enriched_story::EnrichedStory,
  enricher::Enricher,
  feed_item::FeedItem,
  fetcher::{Fetcher, ItemSource},
  item::Item,
  lookup::Lookup,
  search_hit::SearchHit,
  search_response::SearchResponse,
  serde::{Deserialize, Serialize, Serializer, ser::SerializeMap},
  serde_json::{Map, Value},
  slot::Slot,
  std::{
    backtrace::BacktraceStatus,
    collections::BTreeMap,
    fmt::{self, Display, Formatter},
    io::{self, IsTerminal},
    path::{Path, PathBuf},
    process,
    str::FromStr,
    sync::Arc,
    time::Duration,
  },
  subcommand::Subcommand,
  tokio::net::TcpListener,
  tracing::{debug, error, info, warn},
  tracing_subscriber::EnvFilter,
  transport::Transport,
  utils::{format_comments, format_points, strip_control_chars, truncate},
  walker::Walker,
  window::Window,
};

mod arguments;
mod channel;
mod comments;
mod config;
mod enriched_story;
mod enricher;
mod feed;
mod feed_item;
mod fetcher;
mod healthcheck;
mod item;
mod lookup;
mod pipeline;
mod render;
mod schedule;
mod search;
mod search_hit;
mod search_response;
mod server;
mod slot;
mod subcommand;
mod transport;
mod utils;
mod walker;
mod window;

const HN_ITEM_URL: &str = "https://news.ycombinator.com/item?id=";

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

async fn run() -> Result {
  let arguments = Arguments::parse();

  arguments.init_tracing();

  arguments.run().await
}

#[tokio::main]
async fn main() {
  if let Err(error) = run().await {
    let use_color = io::stderr().is_terminal();

    if use_color {
      eprintln!("{} {error}", "error:".bold().red());
    } else {
      eprintln!("error: {error}");
    }

    for (i, error) in error.chain().skip(1).enumerate() {
      if i == 0 {
        eprintln!();

        if use_color {
          eprintln!("{}", "because:".bold().red());
        } else {
          eprintln!("because:");
        }
      }

      if use_color {
        eprintln!("{} {error}", "-".bold().red());
      } else {
        eprintln!("- {error}");
      }
    }

    let backtrace = error.backtrace();

    if backtrace.status() == BacktraceStatus::Captured {
      if use_color {
        eprintln!("{}", "backtrace:".bold().red());
      } else {
        eprintln!("backtrace:");
      }

      eprintln!("{backtrace}");
    }

    process::exit(1);
  }
}
