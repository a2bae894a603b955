use {
  action::Action,
  anyhow::Context,
  api::Api,
  api_variant::ApiVariant,
  arguments::Arguments,
  cancellation::Cancellation,
  canned_query::CannedQuery,
  categorised_result::CategorisedResult,
  category::Category,
  clap::Parser,
  client::Client,
  column_layout::ColumnLayout,
  config::Config,
  crossterm::style::Stylize,
  endpoint::Endpoint,
  error::Error,
  firebase::Firebase,
  firebase_item::FirebaseItem,
  futures::stream::{self, StreamExt},
  item::Item,
  listing::Listing,
  news::News,
  news_item::NewsItem,
  preview::Preview,
  preview_console::PreviewConsole,
  preview_query::PreviewQuery,
  preview_reply::PreviewReply,
  preview_widget::PreviewWidget,
  query::Query,
  reqwest::{StatusCode, Url},
  scope::Scope,
  search_console::SearchConsole,
  search_query::SearchQuery,
  search_reply::SearchReply,
  serde::{Deserialize, Serialize},
  serde_json::{Value, json},
  std::{
    backtrace::BacktraceStatus,
    collections::BTreeMap,
    fmt::{self, Display, Formatter},
    io::{self, IsTerminal, Write},
    process,
    str::FromStr,
    sync::{
      Arc,
      atomic::{AtomicBool, Ordering},
    },
  },
  tokio::{signal, sync::Notify},
  tracing::{debug, info, warn},
  tracing_subscriber::{EnvFilter, fmt as log_format, prelude::*},
  user::User,
  utils::truncate,
};

mod action;
mod api;
mod api_variant;
mod arguments;
mod cancellation;
mod canned_query;
mod categorised_result;
mod category;
mod client;
mod column_layout;
mod config;
mod endpoint;
mod error;
mod firebase;
mod firebase_item;
mod item;
mod listing;
mod news;
mod news_item;
mod preview;
mod preview_console;
mod preview_query;
mod preview_reply;
mod preview_widget;
mod query;
mod scope;
mod search_console;
mod search_query;
mod search_reply;
mod user;
mod utils;

const DEFAULT_API_ROOT: &str = "https://hacker-news.firebaseio.com/v0/";

const DEFAULT_USER_AGENT: &str = "hackernews-scope 0.1; (foo)";

const HN_ITEM_URL: &str = "https://news.ycombinator.com/item?id=";

const ITEM_FETCH_CONCURRENCY: usize = 8;

const STORY_TYPE: &str = "story";

const TITLE_WIDTH: usize = 100;

const TOP_STORIES_LIMIT: usize = 20;

type Result<T = (), E = Error> = std::result::Result<T, E>;

fn initialize_logging(verbose: bool) {
  let filter = if verbose {
    EnvFilter::new("debug")
  } else {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
  };

  tracing_subscriber::registry()
    .with(log_format::layer().with_target(false).with_writer(io::stderr))
    .with(filter)
    .init();
}

async fn run() -> anyhow::Result<()> {
  let arguments = Arguments::parse();

  initialize_logging(arguments.verbose);

  if let Some(id) = &arguments.user {
    let user = Client::new(Arc::new(arguments.config()))
      .context("could not create client")?
      .get_user(id)
      .await
      .with_context(|| format!("could not load user `{id}`"))?;

    let mut stdout = io::stdout();

    if arguments.json {
      serde_json::to_writer(&mut stdout, &user)?;
      writeln!(stdout)?;
    } else {
      writeln!(stdout, "{user}")?;
    }

    return Ok(());
  }

  let scope = Scope::new(arguments.config());

  let query = Arc::new(
    scope
      .search(arguments.query())
      .context("could not create search query")?,
  );

  let interrupt = {
    let query = Arc::clone(&query);

    tokio::spawn(async move {
      if signal::ctrl_c().await.is_ok() {
        info!("interrupted, cancelling query");
        query.cancelled();
      }
    })
  };

  let mut console =
    SearchConsole::new(io::stdout(), arguments.json, arguments.limit);

  query.run(&mut console).await;

  interrupt.abort();

  let results = console.finish().context("search failed")?;

  let Some(position) = arguments.preview else {
    return Ok(());
  };

  let result = position
    .checked_sub(1)
    .and_then(|index| results.get(index))
    .cloned()
    .with_context(|| format!("no result at position {position}"))?;

  let preview = scope.preview(result.clone());

  let mut console = PreviewConsole::new(io::stdout(), arguments.json, result);

  preview.run(&mut console);

  let widgets = console.finish().context("could not render preview")?;

  if let Some(id) = &arguments.open {
    let action = widgets
      .iter()
      .flat_map(PreviewWidget::actions)
      .find(|action| action.id == *id)
      .with_context(|| format!("preview has no `{id}` action"))?;

    webbrowser::open(&action.uri)
      .with_context(|| format!("could not open {}", action.uri))?;
  }

  Ok(())
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
