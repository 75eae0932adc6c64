//! Quote Display — a terminal front end that fetches quotes from an
//! asynchronous source and shows them with the placeholder/error behavior of
//! the display flow. It greets the user, fetches a first quote on startup,
//! and then fetches a fresh one every time the user presses Enter.
//!
//! Usage example (CLI):
//! ```bash
//! quote_display --name "mark twain" --latency-ms 400 --failure-rate 0.2
//! ```
//!
//! A custom catalog can be supplied with `--quotes-path`; plain text files
//! hold one quote per line and `.json` files hold `{id, quote}` records.
//!
//! Wiring:
//! - `TriggerReader` turns stdin lines into refresh requests on a channel.
//! - `CannedQuoteSource` answers each request on its own reply channel.
//! - The main loop multiplexes both with crossbeam `select!`; every loop
//!   pass ends with `flow.tick()`, which is the scheduling tick that makes a
//!   deferred error message visible.
#![warn(missing_docs)]
mod args;
mod flow;
mod input;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};
use std::time::Duration;

use clap::Parser;
use crossbeam_channel::{Receiver, never, select, unbounded};
use log::{error, info, warn};
use quote_common::QuoteError;
use quote_common::Result;
use quote_common::text::{title_case, welcome_message};
use quote_source::{CannedQuoteSource, QuoteCatalog, QuoteSource};

use crate::args::Args;
use crate::flow::QuoteFlow;
use crate::input::{RefreshRequested, TriggerReader};

/// How long one pass of the event loop waits before ticking anyway.
const TICK_INTERVAL_MS: u64 = 200;

fn main() -> Result<(), QuoteError> {
    init_logger();
    let args = Args::parse();
    let shutdown = Arc::new(AtomicBool::new(false));
    {
        let shutdown = shutdown.clone();
        ctrlc::set_handler(move || {
            info!("Ctrl+C received. Shutting down display...");
            shutdown.store(true, Ordering::SeqCst);
        })
        .map_err(|e| QuoteError::Format(format!("Failed to set Ctrl+C handler: {}", e)))?;
    }

    match &args.name {
        Some(name) => println!("{}", welcome_message(true, &title_case(name))),
        None => println!("{}", welcome_message(false, "")),
    }

    let catalog = load_catalog(&args)?;
    info!("Catalog loaded: {} quotes", catalog.len());
    let source = CannedQuoteSource::new(
        catalog,
        Duration::from_millis(args.latency_ms),
        args.failure_rate,
    );

    let (trigger_tx, trigger_rx) = unbounded::<RefreshRequested>();
    TriggerReader::start(trigger_tx, shutdown.clone());

    run_event_loop(&source, trigger_rx, shutdown)
}

/// Drives the display flow until shutdown.
///
/// `pending` holds the reply channel of the in-flight request, or a `never`
/// channel when nothing is in flight. A re-trigger replaces the pending
/// receiver, so a stale reply is dropped rather than cancelled.
fn run_event_loop(
    source: &impl QuoteSource,
    trigger_rx: Receiver<RefreshRequested>,
    shutdown: Arc<AtomicBool>,
) -> Result<(), QuoteError> {
    let mut flow = QuoteFlow::new();
    let mut pending = never();

    // The display fetches a first quote without waiting for the user.
    start_fetch(&mut flow, source, &mut pending);

    while !shutdown.load(Ordering::Relaxed) {
        select! {
            recv(trigger_rx) -> msg => match msg {
                Ok(RefreshRequested) => start_fetch(&mut flow, source, &mut pending),
                // stdin closed; keep serving replies until shutdown.
                Err(e) => {
                    warn!("Trigger channel closed: {}", e);
                    break;
                }
            },
            recv(pending) -> msg => {
                pending = never();
                match msg {
                    Ok(reply) => {
                        apply_reply(&mut flow, reply);
                    }
                    Err(e) => {
                        error!("Quote source dropped a request without replying: {}", e);
                    }
                }
            },
            default(Duration::from_millis(TICK_INTERVAL_MS)) => {}
        }

        if flow.tick() {
            warn!("Quote request failed: {}", flow.error_message());
            println!("[error] {}", flow.error_message());
            println!("{}", flow.quote());
        }
    }
    info!("Display loop stopping...");
    Ok(())
}

/// Clears the display into the placeholder state and issues a new request.
fn start_fetch(
    flow: &mut QuoteFlow,
    source: &impl QuoteSource,
    pending: &mut Receiver<Result<String, QuoteError>>,
) {
    flow.trigger();
    println!("{}", flow.quote());
    *pending = source.get_quote();
    info!("Quote requested (phase: {})", flow.phase());
}

/// Feeds a reply into the flow and renders a successful quote.
fn apply_reply(flow: &mut QuoteFlow, reply: Result<String, QuoteError>) {
    let failed = reply.is_err();
    flow.apply(reply);
    if failed {
        // The error text stays invisible until the next tick.
        info!("Quote request failed; error display deferred one tick");
    } else {
        println!("{}", flow.quote());
        info!("Quote displayed (phase: {})", flow.phase());
    }
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}

/// Loads the quote catalog selected by the CLI arguments.
fn load_catalog(args: &Args) -> Result<QuoteCatalog, QuoteError> {
    let Some(raw_path) = &args.quotes_path else {
        return Ok(QuoteCatalog::built_in());
    };

    let path = normalize_path(raw_path);
    if !is_file_exist(&path) {
        return Err(QuoteError::Format(format!(
            "Quotes file not found: {}",
            path.display()
        )));
    }

    let file = File::open(&path)?;
    let reader = BufReader::new(file);
    if path.extension().is_some_and(|ext| ext == "json") {
        QuoteCatalog::parse_from_json(reader)
    } else {
        QuoteCatalog::parse_from_file(reader)
    }
}

/// Normalize a CLI-provided path string by trimming whitespace and matching quotes.
///
/// This allows passing Windows paths in quotes without breaking parsing.
fn normalize_path(raw: &str) -> PathBuf {
    let trimmed = raw.trim();
    let no_quotes = trimmed
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(trimmed);
    PathBuf::from(no_quotes)
}

/// Returns `true` if the provided path exists and is a regular file.
fn is_file_exist(path: &PathBuf) -> bool {
    path.exists() && path.is_file()
}
