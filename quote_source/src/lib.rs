//!
//! Asynchronous quote source: a catalog of sayings plus the delivery
//! machinery that hands out one quote (or one failure) per request.
//!
//! This crate aggregates:
//! - `catalog` — non-empty quote collections and file/JSON parsing.
//! - `source` — the `QuoteSource` trait the display flow depends on.
//! - `canned` — catalog-backed source with simulated latency and outages.
#![warn(missing_docs)]
pub mod canned;
pub mod catalog;
pub mod source;

pub use canned::CannedQuoteSource;
pub use catalog::QuoteCatalog;
pub use source::QuoteSource;
