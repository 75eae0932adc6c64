//! Canned quote source backed by an in-memory catalog.
//!
//! Each request spawns a short-lived thread that sleeps the configured
//! latency and then sends a randomly picked quote back on a dedicated
//! channel. A configurable failure rate makes a request deliver an error
//! instead, which is how outages are simulated for the display flow.
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crossbeam_channel::{Receiver, bounded};
use log::debug;
use quote_common::QuoteError;
use rand::Rng;

use crate::catalog::QuoteCatalog;
use crate::source::QuoteSource;

/// Message delivered when a simulated outage strikes.
const OUTAGE_MESSAGE: &str = "quote feed unavailable";

/// Quote source that serves random entries from a fixed catalog.
pub struct CannedQuoteSource {
    catalog: Arc<QuoteCatalog>,
    latency: Duration,
    failure_rate: f64,
}

impl CannedQuoteSource {
    /// Creates a source over `catalog`.
    ///
    /// `latency` is the simulated round-trip before a reply is sent.
    /// `failure_rate` is the probability in `[0.0, 1.0]` that a request
    /// fails; values outside that range are clamped. A rate of `1.0` makes
    /// every request fail, which tests rely on.
    pub fn new(catalog: QuoteCatalog, latency: Duration, failure_rate: f64) -> Self {
        Self {
            catalog: Arc::new(catalog),
            latency,
            failure_rate: failure_rate.clamp(0.0, 1.0),
        }
    }
}

impl QuoteSource for CannedQuoteSource {
    fn get_quote(&self) -> Receiver<Result<String, QuoteError>> {
        let (tx, rx) = bounded(1);
        let catalog = Arc::clone(&self.catalog);
        let latency = self.latency;
        let failure_rate = self.failure_rate;

        thread::spawn(move || {
            if !latency.is_zero() {
                thread::sleep(latency);
            }
            let mut rng = rand::rng();
            let reply = if rng.random_bool(failure_rate) {
                Err(QuoteError::SourceFailed(String::from(OUTAGE_MESSAGE)))
            } else {
                let index = rng.random_range(0..catalog.len());
                Ok(catalog.get(index).to_string())
            };
            // The requester may have re-triggered and dropped this receiver.
            if tx.send(reply).is_err() {
                debug!("Quote reply dropped: requester went away");
            }
        });
        rx
    }
}
