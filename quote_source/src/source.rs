//! The asynchronous quote source seam.
//!
//! The display flow never calls a concrete source type; it talks to this
//! trait so tests can substitute a scripted source.
use crossbeam_channel::Receiver;
use quote_common::QuoteError;

/// A collaborator that asynchronously produces one quote per request.
pub trait QuoteSource {
    /// Issues a new request for a quote.
    ///
    /// The returned channel yields exactly one message: either the quote
    /// text or the failure describing why no quote is available. Delivery
    /// always happens after this call returns, never inline. Each request
    /// gets its own channel, so replies from overlapping requests cannot
    /// interleave within one channel; a requester that drops the receiver
    /// abandons the request.
    fn get_quote(&self) -> Receiver<Result<String, QuoteError>>;
}
