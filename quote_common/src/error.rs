//! Error types shared between the quote source and the display flow.
//!
//! The `QuoteError` enum unifies common failure cases for I/O, catalog
//! parsing, channel communication, and the quote source itself, allowing
//! crates to propagate a single error type. `SourceFailed` is the only
//! user-visible variant: the display flow converts it to display state and
//! never re-throws it.
use std::io;

use thiserror::Error;

/// Unified error type shared by the quote source and display crates.
#[derive(Error, Debug)]
pub enum QuoteError {
    /// I/O error originating from the standard library or files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Generic formatting/validation error with a human-readable message.
    #[error("Format error: {0}")]
    Format(String),

    /// Error while parsing a quotes file into a catalog.
    #[error("Parse quotes file error: {0}")]
    ParseCatalogFile(String),

    /// Failure while decoding a JSON quotes file via serde_json.
    #[error("JSON serialization/deserialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// Crossbeam/channel send failed (e.g., receiver dropped); contains a short context string.
    #[error("Channel send failed: {0}")]
    ChannelSend(String),

    /// Crossbeam/channel receive failed (e.g., sender closed); contains a short context string.
    #[error("Channel receive failed: {0}")]
    ChannelRecv(String),

    /// A catalog was constructed with no quotes in it.
    #[error("Quote catalog is empty")]
    EmptyCatalog,

    /// The quote source could not deliver a quote. Carries the
    /// human-readable description shown to the user.
    #[error("Quote source failed: {0}")]
    SourceFailed(String),
}
