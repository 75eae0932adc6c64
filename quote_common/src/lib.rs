//!
//! Common types and utilities shared by the quote source and the display.
//!
//! This crate aggregates:
//! - `error` — unified error type `QuoteError` used across the workspace.
//! - `result` — handy `Result<T, QuoteError>` alias.
//! - `text` — pure text transforms (title case, welcome greeting).
#![warn(missing_docs)]
pub mod error;
pub mod result;
pub mod text;

pub use error::QuoteError;
pub use result::Result;
