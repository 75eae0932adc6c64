//! Quote catalog: the set of sayings a source can deliver.
//!
//! A catalog is a non-empty list of quote strings. It can be built from the
//! built-in set, from a plain text file (one quote per non-empty line), or
//! from a JSON file holding `{id, quote}` records.
use std::io::{BufRead, Read};

use quote_common::QuoteError;
use serde::Deserialize;

/// One entry in a JSON quotes file.
#[derive(Debug, Clone, Deserialize)]
pub struct QuoteRecord {
    /// Stable identifier of the quote within the file.
    pub id: u32,
    /// The quote text.
    pub quote: String,
}

/// Non-empty collection of quotes a source picks from.
#[derive(Debug, Clone)]
pub struct QuoteCatalog {
    quotes: Vec<String>,
}

impl QuoteCatalog {
    /// Creates a catalog from the given quotes.
    ///
    /// Returns `QuoteError::EmptyCatalog` when `quotes` is empty, so every
    /// constructed catalog is guaranteed to have at least one entry.
    pub fn new(quotes: Vec<String>) -> Result<Self, QuoteError> {
        if quotes.is_empty() {
            return Err(QuoteError::EmptyCatalog);
        }
        Ok(Self { quotes })
    }

    /// Returns the built-in catalog of Mark Twain sayings.
    pub fn built_in() -> Self {
        let quotes = [
            "Always do right. This will gratify some people and astonish the rest.",
            "I have never let my schooling interfere with my education.",
            "Don't go around saying the world owes you a living. The world owes you nothing. It was here first.",
            "Whenever you find yourself on the side of the majority, it is time to pause and reflect.",
            "If you tell the truth, you don't have to remember anything.",
            "Clothes make the man. Naked people have little or no influence on society.",
            "It's not the size of the dog in the fight, it's the size of the fight in the dog.",
            "The man who does not read good books has no advantage over the man who cannot read them.",
            "Get your facts first, and then you can distort them as much as you please.",
        ];
        Self {
            quotes: quotes.iter().map(|q| q.to_string()).collect(),
        }
    }

    /// Parses a catalog from a plain text reader.
    ///
    /// Each non-empty line becomes a single quote; surrounding whitespace is
    /// trimmed. Returns an error if reading fails or no quotes are found.
    pub fn parse_from_file<R: BufRead>(reader: R) -> Result<Self, QuoteError> {
        let mut quotes = Vec::new();

        for line_result in reader.lines() {
            let line = line_result.map_err(QuoteError::Io)?;
            let trimmed_line = line.trim();
            if trimmed_line.is_empty() {
                continue;
            }
            quotes.push(trimmed_line.to_string());
        }
        Self::new(quotes)
    }

    /// Parses a catalog from a JSON reader holding an array of `QuoteRecord`s.
    pub fn parse_from_json<R: Read>(reader: R) -> Result<Self, QuoteError> {
        let records: Vec<QuoteRecord> = serde_json::from_reader(reader)?;
        Self::new(records.into_iter().map(|r| r.quote).collect())
    }

    /// Number of quotes in the catalog. Always at least one.
    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    /// Always `false`; kept for iterator-style API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    /// Returns the quote at `index`, wrapping around the catalog size.
    pub fn get(&self, index: usize) -> &str {
        &self.quotes[index % self.quotes.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn parses_one_quote_per_line_and_skips_blanks() {
        let input = "first quote\n\n  second quote  \n\n";
        let catalog = QuoteCatalog::parse_from_file(Cursor::new(input)).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(0), "first quote");
        assert_eq!(catalog.get(1), "second quote");
    }

    #[test]
    fn rejects_empty_file() {
        let result = QuoteCatalog::parse_from_file(Cursor::new("\n\n"));
        assert!(matches!(result, Err(QuoteError::EmptyCatalog)));
    }

    #[test]
    fn parses_json_records() {
        let input = r#"[{"id": 1, "quote": "first"}, {"id": 2, "quote": "second"}]"#;
        let catalog = QuoteCatalog::parse_from_json(Cursor::new(input)).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(1), "second");
    }

    #[test]
    fn rejects_malformed_json() {
        let result = QuoteCatalog::parse_from_json(Cursor::new("not json"));
        assert!(matches!(result, Err(QuoteError::SerdeJson(_))));
    }

    #[test]
    fn built_in_catalog_is_populated() {
        assert!(QuoteCatalog::built_in().len() > 0);
    }

    #[test]
    fn get_wraps_around() {
        let catalog = QuoteCatalog::new(vec!["only".to_string()]).unwrap();
        assert_eq!(catalog.get(5), "only");
    }
}
