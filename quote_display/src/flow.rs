//! Display flow for quotes: placeholder, success, and deferred error display.
//!
//! The flow is a plain state machine so it can be driven deterministically:
//! the event loop forwards source replies into [`QuoteFlow::apply`] and
//! advances scheduling time with [`QuoteFlow::tick`]. The flow itself never
//! talks to the source.
//!
//! Lifecycle:
//! - `trigger()` clears any previous error and shows the placeholder.
//! - `apply(Ok(..))` replaces the placeholder with the quote.
//! - `apply(Err(..))` keeps the placeholder and *stages* the error text; the
//!   error only becomes visible on the next `tick()`, so the visible state
//!   never changes twice within one update cycle.
//!
//! Retries are user-initiated only. A re-trigger while a request is in
//! flight does not cancel anything; replies are applied in arrival order and
//! the last one wins.
use quote_common::QuoteError;
use strum::Display;

/// Interim display value shown while a request is pending or after it fails.
pub const PLACEHOLDER: &str = "...";

/// Lifecycle of the displayed quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Phase {
    /// Nothing has been requested yet.
    Idle,
    /// A request is in flight; the placeholder is displayed.
    Loading,
    /// The latest reply succeeded and its quote is displayed.
    Displaying,
    /// The latest reply failed and the error message is visible.
    ErrorDisplayed,
}

/// State machine behind the quote display.
pub struct QuoteFlow {
    quote: String,
    error_message: String,
    staged_error: Option<String>,
    phase: Phase,
}

impl QuoteFlow {
    /// Creates a flow with nothing displayed and no error shown.
    pub fn new() -> Self {
        Self {
            quote: String::new(),
            error_message: String::new(),
            staged_error: None,
            phase: Phase::Idle,
        }
    }

    /// Currently displayed value. Empty before the first trigger.
    pub fn quote(&self) -> &str {
        &self.quote
    }

    /// Currently visible error message. Empty when no error is shown.
    pub fn error_message(&self) -> &str {
        &self.error_message
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// User-triggered refresh.
    ///
    /// Clears any previous error (visible or staged) and shows the
    /// placeholder until a reply arrives. The caller is expected to issue
    /// `get_quote()` on the source right after.
    pub fn trigger(&mut self) {
        self.error_message.clear();
        self.staged_error = None;
        self.quote = String::from(PLACEHOLDER);
        self.phase = Phase::Loading;
    }

    /// Applies a source reply.
    ///
    /// On success the quote replaces whatever is displayed. On failure the
    /// placeholder stays displayed and the error text is staged for the next
    /// tick instead of being published immediately.
    pub fn apply(&mut self, reply: Result<String, QuoteError>) {
        match reply {
            Ok(text) => {
                self.quote = text;
                self.error_message.clear();
                self.staged_error = None;
                self.phase = Phase::Displaying;
            }
            Err(e) => {
                self.quote = String::from(PLACEHOLDER);
                self.staged_error = Some(e.to_string());
            }
        }
    }

    /// Advances one scheduling tick, publishing a staged error if any.
    ///
    /// Returns `true` when the error message became visible on this tick.
    /// Idempotent when nothing is staged.
    pub fn tick(&mut self) -> bool {
        if let Some(message) = self.staged_error.take() {
            self.error_message = message;
            self.phase = Phase::ErrorDisplayed;
            return true;
        }
        false
    }
}

impl Default for QuoteFlow {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failure(text: &str) -> Result<String, QuoteError> {
        Err(QuoteError::SourceFailed(String::from(text)))
    }

    #[test]
    fn shows_nothing_before_first_trigger() {
        let flow = QuoteFlow::new();
        assert_eq!(flow.quote(), "");
        assert_eq!(flow.error_message(), "");
        assert_eq!(flow.phase(), Phase::Idle);
    }

    #[test]
    fn trigger_shows_placeholder_immediately() {
        let mut flow = QuoteFlow::new();
        flow.trigger();
        assert_eq!(flow.quote(), PLACEHOLDER);
        assert_eq!(flow.error_message(), "");
        assert_eq!(flow.phase(), Phase::Loading);
    }

    #[test]
    fn success_replaces_placeholder_with_quote() {
        let mut flow = QuoteFlow::new();
        flow.trigger();
        flow.apply(Ok(String::from("Test Quote")));
        assert_eq!(flow.quote(), "Test Quote");
        assert_eq!(flow.error_message(), "");
        assert_eq!(flow.phase(), Phase::Displaying);
        assert!(!flow.tick());
    }

    #[test]
    fn failure_keeps_placeholder_and_defers_the_error() {
        let mut flow = QuoteFlow::new();
        flow.trigger();
        flow.apply(failure("test failure"));

        // Not visible yet within the same cycle.
        assert_eq!(flow.quote(), PLACEHOLDER);
        assert_eq!(flow.error_message(), "");

        assert!(flow.tick());
        assert_eq!(flow.quote(), PLACEHOLDER);
        assert!(flow.error_message().contains("test failure"));
        assert_eq!(flow.phase(), Phase::ErrorDisplayed);
    }

    #[test]
    fn tick_is_idempotent_after_publishing() {
        let mut flow = QuoteFlow::new();
        flow.trigger();
        flow.apply(failure("test failure"));
        assert!(flow.tick());
        assert!(!flow.tick());
        assert!(flow.error_message().contains("test failure"));
    }

    #[test]
    fn retrigger_clears_a_visible_error() {
        let mut flow = QuoteFlow::new();
        flow.trigger();
        flow.apply(failure("test failure"));
        flow.tick();

        flow.trigger();
        assert_eq!(flow.quote(), PLACEHOLDER);
        assert_eq!(flow.error_message(), "");
        assert_eq!(flow.phase(), Phase::Loading);
    }

    #[test]
    fn retrigger_discards_a_staged_error() {
        let mut flow = QuoteFlow::new();
        flow.trigger();
        flow.apply(failure("test failure"));

        flow.trigger();
        assert!(!flow.tick());
        assert_eq!(flow.error_message(), "");
    }

    #[test]
    fn last_reply_wins_across_overlapping_requests() {
        let mut flow = QuoteFlow::new();
        flow.trigger();
        flow.trigger();
        flow.apply(Ok(String::from("first")));
        flow.apply(Ok(String::from("second")));
        assert_eq!(flow.quote(), "second");
        assert_eq!(flow.phase(), Phase::Displaying);
    }

    #[test]
    fn late_success_overrides_a_staged_error() {
        let mut flow = QuoteFlow::new();
        flow.trigger();
        flow.apply(failure("test failure"));
        flow.apply(Ok(String::from("Test Quote")));

        assert!(!flow.tick());
        assert_eq!(flow.quote(), "Test Quote");
        assert_eq!(flow.error_message(), "");
    }

    #[test]
    fn late_failure_overrides_a_displayed_quote() {
        let mut flow = QuoteFlow::new();
        flow.trigger();
        flow.apply(Ok(String::from("Test Quote")));
        flow.apply(failure("test failure"));

        assert_eq!(flow.quote(), PLACEHOLDER);
        assert!(flow.tick());
        assert!(flow.error_message().contains("test failure"));
    }
}
