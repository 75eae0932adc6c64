//! Pure text transforms used when presenting quotes and greetings.
//!
//! These helpers carry no state and have no error conditions. Words are
//! maximal runs of non-whitespace characters; hyphens and other punctuation
//! do not split a word.

/// Converts a string to title case.
///
/// The first character of each whitespace-delimited word is upper-cased and
/// the remaining characters are lower-cased. Whitespace runs (including
/// leading and consecutive spaces) are preserved verbatim, so the output has
/// the same length in characters as the input for ASCII text.
///
/// The transform is idempotent: applying it twice gives the same result.
pub fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut at_word_start = true;

    for ch in input.chars() {
        if ch.is_whitespace() {
            at_word_start = true;
            out.push(ch);
        } else if at_word_start {
            at_word_start = false;
            out.extend(ch.to_uppercase());
        } else {
            out.extend(ch.to_lowercase());
        }
    }
    out
}

/// Builds the greeting shown when the display starts.
///
/// Logged-in users are greeted by name; anonymous users are asked to log in.
pub fn welcome_message(logged_in: bool, user_name: &str) -> String {
    if logged_in {
        format!("Welcome, {}", user_name)
    } else {
        String::from("Please log in.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transforms_single_word() {
        assert_eq!(title_case("abc"), "Abc");
    }

    #[test]
    fn transforms_each_word() {
        assert_eq!(title_case("abc def"), "Abc Def");
    }

    #[test]
    fn leaves_title_cased_input_unchanged() {
        assert_eq!(title_case("Abc Def"), "Abc Def");
    }

    #[test]
    fn does_not_split_on_hyphens() {
        assert_eq!(title_case("abc-def"), "Abc-def");
    }

    #[test]
    fn preserves_whitespace_runs() {
        assert_eq!(title_case("   abc   def"), "   Abc   Def");
    }

    #[test]
    fn empty_maps_to_empty() {
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn lowers_shouting_input() {
        assert_eq!(title_case("MARK TWAIN"), "Mark Twain");
    }

    #[test]
    fn welcomes_logged_in_user_by_name() {
        assert!(welcome_message(true, "Test User").contains("Test User"));
    }

    #[test]
    fn asks_anonymous_user_to_log_in() {
        let msg = welcome_message(false, "Test User");
        assert!(!msg.contains("Test User"));
        assert!(msg.contains("log in"));
    }
}
