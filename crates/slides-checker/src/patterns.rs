//! Phrases and regex patterns used to locate and classify slide text

use lazy_static::lazy_static;
use regex::Regex;

use crate::extractors::slides::SlidePattern;

/// Phrase shown on every section header slide
pub const SECTION_HEADER_PHRASE: &str = "order of service";

/// Heading of the sermon discussion slide
pub const DISCUSSION_SLIDE_PHRASE: &str = "Sermon discussion questions";

/// Left single quotation mark (U+2018), commonly mistyped for an apostrophe
pub const LEFT_QUOTE: char = '\u{2018}';

/// Right single quotation mark (U+2019), the expected apostrophe
pub const RIGHT_QUOTE: char = '\u{2019}';

/// Separator between an item's name and its inline note on the slide
pub const ITEM_NOTE_SEPARATOR: &str = " \u{2013} ";

/// Date shapes such as "22 May 2022" or "01-Jan-2022"
pub const DATE_PATTERN_SOURCE: &str = r"\d+[\s-][A-Za-z]+[\s-]\d+";

lazy_static! {
    /// Items expected to carry an inline note (song title, passage)
    pub static ref COMMENTED_ITEM_PATTERN: Regex =
        Regex::new("^(Opening Song|Closing Song|Hearing God['\u{2019}\u{2018}]s Word Read)").unwrap();

    /// Date pattern anchored at the start of a text frame
    pub static ref DATE_PATTERN: Regex =
        Regex::new(&format!("^(?:{})", DATE_PATTERN_SOURCE)).unwrap();

    /// Question numbering such as "1." or "12."
    pub static ref QUESTION_NUMBER_PATTERN: Regex = Regex::new(r"\d+\.").unwrap();

    pub static ref SECTION_HEADER_SLIDES: SlidePattern =
        SlidePattern::new(SECTION_HEADER_PHRASE).unwrap();

    pub static ref DISCUSSION_SLIDES: SlidePattern =
        SlidePattern::new(DISCUSSION_SLIDE_PHRASE).unwrap();

    pub static ref DATED_SLIDES: SlidePattern = SlidePattern::new(DATE_PATTERN_SOURCE).unwrap();
}

/// Replace left single quotes with right single quotes
pub fn normalize_apostrophes(text: &str) -> String {
    text.replace(LEFT_QUOTE, &RIGHT_QUOTE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commented_items_accept_any_apostrophe() {
        assert!(COMMENTED_ITEM_PATTERN.is_match("Hearing God's Word Read – Daniel 5"));
        assert!(COMMENTED_ITEM_PATTERN.is_match("Hearing God\u{2019}s Word Read – Daniel 5"));
        assert!(COMMENTED_ITEM_PATTERN.is_match("Hearing God\u{2018}s Word Read – Daniel 5"));
        assert!(COMMENTED_ITEM_PATTERN.is_match("Closing Song – Only a Holy God"));
        assert!(!COMMENTED_ITEM_PATTERN.is_match("Hearing God\u{2019}s Word Proclaimed"));
        assert!(!COMMENTED_ITEM_PATTERN.is_match("The Opening Song"));
    }

    #[test]
    fn test_date_pattern_anchored_at_start() {
        assert!(DATE_PATTERN.is_match("22 May 2022"));
        assert!(DATE_PATTERN.is_match("01-Jan-2022"));
        assert!(!DATE_PATTERN.is_match("Sunday 22 May 2022"));
    }

    #[test]
    fn test_normalize_apostrophes() {
        assert_eq!(normalize_apostrophes("God\u{2018}s"), "God\u{2019}s");
        assert_eq!(normalize_apostrophes("God's"), "God's");
    }
}
