// Section header slides: presence and order of service alignment
use shared_types::CheckResult;
use tracing::debug;

use crate::extractors::SlideEntries;
use crate::order_of_service::FilteredRequiredItem;
use crate::patterns::{
    normalize_apostrophes, COMMENTED_ITEM_PATTERN, ITEM_NOTE_SEPARATOR, LEFT_QUOTE,
};
use crate::similarity::{is_probable_typo, similarity};

const EXISTENCE_TITLE: &str = "Check existence of section header slides";
const ORDER_TITLE: &str = "Check section headers are in the correct order";
const TYPO_TITLE: &str = "Check section headers are in the correct order: Is there a typo?";
const PASS_TITLE: &str =
    "Check all required order of service items are present and in the correct order";

/// At least one section header slide must exist
pub fn check_existence_of_section_headers(count: usize) -> CheckResult {
    let comments = format!(
        "Expected: >=1 section header slides. Provided: {} section header slide(s) found.",
        count
    );
    if count > 0 {
        CheckResult::pass(EXISTENCE_TITLE, comments)
    } else {
        CheckResult::error(EXISTENCE_TITLE, comments)
    }
}

/// Align every section header slide's entries with the required items.
///
/// Each slide is scanned from the first required item. Commented items (songs
/// and the Bible reading) must match `"{title} – {notes}"`; near misses are
/// warnings, anything else is an error that does not advance the cursor.
/// Plain items must match the title; unrelated lines are skipped.
pub fn check_section_headers_have_correct_order(
    entries: &SlideEntries,
    required: &[FilteredRequiredItem],
) -> Vec<CheckResult> {
    let mut results: Vec<CheckResult> = Vec::new();

    for (&slide, slide_entries) in entries {
        let mut index = 0;

        for entry in slide_entries {
            let Some(item) = required.get(index) else {
                debug!(slide, "all required items matched, ignoring remaining entries");
                break;
            };

            let title = normalize_apostrophes(&item.title);
            let required_item = format!("{}{}{}", title, ITEM_NOTE_SEPARATOR, item.notes);
            let score = similarity(&required_item, entry);

            if COMMENTED_ITEM_PATTERN.is_match(entry) {
                if *entry == required_item {
                    index += 1;
                    continue;
                }

                let comments = format!(
                    "On Slide {}, Expected: '{}'. Provided: '{}'. Similarity score = {} of 100",
                    slide, required_item, entry, score
                );
                let result = if is_probable_typo(score) {
                    index += 1;
                    CheckResult::warning(TYPO_TITLE, comments)
                } else {
                    CheckResult::error(ORDER_TITLE, comments)
                };

                if !results.contains(&result) {
                    results.push(result);
                }
            } else if entry.contains(LEFT_QUOTE) {
                results.push(CheckResult::warning(
                    TYPO_TITLE,
                    format!(
                        "On Slide {}, Expected: '{}'. Provided: '{}'. The use of the unicode character U+2018 ({}) is triggering this warning; replace this character with U+2019 (\u{2019}) or a standard single quote (') to resolve this error. Similarity score = {} of 100",
                        slide, required_item, entry, LEFT_QUOTE, score
                    ),
                ));
                index += 1;
            } else if normalize_apostrophes(entry) == title {
                index += 1;
            } else {
                debug!(slide, entry = entry.as_str(), "skipping unrelated text");
            }
        }
    }

    if results.is_empty() {
        results.push(CheckResult::pass(
            PASS_TITLE,
            "All slides containing order of service have the required order of service items and are presented in the correct order.",
        ));
    }

    results
}
