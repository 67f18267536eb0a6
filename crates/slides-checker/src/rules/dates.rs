// Every date shown on the slides must be the date of the service
use shared_types::{CheckResult, SlideText};

use crate::extractors::{extract_raw_text, select_slides_by_pattern};
use crate::patterns::{DATED_SLIDES, DATE_PATTERN};
use crate::similarity::similarity;

const TITLE: &str =
    "Check all dates that appear in the slides are the same as the date of Sunday service.";

fn normalize_date(text: &str) -> String {
    text.replace('_', " ")
}

/// Compare every date-shaped text frame against `selected_date`.
///
/// Dates are compared as text (underscores read as spaces), not parsed. The
/// similarity score in each error is informational.
pub fn check_all_dates_are_as_provided<S: SlideText>(
    slides: &[S],
    selected_date: &str,
) -> Vec<CheckResult> {
    let expected = normalize_date(selected_date);
    let dated = extract_raw_text(&select_slides_by_pattern(slides, &DATED_SLIDES));

    let mut results: Vec<CheckResult> = dated
        .iter()
        .flat_map(|(&slide, texts)| texts.iter().map(move |text| (slide, text)))
        .filter(|(_, text)| DATE_PATTERN.is_match(text) && normalize_date(text) != expected)
        .map(|(slide, text)| {
            CheckResult::error(
                TITLE,
                format!(
                    "On slide {}, Expected: '{}'. Provided: '{}'. Similarity score = {} of 100",
                    slide,
                    selected_date,
                    text,
                    similarity(text, selected_date)
                ),
            )
        })
        .collect();

    if results.is_empty() {
        results.push(CheckResult::pass(
            TITLE,
            "All slides containing dates display the required date of Sunday service.",
        ));
    }

    results
}
