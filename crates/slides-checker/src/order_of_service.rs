//! Parsing of the required order of service
//!
//! The script is tab-delimited, one item per line: `name \t duration \t notes`.
//! Trailing fields may be empty (e.g. `Dismissal\t\t`). The duration is
//! informational; anything that is not a whole number of minutes is kept as
//! `None`.

use thiserror::Error;
use tracing::debug;

/// Canonical names used on slides for items whose script name differs
pub const SECTION_MAPPING: &[(&str, &str)] = &[
    ("Bible Reading", "Hearing God\u{2019}s Word Read"),
    ("Sermon", "Hearing God\u{2019}s Word Proclaimed"),
    ("Discuss in groups", "Sermon Discussion"),
];

/// Administrative items that never appear in the slide order of service
pub const BOOKEND_ITEMS: &[&str] = &["Opening Words", "Dismissal", "Closing Words"];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceScriptError {
    #[error("line {line}: expected 3 tab-separated fields (item, duration, notes), found {found}")]
    MalformedLine { line: usize, found: usize },
}

/// One line of the required order of service
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct RequiredServiceItem {
    pub name: String,
    pub duration_minutes: Option<u32>,
    pub notes: String,
}

/// An item that must be shown on the section header slides, in order
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct FilteredRequiredItem {
    pub title: String,
    pub notes: String,
}

/// Parse the raw tab-delimited script.
///
/// Blank lines are skipped. Any other line must have exactly three fields.
pub fn parse_order_of_service(raw: &str) -> Result<Vec<RequiredServiceItem>, ServiceScriptError> {
    let mut items = Vec::new();

    for (i, line) in raw.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() != 3 {
            return Err(ServiceScriptError::MalformedLine {
                line: i + 1,
                found: fields.len(),
            });
        }

        let duration = fields[1].trim();
        let duration_minutes = duration.parse::<u32>().ok();
        if duration_minutes.is_none() && !duration.is_empty() {
            debug!(line = i + 1, duration, "duration is not a whole number, ignoring");
        }

        items.push(RequiredServiceItem {
            name: fields[0].trim().to_string(),
            duration_minutes,
            notes: fields[2].trim().to_string(),
        });
    }

    Ok(items)
}

/// Slide title for a script item name
pub fn canonical_title(name: &str) -> &str {
    SECTION_MAPPING
        .iter()
        .find(|(from, _)| *from == name)
        .map(|(_, to)| *to)
        .unwrap_or(name)
}

fn is_bookend(name: &str) -> bool {
    BOOKEND_ITEMS.iter().any(|bookend| name.starts_with(bookend))
}

/// Drop bookend items and rename the rest to their slide titles.
pub fn filter_order_of_service(items: &[RequiredServiceItem]) -> Vec<FilteredRequiredItem> {
    items
        .iter()
        .filter(|item| !is_bookend(&item.name))
        .map(|item| FilteredRequiredItem {
            title: canonical_title(&item.name).to_string(),
            notes: item.notes.clone(),
        })
        .collect()
}
