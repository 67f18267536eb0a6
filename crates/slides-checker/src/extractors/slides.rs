// Slide selection and text flattening shared by every rule
use std::collections::BTreeMap;

use regex::Regex;
use shared_types::SlideText;

use crate::patterns::SECTION_HEADER_PHRASE;

/// Slides keyed by 1-indexed slide number
pub type SlideSubset<'a, S> = BTreeMap<usize, &'a S>;

/// Text frames of each selected slide, own shapes before layout shapes
pub type ExtractedSlideText = BTreeMap<usize, Vec<String>>;

/// Order of service entries found on each section header slide
pub type SlideEntries = BTreeMap<usize, Vec<String>>;

/// A slide selector that matches either literally or as a regex anchored at
/// the start of a text frame.
#[derive(Debug, Clone)]
pub struct SlidePattern {
    literal: String,
    anchored: Regex,
}

impl SlidePattern {
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            literal: pattern.to_string(),
            anchored: Regex::new(&format!("^(?:{})", pattern))?,
        })
    }

    pub fn matches(&self, text: &str) -> bool {
        text.contains(&self.literal) || self.anchored.is_match(text)
    }
}

/// Select the slides with at least one text frame matching `pattern`.
pub fn select_slides_by_pattern<'a, S: SlideText>(
    slides: &'a [S],
    pattern: &SlidePattern,
) -> SlideSubset<'a, S> {
    slides
        .iter()
        .enumerate()
        .filter(|(_, slide)| slide.text_frames().into_iter().any(|t| pattern.matches(t)))
        .map(|(i, slide)| (i + 1, slide))
        .collect()
}

/// Flatten each selected slide into its ordered list of text frames.
pub fn extract_raw_text<S: SlideText>(subset: &SlideSubset<'_, S>) -> ExtractedSlideText {
    subset
        .iter()
        .map(|(&number, slide)| {
            let texts = slide.text_frames().into_iter().map(str::to_string).collect();
            (number, texts)
        })
        .collect()
}

/// Split text on newlines, trimming and dropping blank lines
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n').map(str::trim).filter(|line| !line.is_empty())
}

/// Order of service entries per section header slide.
///
/// Only frames containing the header phrase are kept; their lines, minus the
/// header line itself, become the entries in frame order.
pub fn order_of_service_entries(extracted: &ExtractedSlideText) -> SlideEntries {
    extracted
        .iter()
        .map(|(&number, texts)| {
            let entries = texts
                .iter()
                .filter(|text| text.contains(SECTION_HEADER_PHRASE))
                .flat_map(|text| split_lines(text))
                .filter(|line| !line.contains(SECTION_HEADER_PHRASE))
                .map(str::to_string)
                .collect();
            (number, entries)
        })
        .collect()
}

/// Candidate question lines from the sermon discussion slide
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscussionCandidates {
    pub slide: usize,
    pub lines: Vec<String>,
}

/// Lines of the first discussion slide, or `None` when there is none.
pub fn discussion_candidates(extracted: &ExtractedSlideText) -> Option<DiscussionCandidates> {
    let (&slide, texts) = extracted.iter().next()?;
    let lines = texts
        .iter()
        .flat_map(|text| split_lines(text))
        .map(str::to_string)
        .collect();
    Some(DiscussionCandidates { slide, lines })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::SlideContent;

    fn deck() -> Vec<SlideContent> {
        vec![
            SlideContent::new(["Welcome", "22 May 2022"]),
            SlideContent::new(["Family Prayer"])
                .with_layout(["Today\u{2019}s order of service\nOpening Song – Behold Our God\n\n  Family Confession  "]),
            SlideContent::new(["Sermon discussion questions", "Question one\nQuestion two"]),
        ]
    }

    #[test]
    fn test_selects_by_literal_substring() {
        let slides = deck();
        let pattern = SlidePattern::new("order of service").unwrap();
        let subset = select_slides_by_pattern(&slides, &pattern);
        assert_eq!(subset.keys().copied().collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn test_selects_by_anchored_regex() {
        let slides = deck();
        let pattern = SlidePattern::new(r"\d+ [A-Za-z]+ \d+").unwrap();
        let subset = select_slides_by_pattern(&slides, &pattern);
        assert_eq!(subset.keys().copied().collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn test_regex_does_not_match_mid_text() {
        let slides = vec![SlideContent::new(["Sunday 22 May 2022"])];
        let pattern = SlidePattern::new(r"\d+ [A-Za-z]+ \d+").unwrap();
        assert!(select_slides_by_pattern(&slides, &pattern).is_empty());
    }

    #[test]
    fn test_invalid_regex_is_rejected() {
        assert!(SlidePattern::new("order (of service").is_err());
    }

    #[test]
    fn test_extract_keeps_shape_then_layout_order() {
        let slides = deck();
        let pattern = SlidePattern::new("order of service").unwrap();
        let extracted = extract_raw_text(&select_slides_by_pattern(&slides, &pattern));
        assert_eq!(extracted[&2][0], "Family Prayer");
        assert!(extracted[&2][1].starts_with("Today"));
    }

    #[test]
    fn test_order_of_service_entries_drop_header_and_blanks() {
        let slides = deck();
        let pattern = SlidePattern::new("order of service").unwrap();
        let entries = order_of_service_entries(&extract_raw_text(&select_slides_by_pattern(
            &slides, &pattern,
        )));
        assert_eq!(
            entries[&2],
            vec!["Opening Song – Behold Our God".to_string(), "Family Confession".to_string()]
        );
    }

    #[test]
    fn test_discussion_candidates_use_first_slide() {
        let slides = deck();
        let pattern = SlidePattern::new("Sermon discussion questions").unwrap();
        let candidates =
            discussion_candidates(&extract_raw_text(&select_slides_by_pattern(&slides, &pattern)))
                .unwrap();
        assert_eq!(candidates.slide, 3);
        assert_eq!(
            candidates.lines,
            vec!["Sermon discussion questions", "Question one", "Question two"]
        );
    }

    #[test]
    fn test_no_discussion_slide() {
        assert_eq!(discussion_candidates(&ExtractedSlideText::new()), None);
    }
}
