// Sermon discussion slide: presence and required questions
use shared_types::CheckResult;

use crate::extractors::DiscussionCandidates;
use crate::patterns::QUESTION_NUMBER_PATTERN;
use crate::similarity::{is_probable_typo, similarity};

const EXISTENCE_TITLE: &str = "Check existence of sermon discussion slides.";
const QUESTIONS_TITLE: &str = "Check sermon discussion questions are as provided.";
const TYPO_TITLE: &str = "Check sermon discussion questions are as provided: Is there a typo?";

/// Split numbered questions ("1. ... 2. ...") into trimmed question texts.
pub fn parse_discussion_questions(raw: &str) -> Vec<String> {
    QUESTION_NUMBER_PATTERN
        .split(raw)
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .map(str::to_string)
        .collect()
}

/// Exactly one sermon discussion slide must exist
pub fn check_existence_of_lone_sermon_discussion_slide(count: usize) -> CheckResult {
    let comments = format!(
        "Expected: 1 sermon discussion slide. Provided: {} sermon discussion slide(s) found.",
        count
    );
    if count == 1 {
        CheckResult::pass(EXISTENCE_TITLE, comments)
    } else {
        CheckResult::error(EXISTENCE_TITLE, comments)
    }
}

/// Check each required question appears on the discussion slide.
///
/// A verbatim line passes silently, the first near miss is a warning, and a
/// question with neither is an error.
pub fn check_sermon_discussion_qns_are_as_provided(
    candidates: Option<&DiscussionCandidates>,
    required: &[String],
) -> Vec<CheckResult> {
    let Some(candidates) = candidates else {
        return vec![CheckResult::error(
            QUESTIONS_TITLE,
            format!(
                "No slide containing sermon discussion questions was found; {} required question(s) could not be checked.",
                required.len()
            ),
        )];
    };

    let slide = candidates.slide;
    let mut results = Vec::new();

    for question in required {
        if candidates.lines.iter().any(|line| line == question) {
            continue;
        }

        let near_miss = candidates
            .lines
            .iter()
            .map(|line| (line, similarity(question, line)))
            .find(|(_, score)| is_probable_typo(*score));

        match near_miss {
            Some((line, score)) => results.push(CheckResult::warning(
                TYPO_TITLE,
                format!(
                    "On Slide {}, Expected: '{}'. Provided: '{}'. Similarity score = {} of 100",
                    slide, question, line, score
                ),
            )),
            None => results.push(CheckResult::error(
                QUESTIONS_TITLE,
                format!(
                    "On Slide {}, Expected: '{}'. Could not find this required question.",
                    slide, question
                ),
            )),
        }
    }

    if results.is_empty() {
        results.push(CheckResult::pass(
            QUESTIONS_TITLE,
            "All sermon discussion questions are present.",
        ));
    }

    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::SAMPLE_DISCUSSION_QUESTIONS;
    use pretty_assertions::assert_eq;
    use shared_types::Severity;

    const FIRST: &str = "How have you been confronted with your own arrogance before God today? How have you been challenged to repent?";
    const SECOND: &str = "How has our passage been a comfort if we are seeking to live for God in this anti-God world?";

    fn slide_with_questions() -> DiscussionCandidates {
        DiscussionCandidates {
            slide: 12,
            lines: vec![
                "Sermon discussion questions".to_string(),
                FIRST.to_string(),
                SECOND.to_string(),
            ],
        }
    }

    #[test]
    fn test_parse_discussion_questions() {
        assert_eq!(
            parse_discussion_questions(SAMPLE_DISCUSSION_QUESTIONS),
            vec![FIRST.to_string(), SECOND.to_string()]
        );
    }

    #[test]
    fn test_parse_ignores_blank_segments() {
        assert_eq!(
            parse_discussion_questions("1.  \n2. Why?\n"),
            vec!["Why?".to_string()]
        );
    }

    #[test]
    fn test_lone_slide_existence() {
        assert_eq!(check_existence_of_lone_sermon_discussion_slide(1).status, Severity::Pass);
        let none = check_existence_of_lone_sermon_discussion_slide(0);
        assert_eq!(none.status, Severity::Error);
        let many = check_existence_of_lone_sermon_discussion_slide(2);
        assert_eq!(many.status, Severity::Error);
        assert!(many.comments.contains("Provided: 2 sermon discussion slide(s)"));
    }

    #[test]
    fn test_all_questions_present() {
        let required = parse_discussion_questions(SAMPLE_DISCUSSION_QUESTIONS);
        let results = check_sermon_discussion_qns_are_as_provided(Some(&slide_with_questions()), &required);

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].status, Severity::Pass);
    }

    #[test]
    fn test_typo_is_single_warning() {
        let required = vec![FIRST.replace("confronted", "confrontedd")];
        let results = check_sermon_discussion_qns_are_as_provided(Some(&slide_with_questions()), &required);

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].status, Severity::Warning);
        assert!(results[0].comments.starts_with("On Slide 12, Expected: 'How have you been confrontedd"));
        assert!(results[0].comments.contains(&format!("Provided: '{}'", FIRST)));
    }

    #[test]
    fn test_reworded_phrase_is_single_warning() {
        let required = vec![SECOND.replace("a comfort", "comforting")];
        let results = check_sermon_discussion_qns_are_as_provided(Some(&slide_with_questions()), &required);

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].status, Severity::Warning);
        assert_eq!(results[0].title, TYPO_TITLE);
        assert!(results[0].comments.contains(&format!("Provided: '{}'", SECOND)));
        assert!(results[0].comments.ends_with("Similarity score = 93 of 100"));
    }

    #[test]
    fn test_missing_question_is_error() {
        let missing = "What was your view of God before hearing Daniel 2? How has God changed or expanded your view of him today?";
        let results = check_sermon_discussion_qns_are_as_provided(
            Some(&slide_with_questions()),
            &[missing.to_string()],
        );

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].status, Severity::Error);
        assert_eq!(
            results[0].comments,
            format!("On Slide 12, Expected: '{}'. Could not find this required question.", missing)
        );
    }

    #[test]
    fn test_missing_discussion_slide_is_error() {
        let required = parse_discussion_questions(SAMPLE_DISCUSSION_QUESTIONS);
        let results = check_sermon_discussion_qns_are_as_provided(None, &required);

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].status, Severity::Error);
        assert!(results[0].comments.contains("2 required question(s)"));
    }
}
