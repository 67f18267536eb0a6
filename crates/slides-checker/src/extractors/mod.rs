//! Text extraction from slide decks

pub mod slides;

pub use slides::{
    discussion_candidates, extract_raw_text, order_of_service_entries, select_slides_by_pattern,
    DiscussionCandidates, ExtractedSlideText, SlideEntries, SlidePattern, SlideSubset,
};
