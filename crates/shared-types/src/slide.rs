//! Slide interface consumed by the checker
//!
//! A deck is an ordered sequence of slides. Each slide yields the plain text
//! of its text-bearing shapes, its own shapes first and then the shapes
//! inherited from its layout. Any presentation parser is adapted behind
//! [`SlideText`].

/// Text capability of a single slide.
pub trait SlideText {
    /// Text frames of the slide's own shapes, in document order.
    fn shape_texts(&self) -> &[String];

    /// Text frames of the slide layout's shapes, in document order.
    fn layout_texts(&self) -> &[String];

    /// All text frames: own shapes, then layout shapes.
    fn text_frames(&self) -> Vec<&str> {
        self.shape_texts()
            .iter()
            .chain(self.layout_texts())
            .map(String::as_str)
            .collect()
    }
}

/// Plain-data slide, as produced by the PPTX adapter.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SlideContent {
    pub shapes: Vec<String>,
    #[serde(default)]
    pub layout_shapes: Vec<String>,
}

impl SlideContent {
    pub fn new<I, S>(shapes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            shapes: shapes.into_iter().map(Into::into).collect(),
            layout_shapes: Vec::new(),
        }
    }

    pub fn with_layout<I, S>(mut self, layout_shapes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.layout_shapes = layout_shapes.into_iter().map(Into::into).collect();
        self
    }
}

impl SlideText for SlideContent {
    fn shape_texts(&self) -> &[String] {
        &self.shapes
    }

    fn layout_texts(&self) -> &[String] {
        &self.layout_shapes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_frames_put_layout_last() {
        let slide = SlideContent::new(["Title", "Body"]).with_layout(["Footer"]);
        assert_eq!(slide.text_frames(), vec!["Title", "Body", "Footer"]);
    }
}
