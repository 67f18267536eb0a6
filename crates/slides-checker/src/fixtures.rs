//! Sample service inputs
//!
//! Defaults offered to users filling in the upload form, also used by tests.

/// Order of service for the 22 May 2022 service, without a family declaration
pub const DEFAULT_ORDER_OF_SERVICE: &str = "Opening Words\t1\t
Opening Song\t4\tBehold Our God
Family Confession\t2\t#11 Confession of Sin (Slide 17 & 18)
Family Prayer\t4\tRefer to Prayer Points Tab in this document (Usually updated by Thu)
Family Business\t5\tRefer to Family Business Tab
Bible Reading \t4\tDaniel 5
Sermon\t30\tPreacher: Denesh
Closing Song\t4\tOnly a Holy God
Closing Words\t1\t
Discuss in groups\t5\t
Dismissal\t\t";

pub const SAMPLE_SERVICE_DATE: &str = "22 May 2022";

pub const SAMPLE_DISCUSSION_QUESTIONS: &str = "1. How have you been confronted with your own arrogance before God today? How have you been challenged to repent?
2. How has our passage been a comfort if we are seeking to live for God in this anti-God world?";
