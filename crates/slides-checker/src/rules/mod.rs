pub mod dates;
pub mod discussion;
pub mod section_headers;
