pub mod content_file;
pub mod marker_extractor;
pub mod metadata_extractor;
pub mod parsing_utils;
