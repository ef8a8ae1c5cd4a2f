use thiserror::Error;

use crate::content::content_file::ContentFile;
use crate::post::Post;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExtractError {
    #[error("Title not found - file={0}")]
    TitleNotFound(String),
    #[error("Date not found - file={0}")]
    DateNotFound(String),
    #[error("Overview not found - file={0}")]
    OverviewNotFound(String),
    #[error("Tag not found - file={0}")]
    TagNotFound(String),
    #[error("Content wrapper not found - file={0}")]
    ContentWrapperNotFound(String),
    #[error("Unable to parse date '{0}' - file={1}")]
    InvalidDate(String, String),
}

/// Turns a post source file into its [`Post`] metadata.
pub trait MetadataExtractor {
    fn extract(&self, content_file: &ContentFile) -> Result<Post, ExtractError>;
}
