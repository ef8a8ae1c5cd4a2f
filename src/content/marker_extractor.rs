use crate::content::content_file::ContentFile;
use crate::content::metadata_extractor::{ExtractError, MetadataExtractor};
use crate::content::parsing_utils::{extract_comment, extract_date, extract_title, header_lines};
use crate::post::Post;
use crate::text_utils::truncate_overview;

/// Finds post metadata by matching the literal markers authors put in their posts:
///
/// ```html
/// <!--A short overview of the post-->
/// <!--tag1 tag2-->
/// <h1>Post title</h1>
/// <p id='content-date'>Jan. 2, 2006, Monday</p>
/// <div id='content-wrapper'>
/// ...
/// ```
pub struct MarkerExtractor {
    pub overview_length: usize,
}

impl MarkerExtractor {
    pub fn new(overview_length: usize) -> MarkerExtractor {
        MarkerExtractor {
            overview_length,
        }
    }
}

impl Default for MarkerExtractor {
    fn default() -> Self {
        MarkerExtractor::new(100)
    }
}

impl MetadataExtractor for MarkerExtractor {
    fn extract(&self, content_file: &ContentFile) -> Result<Post, ExtractError> {
        let file_name = &content_file.file_name;
        let content = content_file.raw_content.as_str();

        let title = match extract_title(content) {
            Some(title) if !title.trim().is_empty() => title.to_string(),
            _ => return Err(ExtractError::TitleNotFound(file_name.clone())),
        };

        let date = match extract_date(content) {
            Some(date) if !date.trim().is_empty() => date.to_string(),
            _ => return Err(ExtractError::DateNotFound(file_name.clone())),
        };

        let headers = match header_lines(content) {
            Some(headers) => headers,
            None => return Err(ExtractError::ContentWrapperNotFound(file_name.clone())),
        };

        let overview = match headers.first().and_then(|line| extract_comment(line)) {
            Some(overview) => overview,
            None => return Err(ExtractError::OverviewNotFound(file_name.clone())),
        };

        let tags = match headers.get(1).and_then(|line| extract_comment(line)) {
            Some(tags) => tags.to_string(),
            None => return Err(ExtractError::TagNotFound(file_name.clone())),
        };

        Ok(Post {
            tags,
            file_name: file_name.clone(),
            title,
            date,
            overview: truncate_overview(overview, self.overview_length),
        })
    }
}
