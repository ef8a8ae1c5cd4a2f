use std::fmt;
use std::fmt::{Display, Formatter};

use chrono::NaiveDate;

use crate::content::metadata_extractor::ExtractError;
use crate::text_utils::parse_post_date;

/// Metadata of one blog entry, as found in its source file.
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub tags: String,
    /// Base name of the source file. Also the name of the generated page.
    pub file_name: String,
    pub title: String,
    pub date: String,
    pub overview: String,
}

impl Display for Post {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "file={}, date={}, tags={}\ntitle={}\noverview={}",
               self.file_name,
               self.date,
               self.tags,
               self.title,
               self.overview
        )
    }
}

impl Post {
    pub fn parsed_date(&self) -> Result<NaiveDate, ExtractError> {
        parse_post_date(&self.date).map_err(|_| ExtractError::InvalidDate(self.date.clone(), self.file_name.clone()))
    }
}

/// Orders posts most recent first. Posts sharing a date keep their relative order.
pub fn sort_by_date(posts: Vec<Post>) -> Result<Vec<Post>, ExtractError> {
    let mut dated = Vec::with_capacity(posts.len());
    for post in posts {
        let date = post.parsed_date()?;
        dated.push((date, post));
    }

    dated.sort_by(|(a, _), (b, _)| b.cmp(a));
    Ok(dated.into_iter().map(|(_, post)| post).collect())
}
