use lazy_static::lazy_static;
use regex::Regex;

/// Everything before this marker is the post header.
pub const CONTENT_WRAPPER_MARKER: &str = "<div id='content-wrapper'>";

lazy_static! {
    static ref TITLE_REGEX: Regex = Regex::new(r"<h1>(?P<title>.*)</h1>").unwrap();
    static ref DATE_REGEX: Regex = Regex::new(r"<p id='content-date'>(?P<date>.*)</p>").unwrap();
    static ref COMMENT_REGEX: Regex = Regex::new(r"<!--(?P<value>.*)-->").unwrap();
}

fn capture<'a>(regex: &Regex, text: &'a str, name: &str) -> Option<&'a str> {
    regex.captures(text).and_then(|cap| cap.name(name).map(|v| v.as_str()))
}

pub fn extract_title(content: &str) -> Option<&str> {
    capture(&TITLE_REGEX, content, "title")
}

/// The date paragraph ends with the day of week (`Jan. 2, 2006, Monday`), which is dropped.
pub fn extract_date(content: &str) -> Option<&str> {
    let date = capture(&DATE_REGEX, content, "date")?;
    match date.rfind(',') {
        Some(idx) => Some(&date[..idx]),
        None => Some(date),
    }
}

pub fn extract_comment(line: &str) -> Option<&str> {
    capture(&COMMENT_REGEX, line, "value")
}

/// Non-blank, trimmed lines found before the content wrapper.
/// `None` when the wrapper is missing.
pub fn header_lines(content: &str) -> Option<Vec<&str>> {
    let end = content.find(CONTENT_WRAPPER_MARKER)?;
    let lines = content[..end].lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    Some(lines)
}
