use chrono::NaiveDate;

/// Post dates look like `Jan. 2, 2006`.
pub const POST_DATE_FORMAT: &str = "%b. %d, %Y";

const ELLIPSIS: &str = "...";
const WORD_DELIMITERS: &[char] = &[' ', '.', ',', '!', '?', ':', ';', '\'', '"'];

pub fn parse_post_date(buf: &str) -> Result<NaiveDate, String> {
    match NaiveDate::parse_from_str(buf.trim(), POST_DATE_FORMAT) {
        Ok(date) => Ok(date),
        Err(e) => Err(format!("Unable to parse date {}: {}", buf, e)),
    }
}

pub fn format_post_date(date: &NaiveDate) -> String {
    date.format("%b. %-d, %Y").to_string()
}

/// Cuts an overview so that, ellipsis included, it ends at the first word
/// boundary past `max_len - 3` characters.
///
/// Without any boundary left in the text, the cut happens at `max_len`.
pub fn truncate_overview(overview: &str, max_len: usize) -> String {
    let start = max_len.saturating_sub(ELLIPSIS.len());
    let chars: Vec<char> = overview.chars().collect();
    if chars.len() < start {
        return format!("{}{}", overview, ELLIPSIS);
    }

    let cut = chars[start..].iter()
        .position(|c| WORD_DELIMITERS.contains(c))
        .map(|pos| start + pos)
        .unwrap_or_else(|| max_len.min(chars.len()));

    let mut truncated: String = chars[..cut].iter().collect();
    truncated.push_str(ELLIPSIS);
    truncated
}
