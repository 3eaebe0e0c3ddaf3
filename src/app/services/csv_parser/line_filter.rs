//! Blank and comment line filtering
//!
//! The first stage of the pipeline: reduces the raw line sequence of a file
//! to the lines that carry content. Order is preserved and no other
//! transformation is applied.

use crate::constants::COMMENT_PREFIX;

/// Filter the ordered line sequence of a file down to content lines.
///
/// A line is dropped when it is empty or whitespace-only, or when its
/// leading-whitespace-stripped content starts with `#`. An empty result is
/// valid and means the file holds no data.
pub fn filter_content_lines<'a, I>(lines: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .filter(|line| {
            let trimmed = line.trim_start();
            !trimmed.is_empty() && !trimmed.starts_with(COMMENT_PREFIX)
        })
        .collect()
}
