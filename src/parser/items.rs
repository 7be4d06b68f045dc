use regex::Regex;

/// Column separator drawn by `unimported` between the row index and the value
pub const COLUMN_SEPARATOR: &str = "│ ";

/// Extract list items from the rows of a category table.
///
/// Mirrors what `unimported` prints today:
///
/// ```text
///    1 │ lodash
///    2 │ left-pad
/// ```
///
/// The row filter is deliberately loose (an index followed by a space, or any
/// line containing a space), so border lines without spaces are the only ones
/// dropped. Everything after the first separator is kept verbatim.
pub fn parse_items<'a, I>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let Ok(row_re) = Regex::new(r"^\s*\d+ | ") else {
        return Vec::new();
    };

    lines
        .into_iter()
        .filter(|line| row_re.is_match(line))
        .map(|line| {
            line.split(COLUMN_SEPARATOR)
                .skip(1)
                .collect::<Vec<_>>()
                .join(COLUMN_SEPARATOR)
        })
        .collect()
}
