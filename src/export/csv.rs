//! Delimited-text encoding
//!
//! Header row followed by one line per comment. A field is quoted only when
//! it contains a delimiter, a quote or a line break; inner quotes are doubled.

use super::{CommentRow, COLUMNS};
use std::borrow::Cow;

const DELIMITER: char = ',';

pub fn encode(rows: &[CommentRow]) -> String {
    let mut output = String::new();
    output.push_str(&COLUMNS.join(","));
    output.push('\n');

    for row in rows {
        let fields = row.fields();
        let record: Vec<Cow<'_, str>> = fields.iter().map(|f| escape_csv(f)).collect();
        output.push_str(&record.join(","));
        output.push('\n');
    }

    output
}

fn escape_csv(s: &str) -> Cow<'_, str> {
    if s.contains([DELIMITER, '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", s.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(s)
    }
}
