//! Excel workbook encoding

use super::{format_timestamp, CommentRow, COLUMNS};
use rust_xlsxwriter::{Format, Workbook, XlsxError};

/// Name of the single worksheet
pub const SHEET_NAME: &str = "Comments";

/// Encode rows as an `.xlsx` workbook: one bold header row, then one row per
/// comment. Counters are numeric cells, timestamps RFC 3339 text.
pub fn encode(rows: &[CommentRow]) -> Result<Vec<u8>, XlsxError> {
    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();

    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;

    for (col, name) in (0u16..).zip(COLUMNS) {
        sheet.write_string_with_format(0, col, name, &header)?;
    }

    for (row, comment) in (1u32..).zip(rows) {
        sheet.write_string(row, 0, &comment.author)?;
        sheet.write_string(row, 1, &comment.text)?;
        sheet.write_number(row, 2, comment.likes as f64)?;
        sheet.write_string(row, 3, format_timestamp(&comment.published_at))?;
        sheet.write_number(row, 4, comment.reply_count as f64)?;
    }

    workbook.save_to_buffer()
}
