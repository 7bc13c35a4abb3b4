//! `Domain,Name,Type,Value` tabular format
//!
//! Comma-delimited, one record per line, no quoting. Values that would need quoting are
//! refused on write; malformed rows are collected on read.

use crate::error::{CoreError, CoreResult};
use crate::types::{RowRejection, ValidationRecord};

/// Header line, compared exactly.
pub const HEADER: &str = "Domain,Name,Type,Value";

const FIELD_COUNT: usize = 4;
const FIELD_NAMES: [&str; FIELD_COUNT] = ["Domain", "Name", "Type", "Value"];
const FORBIDDEN: [char; 4] = [',', '\r', '\n', '"'];

/// Rows read from tabular input.
#[derive(Debug, Default)]
pub struct ParsedTable {
    /// Accepted records with their 1-based line number.
    pub records: Vec<(usize, ValidationRecord)>,
    /// Rows that could not become a record.
    pub rejected: Vec<RowRejection>,
}

/// Reject records whose fields cannot be written without quoting.
pub fn check_writable(record: &ValidationRecord) -> CoreResult<()> {
    for (field, value) in [
        ("Domain", record.domain()),
        ("Name", record.name()),
        ("Type", record.record_type()),
        ("Value", record.value()),
    ] {
        if let Some(c) = value.chars().find(|c| FORBIDDEN.contains(c)) {
            return Err(CoreError::TabularFormat(format!(
                "{field} {value:?} contains {c:?}, which the tabular format cannot carry"
            )));
        }
        if value.trim() != value {
            return Err(CoreError::TabularFormat(format!(
                "{field} {value:?} has leading or trailing whitespace"
            )));
        }
    }
    Ok(())
}

/// One row, without line terminator.
pub fn format_row(record: &ValidationRecord) -> CoreResult<String> {
    check_writable(record)?;
    Ok([
        record.domain(),
        record.name(),
        record.record_type(),
        record.value(),
    ]
    .join(","))
}

/// Header plus one row per record, each line `\n`-terminated.
pub fn write_records(records: &[ValidationRecord]) -> CoreResult<String> {
    let mut out = String::with_capacity(HEADER.len() + 1 + records.len() * 96);
    out.push_str(HEADER);
    out.push('\n');
    for record in records {
        out.push_str(&format_row(record)?);
        out.push('\n');
    }
    Ok(out)
}

/// Parse tabular input.
///
/// A missing or mismatched header is an error. Blank lines are skipped and a trailing
/// `\r` is dropped. Rows with the wrong field count, an empty field, a quote character or
/// surrounding whitespace in a field go to [`ParsedTable::rejected`].
pub fn parse(input: &str) -> CoreResult<ParsedTable> {
    let mut lines = input
        .split('\n')
        .enumerate()
        .map(|(i, line)| (i + 1, line.strip_suffix('\r').unwrap_or(line)))
        .filter(|(_, line)| !line.trim().is_empty());

    match lines.next() {
        Some((_, header)) if header == HEADER => {}
        Some((line, header)) => {
            return Err(CoreError::TabularFormat(format!(
                "line {line}: expected header {HEADER:?}, found {header:?}"
            )));
        }
        None => {
            return Err(CoreError::TabularFormat(format!(
                "input is empty, expected header {HEADER:?}"
            )));
        }
    }

    let mut table = ParsedTable::default();
    for (line, text) in lines {
        let fields: Vec<&str> = text.split(',').collect();
        if fields.len() != FIELD_COUNT {
            table.rejected.push(RowRejection {
                line,
                reason: format!("expected {FIELD_COUNT} fields, found {}", fields.len()),
            });
            continue;
        }

        if let Some(reason) = unreadable_field(&fields) {
            table.rejected.push(RowRejection { line, reason });
            continue;
        }

        match ValidationRecord::try_new(fields[0], fields[1], fields[2], fields[3]) {
            Ok(record) => table.records.push((line, record)),
            Err(e) => table.rejected.push(RowRejection {
                line,
                reason: e.to_string(),
            }),
        }
    }

    Ok(table)
}

/// First field the writer could not have produced: quoted or padded.
fn unreadable_field(fields: &[&str]) -> Option<String> {
    FIELD_NAMES.iter().zip(fields).find_map(|(name, value)| {
        if value.contains('"') {
            Some(format!("{name} {value:?} is quoted; quoting is not supported"))
        } else if value.trim() != *value {
            Some(format!("{name} {value:?} has leading or trailing whitespace"))
        } else {
            None
        }
    })
}
