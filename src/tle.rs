use itertools::Itertools;
use log::debug;

#[cfg(feature = "serde")]
use serde::Deserialize;

use crate::error::FormatError;

/// Element data lines are fixed-width.
const LINE_WIDTH: usize = 69;

/// Catalog number occupies columns 3-7 of both data lines.
const CATALOG_FIELD: std::ops::Range<usize> = 2..7;

/// One raw three-line element record, validated at the file level
/// (markers, width, checksums) but not yet interpreted physically.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
pub struct ElementSet {
    /// Satellite name, from the leading name line (trimmed).
    pub name: String,
    /// First data line, 69 columns.
    pub line1: String,
    /// Second data line, 69 columns.
    pub line2: String,
}

impl ElementSet {
    /// Catalog number as printed on the second data line.
    /// Satellites are identified by this string throughout.
    pub fn catalog_number(&self) -> &str {
        self.line2.get(CATALOG_FIELD).unwrap_or_default().trim()
    }

    pub(crate) fn catalog_number_line1(&self) -> &str {
        self.line1.get(CATALOG_FIELD).unwrap_or_default().trim()
    }
}

/// Modulo-10 checksum of an element line: decimal digits count their
/// value, minus signs count one, everything else counts zero. The last
/// column carries the expected value and is excluded from the sum.
pub(crate) fn line_checksum(line: &str) -> u32 {
    line.chars()
        .take(LINE_WIDTH - 1)
        .map(|c| match c {
            '-' => 1,
            _ => c.to_digit(10).unwrap_or(0),
        })
        .sum::<u32>()
        % 10
}

fn validate_data_line(line: &str, number: usize, marker: char) -> Result<(), FormatError> {
    if line.chars().next() != Some(marker) || line.chars().nth(1) != Some(' ') {
        return Err(FormatError::BadLineMarker {
            line: number,
            marker,
        });
    }
    if line.len() < LINE_WIDTH {
        return Err(FormatError::TruncatedLine { line: number });
    }
    let carried = line
        .chars()
        .nth(LINE_WIDTH - 1)
        .and_then(|c| c.to_digit(10))
        .unwrap_or(10);
    let computed = line_checksum(line);
    if carried != computed {
        return Err(FormatError::ChecksumMismatch {
            line: number,
            carried,
            computed,
        });
    }
    Ok(())
}

/// Parses a complete element file: three lines per satellite
/// (name line, then the two data lines). Blank lines are ignored,
/// `\r` terminators tolerated. Any violation rejects the whole file;
/// on success the records come back in file order.
pub fn parse_element_file(text: &str) -> Result<Vec<ElementSet>, FormatError> {
    let lines = text
        .lines()
        .enumerate()
        .map(|(nth, line)| (nth + 1, line.trim_end_matches('\r')))
        .filter(|(_, line)| !line.trim().is_empty())
        .collect::<Vec<_>>();

    if lines.is_empty() {
        return Err(FormatError::EmptyFile);
    }
    if lines.len() % 3 != 0 {
        return Err(FormatError::DanglingLines(lines.len() % 3));
    }

    let mut records = Vec::with_capacity(lines.len() / 3);

    for (name, line1, line2) in lines.into_iter().tuples() {
        validate_data_line(line1.1, line1.0, '1')?;
        validate_data_line(line2.1, line2.0, '2')?;
        records.push(ElementSet {
            name: name.1.trim().to_string(),
            line1: line1.1.to_string(),
            line2: line2.1.to_string(),
        });
    }

    debug!("parsed {} element record(s)", records.len());
    Ok(records)
}
