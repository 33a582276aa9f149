//! Element fixtures, derived from the well-known ISS reference record.

use crate::tle::{line_checksum, ElementSet};

pub const ISS_NAME: &str = "ISS (ZARYA)";
pub const ISS_LINE1: &str =
    "1 25544U 98067A   08264.51782528 -.00002182  00000-0 -11606-4 0  2927";
pub const ISS_LINE2: &str =
    "2 25544  51.6416 247.4627 0006703 130.5360 325.0288 15.72125391563537";

/// Catalog number field of both data lines.
const CATALOG: usize = 2;
/// B* drag field of line 1.
const DRAG: usize = 53;

pub fn iss_record() -> ElementSet {
    ElementSet {
        name: ISS_NAME.to_string(),
        line1: ISS_LINE1.to_string(),
        line2: ISS_LINE2.to_string(),
    }
}

/// Joins records into element file text.
pub fn element_text(records: &[(&str, &str, &str)]) -> String {
    records
        .iter()
        .map(|(name, line1, line2)| format!("{name}\n{line1}\n{line2}\n"))
        .collect()
}

/// Splices `replacement` into a data line at byte `start`, then rewrites
/// the trailing checksum so the line stays valid.
pub fn patch_data_line(line: &str, start: usize, replacement: &str) -> String {
    let mut patched = String::with_capacity(line.len());
    patched.push_str(&line[..start]);
    patched.push_str(replacement);
    patched.push_str(&line[start + replacement.len()..]);
    let checksum = line_checksum(&patched);
    patched.truncate(68);
    patched.push_str(&checksum.to_string());
    patched
}

/// The ISS record under a different catalog number and name, so tests
/// can populate arbitrarily large catalogs.
pub fn numbered_record(catalog_number: u32, name: &str) -> ElementSet {
    let field = format!("{catalog_number:05}");
    ElementSet {
        name: name.to_string(),
        line1: patch_data_line(ISS_LINE1, CATALOG, &field),
        line2: patch_data_line(ISS_LINE2, CATALOG, &field),
    }
}

/// A physically valid record whose enormous drag term makes the model
/// diverge when propagated years past epoch.
pub fn decaying_record(catalog_number: u32, name: &str) -> ElementSet {
    let mut record = numbered_record(catalog_number, name);
    record.line1 = patch_data_line(&record.line1, DRAG, " 99999-0");
    record
}
