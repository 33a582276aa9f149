use itertools::Itertools;
use log::{debug, warn};

use crate::error::{ElementError, FormatError};
use crate::propagator::{GravityModel, OrbitalState};
use crate::tle::{parse_element_file, ElementSet};

/// One satellite carried by the [Registry].
pub struct SatelliteEntry {
    /// Catalog number, as printed on the element lines.
    pub id: String,
    /// Satellite name from the element file.
    pub name: String,
    /// Initialized propagation state.
    pub state: OrbitalState,
}

/// Outcome of a bulk load.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadReport {
    /// Number of records that survived initialization.
    pub loaded: usize,
    /// Per-record failures, by satellite name. These records were
    /// dropped; the rest of the batch loaded normally.
    pub dropped: Vec<(String, ElementError)>,
}

/// Name entry for satellite selector widgets: sorted name plus the
/// registry index it refers back to.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectorEntry {
    pub name: String,
    /// Index into the registry, valid until the next load.
    pub index: usize,
}

/// Satellite catalog. Starts empty; each load replaces the whole
/// catalog, never merges into it.
#[derive(Default)]
pub struct Registry {
    entries: Vec<SatelliteEntry>,
}

impl Registry {
    /// Builds an empty registry: ticks produce no samples until the
    /// first successful load.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses an element file and loads it. A [FormatError] rejects the
    /// file as a whole and leaves the current catalog untouched.
    pub fn load_from_text(
        &mut self,
        text: &str,
        gravity: GravityModel,
    ) -> Result<LoadReport, FormatError> {
        let records = parse_element_file(text)?;
        Ok(self.load_from_elements(&records, gravity))
    }

    /// Replaces the catalog with the given records. Records that fail
    /// physical initialization are dropped (logged and reported), the
    /// others load normally. The swap happens only once the entire new
    /// list is built.
    pub fn load_from_elements(&mut self, records: &[ElementSet], gravity: GravityModel) -> LoadReport {
        let mut entries = Vec::with_capacity(records.len());
        let mut dropped = Vec::new();

        for record in records {
            match OrbitalState::new(record, gravity) {
                Ok(state) => {
                    entries.push(SatelliteEntry {
                        id: record.catalog_number().to_string(),
                        name: record.name.clone(),
                        state,
                    });
                },
                Err(e) => {
                    warn!("{}: dropped from load: {}", record.name, e);
                    dropped.push((record.name.clone(), e));
                },
            }
        }

        debug!(
            "catalog replaced: {} satellite(s) loaded, {} dropped",
            entries.len(),
            dropped.len()
        );

        self.entries = entries;
        LoadReport {
            loaded: self.entries.len(),
            dropped,
        }
    }

    /// Names in ascending order for selector widgets. Byte ordinal
    /// comparison (case sensitive, so `Z` sorts before `a`), ties kept
    /// in catalog order.
    pub fn list_sorted_by_name(&self) -> Vec<SelectorEntry> {
        self.entries
            .iter()
            .enumerate()
            .map(|(index, entry)| SelectorEntry {
                name: entry.name.clone(),
                index,
            })
            .sorted_by(|a, b| a.name.cmp(&b.name))
            .collect()
    }

    /// Looks a satellite up by catalog number. When duplicates were
    /// loaded, the first (file order) wins.
    pub fn get_by_id(&self, id: &str) -> Option<&SatelliteEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Looks a satellite up by catalog position.
    pub fn get_by_index(&self, index: usize) -> Option<&SatelliteEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in catalog (file) order.
    pub fn iter(&self) -> impl Iterator<Item = &SatelliteEntry> {
        self.entries.iter()
    }
}
