use thiserror::Error;

/// File-level parsing errors. Any [FormatError] rejects the
/// entire element file: the previously loaded catalog is left untouched.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormatError {
    /// Element files carry three lines per satellite (name, line 1, line 2).
    #[error("element file is empty")]
    EmptyFile,

    /// Line count is not a multiple of three.
    #[error("{0} dangling line(s): element records are three lines each")]
    DanglingLines(usize),

    /// A data line does not open with its line number marker (`1 ` or `2 `).
    #[error("line {line}: expected element line to start with \"{marker} \"")]
    BadLineMarker { line: usize, marker: char },

    /// Data lines are 69 columns wide.
    #[error("line {line}: element line is shorter than 69 columns")]
    TruncatedLine { line: usize },

    /// The trailing modulo-10 checksum does not match the line content.
    #[error("line {line}: checksum mismatch (carried {carried}, computed {computed})")]
    ChecksumMismatch {
        line: usize,
        carried: u32,
        computed: u32,
    },
}

/// Per-record initialization errors. An [ElementError] drops that
/// record only: the rest of the batch still loads.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ElementError {
    /// Both data lines must agree on the catalog number.
    #[error("catalog number differs between element lines ({line1}/{line2})")]
    CatalogMismatch { line1: String, line2: String },

    /// The element fields could not be interpreted.
    #[error("unparsable element fields: {0}")]
    InvalidFields(String),

    /// Physically degenerate elements (for example eccentricity outside [0, 1))
    /// for which the propagation constants cannot be formed.
    #[error("degenerate orbit: {0}")]
    DegenerateOrbit(String),

    /// Element epoch does not form a valid calendar date.
    #[error("invalid element epoch")]
    InvalidEpoch,
}

/// Runtime propagation errors. A [PropagationError] skips that
/// satellite for the current frame only.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PropagationError {
    /// The model diverged (decayed or hyperbolic state) at this offset from epoch.
    #[error("propagation diverged at {minutes:.1} min from epoch: {reason}")]
    Diverged { minutes: f64, reason: String },
}
