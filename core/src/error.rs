use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AttendanceError {
    /// A record whose counters contradict each other.
    #[error("invalid attendance record: {reason}")]
    InvalidRecord { reason: String },

    #[error("no attendance data found, enter attendance first")]
    NoRecord,

    /// Malformed line in the saved data file (1-based).
    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("unrecognized {kind}: '{value}'")]
    Unrecognized { kind: &'static str, value: String },

    #[error("day-wise entry is already complete")]
    EntryComplete,

    #[error("day-wise entry incomplete: {marked} of {expected} days marked")]
    EntryIncomplete { marked: u32, expected: u32 },
}

impl AttendanceError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        AttendanceError::InvalidRecord {
            reason: reason.into(),
        }
    }
}
