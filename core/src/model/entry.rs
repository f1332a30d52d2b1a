use std::str::FromStr;

use chrono::Month;

use crate::error::AttendanceError;
use crate::model::record::{AttendanceRecord, DayMark};

/// What the user typed for one day during day-wise entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayInput {
    Present,
    Absent,
    Holiday,
}

impl FromStr for DayInput {
    type Err = AttendanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "P" => Ok(DayInput::Present),
            "A" => Ok(DayInput::Absent),
            "H" => Ok(DayInput::Holiday),
            other => Err(AttendanceError::Unrecognized {
                kind: "day input",
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayOutcome {
    Recorded(DayMark),
    /// Holiday: not appended, and the month has one working day fewer.
    Skipped,
}

/// Day-by-day collection of a month. The caller keeps asking for
/// `next_day()` until `is_complete()`, then calls `finish()`.
#[derive(Debug, Clone)]
pub struct DetailedEntry {
    month: Month,
    working_days: u32,
    marks: Vec<DayMark>,
}

impl DetailedEntry {
    pub fn new(month: Month, planned_days: u32) -> Self {
        Self {
            month,
            working_days: planned_days,
            marks: Vec::with_capacity(planned_days as usize),
        }
    }

    pub fn month(&self) -> Month {
        self.month
    }

    /// Planned days minus holidays seen so far.
    pub fn working_days(&self) -> u32 {
        self.working_days
    }

    /// 1-based number of the day awaiting a mark.
    pub fn next_day(&self) -> u32 {
        self.marks.len() as u32 + 1
    }

    pub fn is_complete(&self) -> bool {
        self.marks.len() as u32 >= self.working_days
    }

    pub fn mark(&mut self, input: DayInput) -> Result<DayOutcome, AttendanceError> {
        if self.is_complete() {
            return Err(AttendanceError::EntryComplete);
        }

        let outcome = match input {
            DayInput::Present => DayOutcome::Recorded(DayMark::Present),
            DayInput::Absent => DayOutcome::Recorded(DayMark::Absent),
            DayInput::Holiday => {
                self.working_days -= 1;
                DayOutcome::Skipped
            }
        };

        if let DayOutcome::Recorded(mark) = outcome {
            self.marks.push(mark);
        }
        Ok(outcome)
    }

    pub fn finish(self) -> Result<AttendanceRecord, AttendanceError> {
        if !self.is_complete() {
            return Err(AttendanceError::EntryIncomplete {
                marked: self.marks.len() as u32,
                expected: self.working_days,
            });
        }
        Ok(AttendanceRecord::detailed(self.month, self.marks))
    }
}
