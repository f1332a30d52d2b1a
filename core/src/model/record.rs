use std::fmt;
use std::str::FromStr;

use chrono::Month;
use serde::{Deserialize, Serialize};

use crate::error::AttendanceError;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayMark {
    Present,
    Absent,
}

impl DayMark {
    pub fn code(self) -> &'static str {
        match self {
            DayMark::Present => "P",
            DayMark::Absent => "A",
        }
    }
}

impl FromStr for DayMark {
    type Err = AttendanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "P" => Ok(DayMark::Present),
            "A" => Ok(DayMark::Absent),
            other => Err(AttendanceError::Unrecognized {
                kind: "day mark",
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    Detailed,
    Quick,
}

impl EntryType {
    pub fn as_str(self) -> &'static str {
        match self {
            EntryType::Detailed => "detailed",
            EntryType::Quick => "quick",
        }
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntryType {
    type Err = AttendanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "detailed" => Ok(EntryType::Detailed),
            "quick" => Ok(EntryType::Quick),
            other => Err(AttendanceError::Unrecognized {
                kind: "entry type",
                value: other.to_string(),
            }),
        }
    }
}

/// One month of attendance. Built only through the validated constructors,
/// so `days_absent == total_days - days_present` always holds and a detailed
/// record always carries exactly `total_days` marks.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct AttendanceRecord {
    month: Month,
    total_days: u32,
    days_present: u32,
    days_absent: u32,
    daily_record: Vec<DayMark>,
    entry_type: EntryType,
}

impl AttendanceRecord {
    /// Aggregate-only entry: absent days are derived by subtraction.
    pub fn quick(month: Month, total_days: u32, days_present: u32) -> Result<Self, AttendanceError> {
        if days_present > total_days {
            return Err(AttendanceError::invalid(format!(
                "{} days present exceeds {} working days",
                days_present, total_days
            )));
        }

        Ok(Self {
            month,
            total_days,
            days_present,
            days_absent: total_days - days_present,
            daily_record: Vec::new(),
            entry_type: EntryType::Quick,
        })
    }

    /// Day-by-day entry: both counters are recomputed from the marks.
    pub fn detailed(month: Month, daily_record: Vec<DayMark>) -> Self {
        let days_present = daily_record
            .iter()
            .filter(|m| **m == DayMark::Present)
            .count() as u32;
        let total_days = daily_record.len() as u32;

        Self {
            month,
            total_days,
            days_present,
            days_absent: total_days - days_present,
            daily_record,
            entry_type: EntryType::Detailed,
        }
    }

    /// Rebuilds a record from stored fields, rejecting any combination the
    /// two entry flows could not have produced.
    pub fn from_parts(
        month: Month,
        total_days: u32,
        days_present: u32,
        days_absent: u32,
        entry_type: EntryType,
        daily_record: Vec<DayMark>,
    ) -> Result<Self, AttendanceError> {
        let record = match entry_type {
            EntryType::Quick => {
                if !daily_record.is_empty() {
                    return Err(AttendanceError::invalid(
                        "quick entry must not carry a day-wise record",
                    ));
                }
                Self::quick(month, total_days, days_present)?
            }
            EntryType::Detailed => {
                if daily_record.len() as u32 != total_days {
                    return Err(AttendanceError::invalid(format!(
                        "day-wise record has {} marks for {} working days",
                        daily_record.len(),
                        total_days
                    )));
                }
                Self::detailed(month, daily_record)
            }
        };

        if record.days_present != days_present {
            return Err(AttendanceError::invalid(format!(
                "stored {} days present, marks count {}",
                days_present, record.days_present
            )));
        }
        if record.days_absent != days_absent {
            return Err(AttendanceError::invalid(format!(
                "stored {} days absent, expected {}",
                days_absent, record.days_absent
            )));
        }

        Ok(record)
    }

    pub fn month(&self) -> Month {
        self.month
    }

    pub fn month_name(&self) -> &'static str {
        self.month.name()
    }

    pub fn total_days(&self) -> u32 {
        self.total_days
    }

    pub fn days_present(&self) -> u32 {
        self.days_present
    }

    pub fn days_absent(&self) -> u32 {
        self.days_absent
    }

    pub fn daily_record(&self) -> &[DayMark] {
        &self.daily_record
    }

    pub fn entry_type(&self) -> EntryType {
        self.entry_type
    }
}
