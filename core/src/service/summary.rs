use serde::Serialize;

use crate::model::record::{AttendanceRecord, EntryType};
use crate::projection::percentage;
use crate::status::{classify, delta_from_minimum, is_eligible, ReportAdvice, StatusTier, MINIMUM_ATTENDANCE_PERCENT};

/// Everything the summary, status check and monthly report show.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct AttendanceSummary {
    pub month: &'static str,
    pub total_days: u32,
    pub days_present: u32,
    pub days_absent: u32,
    pub entry_type: EntryType,
    pub percentage: f64,
    pub minimum: f64,
    pub tier: StatusTier,
    pub delta_from_minimum: f64,
    pub eligible: bool,
    pub advice: ReportAdvice,
}

impl AttendanceSummary {
    pub fn from_record(record: &AttendanceRecord) -> Self {
        let percentage = percentage(record.days_present(), record.total_days());

        Self {
            month: record.month_name(),
            total_days: record.total_days(),
            days_present: record.days_present(),
            days_absent: record.days_absent(),
            entry_type: record.entry_type(),
            percentage,
            minimum: MINIMUM_ATTENDANCE_PERCENT,
            tier: classify(percentage),
            delta_from_minimum: delta_from_minimum(percentage, MINIMUM_ATTENDANCE_PERCENT),
            eligible: is_eligible(percentage),
            advice: ReportAdvice::for_percentage(percentage),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Month;

    #[test]
    fn test_summary_of_strong_month() {
        let record = AttendanceRecord::quick(Month::October, 18, 17).unwrap();
        let summary = AttendanceSummary::from_record(&record);

        assert_eq!(summary.month, "October");
        assert_eq!(summary.percentage, 94.44);
        assert_eq!(summary.tier, StatusTier::Excellent);
        assert_eq!(summary.delta_from_minimum, 19.44);
        assert!(summary.eligible);
        assert_eq!(summary.advice, ReportAdvice::Outstanding);
    }

    #[test]
    fn test_summary_of_weak_month() {
        let record = AttendanceRecord::quick(Month::October, 20, 14).unwrap();
        let summary = AttendanceSummary::from_record(&record);

        assert_eq!(summary.percentage, 70.0);
        assert_eq!(summary.tier, StatusTier::Critical);
        assert_eq!(summary.delta_from_minimum, -5.0);
        assert!(!summary.eligible);
        assert_eq!(summary.advice, ReportAdvice::ImproveNow);
    }

    #[test]
    fn test_summary_serializes_entry_type_lowercase() {
        let record = AttendanceRecord::quick(Month::October, 20, 15).unwrap();
        let json = serde_json::to_value(AttendanceSummary::from_record(&record)).unwrap();
        assert_eq!(json["entry_type"], "quick");
        assert_eq!(json["tier"], "Satisfactory");
        assert_eq!(json["percentage"], 75.0);
    }
}
