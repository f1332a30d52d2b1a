//! Six-line flat file layout for one record:
//!
//! ```text
//! March
//! 20
//! 14
//! 6
//! detailed
//! P,A,P,...
//! ```
//!
//! The last line is empty for quick entries.

use std::str::FromStr;

use chrono::Month;

use crate::error::AttendanceError;
use crate::model::record::{AttendanceRecord, DayMark, EntryType};

const LINE_COUNT: usize = 6;

pub fn encode_record(record: &AttendanceRecord) -> String {
    let daily: Vec<&str> = record.daily_record().iter().map(|m| m.code()).collect();

    format!(
        "{}\n{}\n{}\n{}\n{}\n{}\n",
        record.month_name(),
        record.total_days(),
        record.days_present(),
        record.days_absent(),
        record.entry_type(),
        daily.join(",")
    )
}

pub fn decode_record(content: &str) -> Result<AttendanceRecord, AttendanceError> {
    let lines: Vec<&str> = content.lines().map(str::trim).collect();
    if lines.len() < LINE_COUNT {
        return Err(AttendanceError::Parse {
            line: lines.len() + 1,
            reason: format!("expected {} lines, found {}", LINE_COUNT, lines.len()),
        });
    }

    let month = lines[0].parse::<Month>().map_err(|_| AttendanceError::Parse {
        line: 1,
        reason: format!("unknown month '{}'", lines[0]),
    })?;
    let total_days = parse_field::<u32>(lines[1], 2)?;
    let days_present = parse_field::<u32>(lines[2], 3)?;
    let days_absent = parse_field::<u32>(lines[3], 4)?;
    let entry_type = parse_field::<EntryType>(lines[4], 5)?;

    let daily_record = if lines[5].is_empty() {
        Vec::new()
    } else {
        lines[5]
            .split(',')
            .map(|code| parse_field::<DayMark>(code, 6))
            .collect::<Result<Vec<_>, _>>()?
    };

    AttendanceRecord::from_parts(
        month,
        total_days,
        days_present,
        days_absent,
        entry_type,
        daily_record,
    )
}

fn parse_field<T>(value: &str, line: usize) -> Result<T, AttendanceError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value.parse::<T>().map_err(|e| AttendanceError::Parse {
        line,
        reason: format!("'{}': {}", value, e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::record::DayMark::{Absent, Present};
    use proptest::prelude::*;

    #[test]
    fn test_encode_quick_layout() {
        let record = AttendanceRecord::quick(Month::March, 20, 14).unwrap();
        assert_eq!(encode_record(&record), "March\n20\n14\n6\nquick\n\n");
    }

    #[test]
    fn test_encode_detailed_layout() {
        let record = AttendanceRecord::detailed(Month::July, vec![Present, Absent, Present]);
        assert_eq!(encode_record(&record), "July\n3\n2\n1\ndetailed\nP,A,P\n");
    }

    #[test]
    fn test_decode_tolerates_crlf_and_padding() {
        let record = decode_record("March \r\n20\r\n 14\r\n6\r\nquick\r\n\r\n").unwrap();
        assert_eq!(record, AttendanceRecord::quick(Month::March, 20, 14).unwrap());
    }

    #[test]
    fn test_decode_requires_six_lines() {
        // A quick record missing its empty last line.
        let err = decode_record("March\n20\n14\n6\nquick\n").unwrap_err();
        assert!(matches!(err, AttendanceError::Parse { line: 6, .. }));
        assert!(decode_record("").is_err());
    }

    #[test]
    fn test_decode_reports_bad_line() {
        let err = decode_record("March\ntwenty\n14\n6\nquick\n\n").unwrap_err();
        assert!(matches!(err, AttendanceError::Parse { line: 2, .. }));

        let err = decode_record("Marchember\n20\n14\n6\nquick\n\n").unwrap_err();
        assert!(matches!(err, AttendanceError::Parse { line: 1, .. }));

        let err = decode_record("July\n2\n1\n1\ndetailed\nP,H\n").unwrap_err();
        assert!(matches!(err, AttendanceError::Parse { line: 6, .. }));

        let err = decode_record("July\n2\n1\n1\nmonthly\n\n").unwrap_err();
        assert!(matches!(err, AttendanceError::Parse { line: 5, .. }));
    }

    #[test]
    fn test_decode_rejects_inconsistent_counts() {
        let err = decode_record("March\n20\n14\n7\nquick\n\n").unwrap_err();
        assert!(matches!(err, AttendanceError::InvalidRecord { .. }));
    }

    fn arb_record() -> impl Strategy<Value = AttendanceRecord> {
        let month = (1u8..=12).prop_map(|n| Month::try_from(n).unwrap());
        let detailed = (
            month.clone(),
            prop::collection::vec(prop::bool::ANY, 0..=31),
        )
            .prop_map(|(m, days)| {
                let marks = days
                    .into_iter()
                    .map(|p| if p { Present } else { Absent })
                    .collect();
                AttendanceRecord::detailed(m, marks)
            });
        let quick = (month, 1u32..=31)
            .prop_flat_map(|(m, total)| (Just(m), Just(total), 0..=total))
            .prop_map(|(m, total, present)| AttendanceRecord::quick(m, total, present).unwrap());
        prop_oneof![detailed, quick]
    }

    proptest! {
        #[test]
        fn prop_round_trip(record in arb_record()) {
            let decoded = decode_record(&encode_record(&record)).unwrap();
            prop_assert_eq!(decoded, record);
        }
    }
}
