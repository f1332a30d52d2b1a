use std::io::{BufRead, Write};

use anyhow::Result;
use attendance_core::model::typical_working_days;
use attendance_core::{AttendanceRecord, DayOutcome, DetailedEntry};

use crate::prompt::Prompter;
use crate::view;

const MAX_WORKING_DAYS: u32 = 31;

/// Day-by-day marking. Holidays are skipped and shorten the month.
pub fn detailed<R: BufRead, W: Write>(p: &mut Prompter<R, W>) -> Result<AttendanceRecord> {
    p.say(&view::section_header("ENTER DAY-WISE ATTENDANCE"))?;

    let month = p.month()?;
    p.say(&format!(
        "\nTypical working days for {}: {}",
        month.name(),
        typical_working_days(month)
    ))?;
    let planned = p.int_in_range("Enter actual working days this month: ", 1, MAX_WORKING_DAYS)?;

    p.say(&view::mark_legend())?;

    let mut entry = DetailedEntry::new(month, planned);
    while !entry.is_complete() {
        let input = p.day_input(entry.next_day())?;
        if entry.mark(input)? == DayOutcome::Skipped {
            p.say("   (Holiday - skipped)")?;
        }
    }

    let record = entry.finish()?;
    p.say(&view::entry_recorded(&record))?;
    Ok(record)
}

/// Totals only; no day-wise record is kept.
pub fn quick<R: BufRead, W: Write>(p: &mut Prompter<R, W>) -> Result<AttendanceRecord> {
    p.say(&view::section_header("QUICK ATTENDANCE ENTRY"))?;

    let month = p.month()?;
    let total = p.int_in_range("\nEnter total working days: ", 1, MAX_WORKING_DAYS)?;
    let present = p.int_in_range("Enter days present: ", 0, total)?;

    let record = AttendanceRecord::quick(month, total, present)?;
    p.say(&view::entry_recorded(&record))?;
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use attendance_core::{EntryType, Month};
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_detailed_entry_with_holiday() {
        // February, 5 planned days: P, H, A, P, P
        let mut p = prompter("2\n5\np\nh\na\nP\nP\n");
        let record = detailed(&mut p).unwrap();

        assert_eq!(record.month(), Month::February);
        assert_eq!(record.total_days(), 4);
        assert_eq!(record.days_present(), 3);
        assert_eq!(record.days_absent(), 1);
        assert_eq!(record.entry_type(), EntryType::Detailed);

        let out = String::from_utf8_lossy(p.output()).to_string();
        assert!(out.contains("Typical working days for February: 20"));
        assert!(out.contains("(Holiday - skipped)"));
    }

    #[test]
    fn test_quick_entry_caps_present_at_total() {
        let mut p = prompter("3\n20\n21\n14\n");
        let record = quick(&mut p).unwrap();

        assert_eq!(record.month(), Month::March);
        assert_eq!(record.total_days(), 20);
        assert_eq!(record.days_present(), 14);
        assert_eq!(record.days_absent(), 6);
        assert!(record.daily_record().is_empty());

        let out = String::from_utf8_lossy(p.output()).to_string();
        assert!(out.contains("Enter a number between 0 and 20"));
    }
}
