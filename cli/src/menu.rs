use std::io::{self, BufRead, Write};

use anyhow::Result;
use attendance_core::{AttendanceError, AttendanceRecord, AttendanceService, RecordRepository, Target};
use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::style::Stylize;
use crossterm::terminal::{Clear, ClearType};
use tracing::warn;

use crate::entry;
use crate::prompt::Prompter;
use crate::view;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuItem {
    DayWiseEntry,
    QuickEntry,
    Summary,
    StatusCheck,
    DailyRecord,
    DaysNeeded,
    SafeLeaves,
    MonthlyReport,
    Save,
    Exit,
}

impl MenuItem {
    const ALL: [MenuItem; 10] = [
        MenuItem::DayWiseEntry,
        MenuItem::QuickEntry,
        MenuItem::Summary,
        MenuItem::StatusCheck,
        MenuItem::DailyRecord,
        MenuItem::DaysNeeded,
        MenuItem::SafeLeaves,
        MenuItem::MonthlyReport,
        MenuItem::Save,
        MenuItem::Exit,
    ];

    fn label(self) -> &'static str {
        match self {
            MenuItem::DayWiseEntry => "Enter Attendance (Day-wise)",
            MenuItem::QuickEntry => "Quick Entry (Total Days)",
            MenuItem::Summary => "View Attendance Summary",
            MenuItem::StatusCheck => "Check 75% Status",
            MenuItem::DailyRecord => "View Day-wise Record",
            MenuItem::DaysNeeded => "Calculate Days Needed",
            MenuItem::SafeLeaves => "Calculate Safe Leaves",
            MenuItem::MonthlyReport => "View Monthly Report",
            MenuItem::Save => "Save Data",
            MenuItem::Exit => "Exit",
        }
    }

    fn from_choice(choice: u32) -> Option<MenuItem> {
        let index = usize::try_from(choice).ok()?.checked_sub(1)?;
        MenuItem::ALL.get(index).copied()
    }
}

pub fn run<R: RecordRepository>(service: &mut AttendanceService<R>) -> Result<()> {
    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());
    run_session(service, &mut prompter)
}

pub fn run_session<R, I, W>(service: &mut AttendanceService<R>, p: &mut Prompter<I, W>) -> Result<()>
where
    R: RecordRepository,
    I: BufRead,
    W: Write,
{
    p.say(&view::welcome())?;
    if service.current().is_some() {
        p.say(&format!("\n{} Previous attendance data loaded successfully!", "✓".green()))?;
    } else {
        p.say("\n○ No previous data found. Start fresh!")?;
    }
    p.pause()?;

    let labels: Vec<&str> = MenuItem::ALL.iter().map(|item| item.label()).collect();
    loop {
        let out = p.output();
        execute!(out, Clear(ClearType::All), MoveTo(0, 0))?;
        p.say(&view::main_menu(&labels))?;

        let choice = p.choice("Enter your choice (1-10): ", 1, MenuItem::ALL.len() as u32)?;
        let Some(item) = MenuItem::from_choice(choice) else {
            continue;
        };

        if item == MenuItem::Exit {
            if service.current().is_some() {
                if let Err(e) = service.save() {
                    warn!(error = %e, "could not save on exit");
                    p.say(&format!("\n⚠ Error saving data: {}", e))?;
                }
            }
            p.say(&view::goodbye())?;
            return Ok(());
        }

        handle(item, service, p)?;
        p.pause()?;
    }
}

fn handle<R, I, W>(item: MenuItem, service: &mut AttendanceService<R>, p: &mut Prompter<I, W>) -> Result<()>
where
    R: RecordRepository,
    I: BufRead,
    W: Write,
{
    match item {
        MenuItem::DayWiseEntry => {
            let record = entry::detailed(p)?;
            store(service, record, p)
        }
        MenuItem::QuickEntry => {
            let record = entry::quick(p)?;
            store(service, record, p)
        }
        MenuItem::Summary => with_record(service, p, |service, p| {
            p.say(&view::summary(&service.summary()?))
        }),
        MenuItem::StatusCheck => with_record(service, p, |service, p| {
            p.say(&view::status(&service.summary()?))
        }),
        MenuItem::DailyRecord => with_record(service, p, |service, p| {
            p.say(&view::daily_record(service.record()?))
        }),
        MenuItem::DaysNeeded => with_record(service, p, days_needed),
        MenuItem::SafeLeaves => with_record(service, p, safe_leaves),
        MenuItem::MonthlyReport => with_record(service, p, |service, p| {
            p.say(&view::report(&service.summary()?))
        }),
        MenuItem::Save => {
            if service.save()? {
                p.say(&format!("\n{} Data saved successfully!", "✓".green()))
            } else {
                p.say("\n⚠ No data to save!")
            }
        }
        MenuItem::Exit => Ok(()),
    }
}

/// Runs `action` only when a record exists, otherwise tells the user to
/// enter data first.
fn with_record<R, I, W, F>(service: &mut AttendanceService<R>, p: &mut Prompter<I, W>, action: F) -> Result<()>
where
    R: RecordRepository,
    I: BufRead,
    W: Write,
    F: FnOnce(&mut AttendanceService<R>, &mut Prompter<I, W>) -> Result<()>,
{
    if service.current().is_none() {
        return p.say(view::NO_DATA);
    }
    action(service, p)
}

fn store<R, I, W>(service: &mut AttendanceService<R>, record: AttendanceRecord, p: &mut Prompter<I, W>) -> Result<()>
where
    R: RecordRepository,
    I: BufRead,
    W: Write,
{
    if let Err(e) = service.replace(record) {
        warn!(error = %e, "could not save attendance data");
        p.say(&format!("\n⚠ Error saving data: {}", e))?;
    }
    Ok(())
}

fn days_needed<R, I, W>(service: &mut AttendanceService<R>, p: &mut Prompter<I, W>) -> Result<()>
where
    R: RecordRepository,
    I: BufRead,
    W: Write,
{
    let summary = service.summary()?;
    p.say(&view::section_header("DAYS NEEDED CALCULATOR"))?;
    p.say(&format!(
        "\nCurrent Status:\n  Present: {} / {} days\n  Current %: {}%",
        summary.days_present, summary.total_days, summary.percentage
    ))?;
    p.say(&"─".repeat(50))?;

    let remaining = p.int_in_range("Enter remaining working days in month: ", 0, 31)?;
    match service.projection(remaining)? {
        Some(projection) => p.say(&view::projection(&projection)),
        None => p.say("\n○ No remaining days to calculate."),
    }
}

fn safe_leaves<R, I, W>(service: &mut AttendanceService<R>, p: &mut Prompter<I, W>) -> Result<()>
where
    R: RecordRepository,
    I: BufRead,
    W: Write,
{
    p.say(&view::section_header("SAFE LEAVES CALCULATOR"))?;
    let remaining = p.int_in_range("Enter remaining working days in month: ", 0, 31)?;

    p.say("\nSelect target percentage to maintain:")?;
    for (i, target) in Target::ALL.iter().enumerate() {
        p.say(&format!("  {}. {}% ({})", i + 1, target.percent(), target.label()))?;
    }
    let choice = p.int_in_range("Your choice (1-4): ", 1, Target::ALL.len() as u32)?;
    let target = Target::from_choice(choice).ok_or(AttendanceError::Unrecognized {
        kind: "target",
        value: choice.to_string(),
    })?;

    p.say(&view::safe_leaves(&service.safe_leaves(remaining, target)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use attendance_core::Month;
    use std::cell::RefCell;
    use std::io::Cursor;

    #[derive(Default)]
    struct MemoryRepo {
        saved: RefCell<Option<AttendanceRecord>>,
    }

    impl RecordRepository for MemoryRepo {
        fn load(&self) -> Result<Option<AttendanceRecord>> {
            Ok(self.saved.borrow().clone())
        }
        fn save(&self, record: &AttendanceRecord) -> Result<()> {
            *self.saved.borrow_mut() = Some(record.clone());
            Ok(())
        }
        fn delete(&self) -> Result<bool> {
            Ok(self.saved.borrow_mut().take().is_some())
        }
    }

    fn session(repo: MemoryRepo, input: &str) -> (AttendanceService<MemoryRepo>, String) {
        let mut service = AttendanceService::open(repo).unwrap();
        let mut p = Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        run_session(&mut service, &mut p).unwrap();
        let out = String::from_utf8_lossy(p.output()).to_string();
        (service, out)
    }

    #[test]
    fn test_menu_choice_mapping() {
        assert_eq!(MenuItem::from_choice(1), Some(MenuItem::DayWiseEntry));
        assert_eq!(MenuItem::from_choice(10), Some(MenuItem::Exit));
        assert_eq!(MenuItem::from_choice(0), None);
        assert_eq!(MenuItem::from_choice(11), None);
    }

    #[test]
    fn test_views_without_data() {
        // welcome pause, summary, pause, exit
        let (service, out) = session(MemoryRepo::default(), "\n3\n\n10\n");
        assert!(out.contains("No previous data found"));
        assert!(out.contains("No attendance data found! Please enter data first."));
        assert!(out.contains("Goodbye!"));
        assert!(service.current().is_none());
    }

    #[test]
    fn test_quick_entry_then_projection() {
        // quick entry: March, 20 days, 14 present; then days needed with 5 remaining
        let input = "\n2\n3\n20\n14\n\n6\n5\n\n10\n";
        let (service, out) = session(MemoryRepo::default(), input);

        let record = service.current().unwrap();
        assert_eq!(record.month(), Month::March);
        assert_eq!(record.days_present(), 14);
        assert!(out.contains("Current %: 70%"));
        assert!(out.contains("Be present for at least 5 of the next 5 days."));
    }

    #[test]
    fn test_loaded_record_and_safe_leaves() {
        let repo = MemoryRepo::default();
        repo.save(&AttendanceRecord::quick(Month::May, 22, 15).unwrap()).unwrap();

        // safe leaves: 4 remaining, target 80% (choice 2)
        let (_service, out) = session(repo, "\n7\n4\n2\n\n10\n");
        assert!(out.contains("Previous attendance data loaded successfully!"));
        assert!(out.contains("Need 2 more present days"));
    }

    #[test]
    fn test_zero_remaining_days() {
        let repo = MemoryRepo::default();
        repo.save(&AttendanceRecord::quick(Month::May, 20, 15).unwrap()).unwrap();

        let (_service, out) = session(repo, "\n6\n0\n\n10\n");
        assert!(out.contains("No remaining days to calculate."));
    }

    #[test]
    fn test_save_without_data() {
        let (_service, out) = session(MemoryRepo::default(), "\n9\n\n10\n");
        assert!(out.contains("No data to save!"));
    }
}
