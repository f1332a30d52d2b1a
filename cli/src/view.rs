use attendance_core::{
    AttendanceRecord, AttendanceSummary, DayMark, Projection, ProjectionAdvice, SafeLeaves,
};
use crossterm::style::Stylize;
use tabled::builder::Builder;
use tabled::settings::object::Rows;
use tabled::settings::{Color, Modify, Style};
use tabled::{Table, Tabled};

const BAR_LENGTH: usize = 30;
const DAYS_PER_ROW: usize = 5;

pub const NO_DATA: &str = "\n⚠ No attendance data found! Please enter data first.";

fn styled(mut table: Table) -> String {
    table
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN));
    table.to_string()
}

/// Two-column table whose header row is the title.
fn key_value_table(title: &str, rows: &[(&str, String)]) -> String {
    let mut builder = Builder::default();
    builder.push_record([title.to_string(), String::new()]);
    for (key, value) in rows {
        builder.push_record([key.to_string(), value.clone()]);
    }
    styled(builder.build())
}

fn centered(text: &str, width: usize) -> String {
    format!("{:^width$}", text, width = width)
}

pub fn section_header(title: &str) -> String {
    format!(
        "\n┌{line}┐\n│{}│\n└{line}┘",
        centered(title, 48),
        line = "─".repeat(48)
    )
}

pub fn welcome() -> String {
    let lines = [
        "",
        "MONTHLY SCHOOL ATTENDANCE TRACKER",
        "",
        "Track and analyze your school attendance",
        "Stay informed. Stay regular. Stay successful.",
        "",
    ];
    framed(&lines, 58)
}

pub fn goodbye() -> String {
    let lines = [
        "",
        "Thank you for using the attendance tracker!",
        "",
        "Remember:",
        "• Regular attendance = Academic success",
        "• Plan your leaves wisely",
        "• Stay above 75% always",
        "",
        "Goodbye! See you next time.",
        "",
    ];
    framed(&lines, 50)
}

fn framed(lines: &[&str], width: usize) -> String {
    let mut out = format!("\n╔{}╗\n", "═".repeat(width));
    for line in lines {
        out.push_str(&format!("║{}║\n", centered(line, width)));
    }
    out.push_str(&format!("╚{}╝", "═".repeat(width)));
    out
}

pub fn main_menu(items: &[&str]) -> String {
    let mut builder = Builder::default();
    builder.push_record(["#".to_string(), "MAIN MENU".to_string()]);
    for (i, item) in items.iter().enumerate() {
        builder.push_record([(i + 1).to_string(), item.to_string()]);
    }
    styled(builder.build())
}

pub fn mark_legend() -> String {
    let rule = "─".repeat(40);
    format!(
        "\n{rule}\nMark attendance for each day:\n  P = Present\n  A = Absent\n  H = Holiday (will be skipped)\n{rule}"
    )
}

pub fn entry_recorded(record: &AttendanceRecord) -> String {
    let rule = "═".repeat(40);
    format!(
        "\n{rule}\n{} Attendance for {} recorded!\n  Present: {} / {} days\n  Absent: {} days\n{rule}",
        "✓".green(),
        record.month_name(),
        record.days_present(),
        record.total_days(),
        record.days_absent(),
    )
}

/// 30-cell bar; partial cells round down.
pub fn progress_bar(percentage: f64) -> String {
    let filled = ((percentage / 100.0) * BAR_LENGTH as f64).floor().clamp(0.0, BAR_LENGTH as f64) as usize;
    format!(
        "[{}{}] {}%",
        "█".repeat(filled),
        "░".repeat(BAR_LENGTH - filled),
        percentage
    )
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn summary(s: &AttendanceSummary) -> String {
    let table = key_value_table(
        &format!("Month: {}", s.month),
        &[
            ("Total Working Days", s.total_days.to_string()),
            ("Days Present", s.days_present.to_string()),
            ("Days Absent", s.days_absent.to_string()),
            ("Attendance %", format!("{}%", s.percentage)),
            ("Entry Type", title_case(s.entry_type.as_str())),
        ],
    );
    format!(
        "{}\n{}\n\n  Progress: {}",
        section_header("ATTENDANCE SUMMARY"),
        table,
        progress_bar(s.percentage)
    )
}

pub fn status(s: &AttendanceSummary) -> String {
    let table = key_value_table(
        "75% STATUS CHECK",
        &[
            ("Your Attendance", format!("{}%", s.percentage)),
            ("Required Minimum", format!("{}%", s.minimum)),
            ("Status", format!("{} {}", s.tier.label(), s.tier.rating())),
        ],
    );

    let delta = if s.delta_from_minimum >= 0.0 {
        format!("✓ You are {:.2}% ABOVE the minimum", s.delta_from_minimum).green()
    } else {
        format!("✗ You are {:.2}% BELOW the minimum", s.delta_from_minimum.abs()).red()
    };

    format!("{}\n  {}\n  {}", table, s.tier.message(), delta)
}

pub fn daily_record(record: &AttendanceRecord) -> String {
    if record.daily_record().is_empty() {
        return "\n⚠ No day-wise record available!\n  (Use 'Day-wise Entry' for detailed tracking)"
            .to_string();
    }

    let cells: Vec<String> = record
        .daily_record()
        .iter()
        .enumerate()
        .map(|(i, mark)| {
            let glyph = match mark {
                DayMark::Present => "✓",
                DayMark::Absent => "✗",
            };
            format!("D{:02}:{}", i + 1, glyph)
        })
        .collect();

    let mut builder = Builder::default();
    for row in cells.chunks(DAYS_PER_ROW) {
        let mut padded: Vec<String> = row.to_vec();
        padded.resize(DAYS_PER_ROW, String::new());
        builder.push_record(padded);
    }
    let mut table = builder.build();
    table.with(Style::modern());

    format!(
        "{}\n{}\n  ✓ Present: {} days\n  ✗ Absent:  {} days\n\n  Legend: ✓ = Present, ✗ = Absent",
        section_header(&format!("DAY-WISE RECORD - {}", record.month_name().to_uppercase())),
        table,
        record.days_present(),
        record.days_absent()
    )
}

#[derive(Tabled)]
struct ProjectionRow {
    #[tabled(rename = "Target")]
    target: String,
    #[tabled(rename = "Days Needed")]
    days_needed: u32,
    #[tabled(rename = "Leaves OK")]
    leaves: u32,
    #[tabled(rename = "Reachable")]
    reachable: &'static str,
}

pub fn projection(p: &Projection) -> String {
    let rows: Vec<ProjectionRow> = p
        .targets
        .iter()
        .map(|t| ProjectionRow {
            target: format!("{}% ({})", t.target.percent(), t.target.label()),
            days_needed: t.days_to_attend(),
            leaves: t.suggested_leaves(),
            reachable: if t.achievable { "✓" } else { "✗" },
        })
        .collect();

    format!(
        "\n  ATTENDANCE PROJECTION (new total: {} days)\n{}\n\n📋 Recommendation:\n{}",
        p.new_total,
        styled(Table::new(rows)),
        advice(&p.advice())
    )
}

pub fn advice(advice: &ProjectionAdvice) -> String {
    match advice {
        ProjectionAdvice::AlreadyQualified { extra_leaves } => format!(
            "   You already qualify for 75%!\n   You can take up to {} more leaves.",
            extra_leaves
        ),
        ProjectionAdvice::AttendAtLeast { days, of } => format!(
            "   Be present for at least {} of the next {} days.",
            days, of
        ),
        ProjectionAdvice::Unreachable { shortfall } => format!(
            "   {} Cannot reach 75% even with full attendance.\n   Shortfall: {} days",
            "⚠".yellow(),
            shortfall
        ),
    }
}

pub fn safe_leaves(s: &SafeLeaves) -> String {
    let mut rows = vec![
        ("Target", format!("{}%", s.target.percent())),
        ("Total Days (projected)", s.new_total.to_string()),
        ("Required Present", s.required_present.to_string()),
        ("Currently Present", s.currently_present.to_string()),
    ];
    if s.is_reachable() {
        rows.push(("✓ Safe Leaves Available", s.safe_leaves.to_string()));
    } else {
        rows.push(("✗ No leaves available", format!("Need {} more present days", s.shortfall())));
    }
    key_value_table("SAFE LEAVES CALCULATION", &rows)
}

pub fn report(s: &AttendanceSummary) -> String {
    let status_line = if s.eligible {
        "✓ ELIGIBLE (Meets 75% requirement)"
    } else {
        "✗ NOT ELIGIBLE (Below 75%)"
    };

    let mut rows = vec![
        ("Total Working Days", s.total_days.to_string()),
        ("Days Present", s.days_present.to_string()),
        ("Days Absent", s.days_absent.to_string()),
        ("Attendance", format!("{}%", s.percentage)),
        ("STATUS", status_line.to_string()),
    ];
    for line in s.advice.recommendations() {
        rows.push(("•", line.to_string()));
    }

    format!(
        "{}\n{}",
        section_header("MONTHLY ATTENDANCE REPORT"),
        key_value_table(&format!("ATTENDANCE REPORT - {}", s.month.to_uppercase()), &rows)
    )
}
