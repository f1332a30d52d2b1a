use chrono::Month;

pub const MONTHS: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

// Indexed by month ordinal - 1.
const TYPICAL_WORKING_DAYS: [u32; 12] = [22, 20, 23, 21, 22, 20, 23, 22, 21, 23, 21, 18];

/// Maps a menu ordinal (1 = January) to its month.
pub fn month_from_ordinal(ordinal: u32) -> Option<Month> {
    u8::try_from(ordinal)
        .ok()
        .and_then(|n| Month::try_from(n).ok())
}

/// Accepts either an ordinal ("3") or a month name ("march", "Mar").
pub fn parse_month(input: &str) -> Option<Month> {
    let input = input.trim();
    if let Ok(ordinal) = input.parse::<u32>() {
        return month_from_ordinal(ordinal);
    }
    input.parse::<Month>().ok()
}

/// Suggested number of school days, shown before day-wise entry.
pub fn typical_working_days(month: Month) -> u32 {
    TYPICAL_WORKING_DAYS[month.number_from_month() as usize - 1]
}
