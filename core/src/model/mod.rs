pub mod entry;
pub mod month;
pub mod record;

pub use entry::{DayInput, DayOutcome, DetailedEntry};
pub use month::{month_from_ordinal, parse_month, typical_working_days, MONTHS};
pub use record::{AttendanceRecord, DayMark, EntryType};
