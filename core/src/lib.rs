pub mod error;
pub mod model;
pub mod projection;
pub mod repository;
pub mod service;
pub mod status;

pub use error::AttendanceError;
pub use model::{AttendanceRecord, DayInput, DayMark, DayOutcome, DetailedEntry, EntryType};
pub use projection::{
    days_needed, percentage, projection, required_days_for_target, safe_leaves, safe_leaves_breakdown,
    Projection, ProjectionAdvice, SafeLeaves, Target, TargetProjection,
};
pub use repository::{FileRecordRepository, RecordRepository};
pub use service::{AttendanceService, AttendanceSummary};
pub use status::{classify, delta_from_minimum, is_eligible, ReportAdvice, StatusTier, MINIMUM_ATTENDANCE_PERCENT};

pub use chrono::Month;
