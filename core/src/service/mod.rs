pub mod attendance_service;
pub mod summary;

pub use attendance_service::AttendanceService;
pub use summary::AttendanceSummary;
