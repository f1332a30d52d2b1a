use crate::model::record::AttendanceRecord;
use anyhow::Result;

/// Storage for the single current record.
pub trait RecordRepository {
    /// `None` means there is no usable saved data.
    fn load(&self) -> Result<Option<AttendanceRecord>>;
    fn save(&self, record: &AttendanceRecord) -> Result<()>;
    /// Returns whether anything was removed.
    fn delete(&self) -> Result<bool>;
}
