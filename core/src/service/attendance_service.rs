use anyhow::Result;
use tracing::debug;

use crate::error::AttendanceError;
use crate::model::record::AttendanceRecord;
use crate::projection::{projection, safe_leaves_breakdown, Projection, SafeLeaves, Target};
use crate::repository::RecordRepository;
use crate::service::summary::AttendanceSummary;

/// Owns the one current record of a session and its storage.
pub struct AttendanceService<R: RecordRepository> {
    repo: R,
    current: Option<AttendanceRecord>,
}

impl<R: RecordRepository> AttendanceService<R> {
    /// Starts a session with whatever the repository has saved.
    pub fn open(repo: R) -> Result<Self> {
        let current = repo.load()?;
        Ok(Self { repo, current })
    }

    pub fn current(&self) -> Option<&AttendanceRecord> {
        self.current.as_ref()
    }

    pub fn record(&self) -> Result<&AttendanceRecord, AttendanceError> {
        self.current.as_ref().ok_or(AttendanceError::NoRecord)
    }

    /// Swaps in a new record and saves it. The record stays current even if
    /// saving fails.
    pub fn replace(&mut self, record: AttendanceRecord) -> Result<&AttendanceRecord> {
        debug!(month = record.month_name(), entry_type = %record.entry_type(), "replacing current record");
        let record = self.current.insert(record);
        self.repo.save(record)?;
        Ok(&*record)
    }

    /// Returns `false` when there is nothing to save.
    pub fn save(&self) -> Result<bool> {
        match &self.current {
            Some(record) => {
                self.repo.save(record)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Forgets the current record and removes the saved copy.
    pub fn clear(&mut self) -> Result<bool> {
        self.current = None;
        self.repo.delete()
    }

    pub fn summary(&self) -> Result<AttendanceSummary, AttendanceError> {
        self.record().map(AttendanceSummary::from_record)
    }

    pub fn projection(&self, remaining_days: u32) -> Result<Option<Projection>, AttendanceError> {
        Ok(projection(self.record()?, remaining_days))
    }

    pub fn safe_leaves(&self, remaining_days: u32, target: Target) -> Result<SafeLeaves, AttendanceError> {
        Ok(safe_leaves_breakdown(self.record()?, remaining_days, target))
    }
}
