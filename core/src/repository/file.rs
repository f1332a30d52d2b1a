use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use tracing::{debug, warn};

use crate::model::record::AttendanceRecord;
use crate::repository::codec::{decode_record, encode_record};
use crate::repository::traits::RecordRepository;

pub const DATA_FILE_NAME: &str = "attendance_data.txt";

/// `~/.attendance`, used when no directory is configured.
pub fn default_data_dir() -> Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| anyhow!("Could not determine home directory"))?;
    Ok(home_dir.join(".attendance"))
}

#[derive(Clone, Debug)]
pub struct FileRecordRepository {
    file_path: PathBuf,
}

impl FileRecordRepository {
    pub fn new(base_dir: Option<PathBuf>) -> Result<Self> {
        let mut path = match base_dir {
            Some(dir) => dir,
            None => default_data_dir()?,
        };
        fs::create_dir_all(&path)
            .with_context(|| format!("Could not create data directory {}", path.display()))?;
        path.push(DATA_FILE_NAME);

        Ok(FileRecordRepository { file_path: path })
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }
}

impl RecordRepository for FileRecordRepository {
    fn load(&self) -> Result<Option<AttendanceRecord>> {
        let content = match fs::read_to_string(&self.file_path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.file_path.display(), "no saved attendance data");
                return Ok(None);
            }
            Err(e) => {
                warn!(path = %self.file_path.display(), error = %e, "could not read attendance data");
                return Ok(None);
            }
        };

        match decode_record(&content) {
            Ok(record) => {
                debug!(month = record.month_name(), total_days = record.total_days(), "loaded attendance data");
                Ok(Some(record))
            }
            Err(e) => {
                warn!(path = %self.file_path.display(), error = %e, "ignoring unusable attendance data");
                Ok(None)
            }
        }
    }

    fn save(&self, record: &AttendanceRecord) -> Result<()> {
        let file = File::create(&self.file_path)
            .with_context(|| format!("Could not write {}", self.file_path.display()))?;
        let mut writer = BufWriter::new(file);
        writer.write_all(encode_record(record).as_bytes())?;
        writer.flush()?;

        debug!(path = %self.file_path.display(), month = record.month_name(), "saved attendance data");
        Ok(())
    }

    fn delete(&self) -> Result<bool> {
        if !self.file_path.exists() {
            return Ok(false);
        }
        fs::remove_file(&self.file_path)
            .with_context(|| format!("Could not delete {}", self.file_path.display()))?;
        debug!(path = %self.file_path.display(), "deleted attendance data");
        Ok(true)
    }
}
