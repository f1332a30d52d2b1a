pub mod codec;
pub mod file;
pub mod traits;

// Re-export
pub use codec::{decode_record, encode_record};
pub use file::{default_data_dir, FileRecordRepository, DATA_FILE_NAME};
pub use traits::RecordRepository;
