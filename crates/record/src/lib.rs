mod error;
mod name;
mod record;

pub use error::RecordError;
pub use name::DEFAULT_NAME;
pub use record::{FileRecord, MAX_SIZE};
