use crate::record::MAX_SIZE;

/// Why a record could not be built or mutated.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    #[error("invalid file name {0:?}")]
    InvalidName(String),

    #[error("size {0} exceeds the maximum of {MAX_SIZE} bytes")]
    SizeOutOfRange(u64),

    #[error("cannot shorten a {current} byte file by {delta} bytes")]
    SizeUnderflow { current: u64, delta: u64 },
}
