use chrono::{DateTime, Utc};
use log::warn;

use crate::{
    error::RecordError,
    name::{self, DEFAULT_NAME},
};

/// Largest size a record will accept, in bytes.
pub const MAX_SIZE: u64 = i32::MAX as u64;

/// In-memory metadata for a single file: a validated name, a bounded
/// size, a writable flag and creation/modification timestamps.
///
/// Invariants hold at every point of a record's life. The name always
/// matches `[A-Za-z0-9._-]+` and the size never exceeds [`MAX_SIZE`];
/// every path that assigns either field validates first and reports a
/// [`RecordError`] instead of assigning something invalid.
#[derive(Debug, Clone, PartialEq)]
pub struct FileRecord {
    name: String,
    /// File size in bytes
    size: u64,
    /// Whether overwriting is allowed. Fixed at construction.
    writable: bool,
    /// Creation time. Never changes after construction.
    created_at: DateTime<Utc>,
    /// Time of the last successful mutation.
    modified_at: DateTime<Utc>,
}

impl FileRecord {
    /// Build a record from a name, a size in bytes and a writable flag.
    ///
    /// The name and the size are validated in that order; the first
    /// violation is returned and nothing is built.
    pub fn new(name: impl Into<String>, size: u64, writable: bool) -> Result<Self, RecordError> {
        let name = name.into();
        if !name::is_valid(&name) {
            return Err(RecordError::InvalidName(name));
        }
        if !Self::is_valid_size(size) {
            return Err(RecordError::SizeOutOfRange(size));
        }

        let created_at = Utc::now();
        Ok(Self {
            name,
            size,
            writable,
            created_at,
            modified_at: created_at,
        })
    }

    /// Build a writable, empty record from a name alone.
    pub fn named(name: impl Into<String>) -> Result<Self, RecordError> {
        Self::new(name, 0, true)
    }

    /// Build a record from possibly invalid input, substituting defaults
    /// instead of failing: an invalid name becomes [`DEFAULT_NAME`] and
    /// an out-of-range size becomes 0. The two fields fall back
    /// independently, and each substitution is logged at `warn` level.
    pub fn sanitized(name: impl Into<String>, size: u64, writable: bool) -> Self {
        let mut name = name.into();
        if !name::is_valid(&name) {
            warn!("replacing invalid file name {name:?} with {DEFAULT_NAME:?}");
            name = DEFAULT_NAME.to_string();
        }

        let mut size = size;
        if !Self::is_valid_size(size) {
            warn!("dropping out-of-range size {size}, record starts empty");
            size = 0;
        }

        let created_at = Utc::now();
        Self {
            name,
            size,
            writable,
            created_at,
            modified_at: created_at,
        }
    }

    /// Whether `name` is a valid file name: at least one character, all
    /// of them ASCII letters, digits, `.`, `-` or `_`.
    pub fn is_valid_name(name: &str) -> bool {
        name::is_valid(name)
    }

    /// Whether `size` is a valid file size, i.e. at most [`MAX_SIZE`] bytes.
    pub fn is_valid_size(size: u64) -> bool {
        size <= MAX_SIZE
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn is_writable(&self) -> bool {
        self.writable
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn modified_at(&self) -> DateTime<Utc> {
        self.modified_at
    }

    /// Give the file a new name.
    ///
    /// Fails without touching the record when `name` is invalid.
    pub fn rename(&mut self, name: impl Into<String>) -> Result<(), RecordError> {
        let name = name.into();
        if !name::is_valid(&name) {
            return Err(RecordError::InvalidName(name));
        }
        self.name = name;
        self.touch();
        Ok(())
    }

    /// Grow the file by `bytes`, returning the new size.
    ///
    /// Fails without touching the record when the result would exceed
    /// [`MAX_SIZE`].
    pub fn enlarge(&mut self, bytes: u64) -> Result<u64, RecordError> {
        let grown = self
            .size
            .checked_add(bytes)
            .filter(|&n| Self::is_valid_size(n))
            .ok_or(RecordError::SizeOutOfRange(self.size.saturating_add(bytes)))?;
        self.size = grown;
        self.touch();
        Ok(grown)
    }

    /// Shrink the file by `bytes`, returning the new size.
    ///
    /// Fails without touching the record when `bytes` exceeds the
    /// current size.
    pub fn shorten(&mut self, bytes: u64) -> Result<u64, RecordError> {
        let shrunk = self
            .size
            .checked_sub(bytes)
            .ok_or(RecordError::SizeUnderflow {
                current: self.size,
                delta: bytes,
            })?;
        self.size = shrunk;
        self.touch();
        Ok(shrunk)
    }

    fn touch(&mut self) {
        self.modified_at = Utc::now();
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
