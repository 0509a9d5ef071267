//! Flat-file persistence.
//!
//! This module provides:
//! - The line codec for movie records
//! - Reading the persistence file and atomic replacement on save

mod file;
mod record;

pub use file::{atomic_write, backup_path, open_for_read};
pub use record::{escape, format_record, parse_record, unescape, Record, RecordError};
