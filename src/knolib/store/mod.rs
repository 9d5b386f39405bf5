//! # Persistence Layer
//!
//! The whole document lives in one JSON file (the canonical path). The
//! [`FileStore`] owns that path plus the in-memory [`crate::model::Library`]
//! and mediates every read and write.
//!
//! ## On-disk layout
//!
//! ```text
//! <data dir>/
//! ├── library.json                        # the document of record
//! ├── library.json.bak                    # previous good save, overwritten each save
//! ├── library.json.backup                 # quarantined corrupt file, if any
//! └── library_backup_YYYYMMDD_HHMMSS.json # manual backups
//! ```
//!
//! ## Failure policy
//!
//! Loading never fails on bad data: an unparseable file is renamed aside to
//! `.backup` and a fresh seeded library takes its place. Saves copy the
//! previous file to `.bak` before overwriting. Imports parse first and only
//! replace the in-memory document on success. Concurrent access to the same
//! file from several processes is unsupported (last writer wins).

pub mod fs;

pub use fs::FileStore;

/// Default file name for the canonical document.
pub const DATA_FILE_NAME: &str = "library.json";
