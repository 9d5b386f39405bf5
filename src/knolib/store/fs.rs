use crate::error::{KnolibError, Result};
use crate::model::Library;
use crate::seed;
use chrono::Utc;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// JSON-file persistence for a single [`Library`] document.
///
/// The store moves between two states: unloaded (fresh construction) and
/// loaded (after [`FileStore::load`]). All operations are synchronous and
/// run to completion before the next begins.
pub struct FileStore {
    data_file_path: PathBuf,
    library: Option<Library>,
}

impl FileStore {
    pub fn new(data_file_path: impl Into<PathBuf>) -> Self {
        Self {
            data_file_path: data_file_path.into(),
            library: None,
        }
    }

    pub fn data_file_path(&self) -> &Path {
        &self.data_file_path
    }

    pub fn is_loaded(&self) -> bool {
        self.library.is_some()
    }

    pub fn library(&self) -> Option<&Library> {
        self.library.as_ref()
    }

    pub fn library_mut(&mut self) -> Option<&mut Library> {
        self.library.as_mut()
    }

    /// Load the document. Idempotent: once a library is held in memory,
    /// subsequent calls return it without re-reading storage.
    ///
    /// A missing file seeds and persists a default library. An unreadable
    /// file is renamed to a `.backup` sibling and likewise replaced by a
    /// persisted default, so bad data never leaves the process without a
    /// usable document. Only unrecoverable I/O (the data directory cannot
    /// be created, the fallback cannot be written) surfaces as an error.
    pub fn load(&mut self) -> Result<&Library> {
        if self.library.is_none() {
            let library = self.read_or_reset()?;
            self.library = Some(library);
        }
        match &self.library {
            Some(library) => Ok(library),
            None => Err(KnolibError::NotLoaded),
        }
    }

    /// Persist the in-memory document to the canonical path, copying the
    /// previous file to a `.bak` sibling first. Fails with
    /// [`KnolibError::NotLoaded`] if nothing has been loaded yet.
    pub fn save(&self) -> Result<()> {
        let library = self.library.as_ref().ok_or(KnolibError::NotLoaded)?;

        if self.data_file_path.exists() {
            fs::copy(&self.data_file_path, self.sibling(".bak")).map_err(KnolibError::Io)?;
        }

        self.write_document(library)
    }

    /// Copy the on-disk file to `backup_path`, or to an auto-named
    /// `library_backup_<YYYYMMDD_HHMMSS>.json` sibling. Pure file copy; the
    /// in-memory document is not touched. Returns the path written.
    pub fn create_backup(&self, backup_path: Option<&Path>) -> Result<PathBuf> {
        if !self.data_file_path.exists() {
            return Err(KnolibError::Store(
                "no data file on disk to back up".to_string(),
            ));
        }

        let target = match backup_path {
            Some(path) => path.to_path_buf(),
            None => {
                let stamp = Utc::now().format("%Y%m%d_%H%M%S");
                self.data_file_path
                    .with_file_name(format!("library_backup_{}.json", stamp))
            }
        };

        fs::copy(&self.data_file_path, &target).map_err(KnolibError::Io)?;
        Ok(target)
    }

    /// Replace the in-memory document with the contents of `path` and
    /// persist it to the canonical location. Any failure (unreadable file,
    /// parse error, failed save) leaves the previously loaded library
    /// untouched.
    pub fn import_from_file(&mut self, path: &Path) -> Result<()> {
        let content = fs::read_to_string(path).map_err(KnolibError::Io)?;
        let library: Library =
            serde_json::from_str(&content).map_err(KnolibError::Serialization)?;

        let previous = self.library.replace(library);
        if let Err(e) = self.save() {
            self.library = previous;
            return Err(e);
        }
        Ok(())
    }

    /// Serialize the in-memory document to an arbitrary path. The canonical
    /// file and its backups are not touched.
    pub fn export_to_file(&self, path: &Path) -> Result<()> {
        let library = self.library.as_ref().ok_or(KnolibError::NotLoaded)?;
        let json = serde_json::to_string_pretty(library).map_err(KnolibError::Serialization)?;
        fs::write(path, json).map_err(KnolibError::Io)
    }

    fn read_or_reset(&self) -> Result<Library> {
        if let Some(dir) = self.data_file_path.parent() {
            if !dir.as_os_str().is_empty() && !dir.exists() {
                fs::create_dir_all(dir).map_err(KnolibError::Io)?;
            }
        }

        if self.data_file_path.exists() {
            match self.try_read() {
                Ok(library) => return Ok(library),
                Err(_) => {
                    // Quarantine the unreadable file, then fall through to
                    // the seeded default.
                    fs::rename(&self.data_file_path, self.sibling(".backup"))
                        .map_err(KnolibError::Io)?;
                }
            }
        }

        let library = seed::default_library();
        self.write_document(&library)?;
        Ok(library)
    }

    fn try_read(&self) -> Result<Library> {
        let content = fs::read_to_string(&self.data_file_path).map_err(KnolibError::Io)?;
        let library = serde_json::from_str(&content).map_err(KnolibError::Serialization)?;
        Ok(library)
    }

    fn write_document(&self, library: &Library) -> Result<()> {
        let json = serde_json::to_string_pretty(library).map_err(KnolibError::Serialization)?;
        fs::write(&self.data_file_path, json).map_err(KnolibError::Io)
    }

    // "library.json" + ".bak" -> "library.json.bak"
    fn sibling(&self, suffix: &str) -> PathBuf {
        let mut name = OsString::from(self.data_file_path.as_os_str());
        name.push(suffix);
        PathBuf::from(name)
    }
}
