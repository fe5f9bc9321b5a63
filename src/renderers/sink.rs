//! Output sinks
//!
//! Emitters hand every finished file to an [`OutputSink`]. Each file is
//! written exactly once, as a whole buffer, and never read back.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::RenderError;

/// Destination for generated files
pub trait OutputSink {
    /// Write `contents` to `relative`, a path below the sink's root
    fn write(&mut self, relative: &Path, contents: &str) -> Result<(), RenderError>;
}

/// Writes files below a root directory, creating directories as needed
#[derive(Debug, Clone)]
pub struct DirectorySink {
    root: PathBuf,
}

impl DirectorySink {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }
}

impl OutputSink for DirectorySink {
    fn write(&mut self, relative: &Path, contents: &str) -> Result<(), RenderError> {
        let path = self.root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, contents)?;
        log::debug!("Wrote {} ({} bytes)", path.display(), contents.len());
        Ok(())
    }
}

/// Collects files in memory
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    pub files: BTreeMap<PathBuf, String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, relative: &str) -> Option<&str> {
        self.files.get(Path::new(relative)).map(String::as_str)
    }
}

impl OutputSink for MemorySink {
    fn write(&mut self, relative: &Path, contents: &str) -> Result<(), RenderError> {
        if self.files.insert(relative.to_path_buf(), contents.to_string()).is_some() {
            log::warn!("{} was written more than once", relative.display());
        }
        Ok(())
    }
}
