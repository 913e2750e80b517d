/// Filesystem document store adapter
///
/// Implements DocumentStorePort over a root directory with one subdirectory
/// per sector, each holding PDF document resources.
use crate::domain::models::Sector;
use crate::error::Result;
use crate::ports::documents::DocumentStorePort;
use std::path::PathBuf;

/// Document store rooted at a sector-engine directory
pub struct FsDocumentStore {
    root: PathBuf,
}

impl FsDocumentStore {
    /// Create a store over the given root directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl DocumentStorePort for FsDocumentStore {
    fn list(&self, sector: Sector) -> Result<Vec<String>> {
        let dir = self.root.join(sector.as_str());
        if !dir.is_dir() {
            log::debug!("No storage location for sector {}", sector);
            return Ok(Vec::new());
        }

        let mut names = Vec::new();
        for entry in std::fs::read_dir(&dir)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                if name.to_lowercase().ends_with(".pdf") {
                    names.push(name.to_string());
                }
            }
        }

        // Directory iteration order is platform-dependent; sort for
        // deterministic enumeration (and therefore deterministic tie-breaks
        // downstream).
        names.sort();
        log::debug!("Sector {} has {} documents", sector, names.len());
        Ok(names)
    }
}
