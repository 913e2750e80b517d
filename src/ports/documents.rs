/// Document store port trait
///
/// Defines the interface to the hierarchical document storage collaborator:
/// one storage location per sector, each holding zero or more named document
/// resources. Listing is a scoped read-only operation, so the port stays
/// synchronous.
use crate::domain::models::Sector;
use crate::error::Result;

/// Port trait for document storage
pub trait DocumentStorePort: Send + Sync {
    /// List document names available under a sector
    ///
    /// A sector with no backing location yields an empty list, not an error.
    fn list(&self, sector: Sector) -> Result<Vec<String>>;
}
