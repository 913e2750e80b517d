/// Port trait definitions (interfaces)
///
/// These traits define the contracts for adapters to implement.
/// Following the ports-and-adapters (hexagonal) architecture pattern.
pub mod analysis;
pub mod documents;
pub mod storage;

#[cfg(test)]
pub mod mocks;

pub use analysis::{AnalysisServicePort, MeetingAnalysis};
pub use documents::DocumentStorePort;
pub use storage::MeetingStorePort;
