/// Adapters - concrete implementations of the port traits
///
/// These modules implement the port traits for specific backends.
pub mod documents;
pub mod storage;
