/// Shared value types (coordinates, directions, canvas).
pub mod core;
/// Error taxonomy.
pub mod error;
