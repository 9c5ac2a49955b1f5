// Service exports
pub mod directory;

pub use directory::{DirectoryError, InMemoryDirectory, ProfileDirectory};
