//! LTFS Config Library
//!
//! A Rust library for managing LTFS drive letter mappings, providing a
//! hierarchical configuration store abstraction and the mapping operations
//! built on top of it.

pub mod cli;
pub mod display;
pub mod error;
pub mod logger;
pub mod mappings;
pub mod store;

// Re-export key types for easier use
pub use error::{LtfsConfigError, Result};
pub use mappings::{
    DriveLetter, MappingProperties, MappingRequest, MappingStore, MAX_DRIVE_LETTER,
    MIN_DRIVE_LETTER,
};
pub use store::{ConfigStore, FileStore, MemoryStore, Value};

#[cfg(windows)]
pub use store::RegistryStore;
