//! Cache-related types and traits

pub mod errors;
pub use errors::*;

pub mod traits;
pub use traits::*;

pub type StorageResult<T> = Result<T, StorageError>;
