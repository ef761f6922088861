//! Supplier adapter seam

pub mod errors;
pub mod traits;

pub use errors::AdapterError;
pub use traits::SupplierAdapter;

pub type AdapterResult<T> = Result<T, AdapterError>;
