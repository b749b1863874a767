// src/io/mod.rs

pub mod catalog;
pub mod error;
pub mod export;

pub use self::catalog::{DEFAULT_VALUE_FIELD, StationCatalog};
pub use self::error::{FieldIoError, FieldIoResult};
pub use self::export::{FieldExport, FieldSummary};
