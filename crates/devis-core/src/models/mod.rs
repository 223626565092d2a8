//! Data models for page records, tables, and configuration.

pub mod columns;
pub mod config;
pub mod page;
pub mod record;

pub use config::{DevisConfig, ExtractionConfig, OperationConfig, PartyConstants, TableFormat};
pub use page::PageText;
pub use record::{FieldValue, PageRecord, Table};
