//! Core data types shared by both pipelines.
//!
//! ## Module Structure
//!
//! - `table`: Parsed `.strings` content (StringsTable, StringsEntry)
//! - `usage`: Usage classification results (UsageKind, UsageRecord)

pub mod table;
pub mod usage;

pub use table::{StringsEntry, StringsTable};
pub use usage::{UsageKind, UsageRecord};
