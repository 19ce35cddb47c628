//! Core building blocks shared by both tools.
//!
//! ## Module Structure
//!
//! - `data`: Parsed tables and usage records
//! - `error`: Typed load errors
//! - `file_scanner`: Source tree traversal
//! - `key_name`: SwiftGen key naming
//! - `parsers`: `.strings` file parser

pub mod data;
pub mod error;
pub mod file_scanner;
pub mod key_name;
pub mod parsers;

pub use data::{StringsEntry, StringsTable, UsageKind, UsageRecord};
pub use error::LoadError;
pub use file_scanner::{ScanResult, SourceScanner};
pub use key_name::transform_key;
pub use parsers::strings::{
    KeySyntax, ParseWarning, ParsedStrings, format_entry, line_key, parse_strings,
    read_strings_file,
};
