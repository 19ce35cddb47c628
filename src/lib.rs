//! stringsctl - checks for iOS `.strings` localization files
//!
//! Two tools share this library:
//!
//! - `strings-missing` reports keys present in a base locale file but absent
//!   from one or two other locale files.
//! - `strings-clean` finds entries no Swift or Objective-C source references
//!   (through SwiftGen constants or `NSLocalizedString`), writes a usage
//!   report and optionally removes them.
//!
//! ## Module Structure
//!
//! - `actions`: File modifications (entry removal with backup)
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Parsing, key transformation and source scanning
//! - `issues`: Issue type definitions
//! - `rules`: Missing-key and usage detection

pub mod actions;
pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod rules;
