//! Detection rules.
//!
//! Pure functions over parsed tables and loaded sources; no printing.
//!
//! ## Module Structure
//!
//! - `missing`: Keys in the base locale absent from another locale
//! - `usage`: SwiftGen / NSLocalizedString usage classification

pub mod missing;
pub mod usage;
