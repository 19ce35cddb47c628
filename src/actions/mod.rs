//! File-modifying actions.
//!
//! ## Actions
//!
//! - [`RemoveEntries`]: Delete unused entries from a `.strings` file (clean)
//!
//! ```text
//! unused keys
//!     ↓
//! RemoveEntries::run(path, keys, mode)
//!     ↓
//! StringsEditor (backup → rewrite)
//! ```

mod remove_entries;
mod strings_editor;

pub use remove_entries::{RemovalMode, RemovalOutcome, RemoveEntries};
pub use strings_editor::{BACKUP_EXTENSION, StringsEditor, remove_entry_lines};
