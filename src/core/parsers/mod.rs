//! File parsers.
//!
//! - `strings`: Apple `.strings` localization file parser

pub mod strings;
