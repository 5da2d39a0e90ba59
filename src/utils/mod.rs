//! Shared utility functions.
//!
//! String truncation (UTF-8 safe, boundary-aware) for table rendering.

mod string;

pub use string::truncate_chars;
