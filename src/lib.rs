//! Quill turns an ordered stream of syntax write events into formatted
//! source text, keeping an exact 1-based (line, column) cursor for every
//! character emitted along the way.

pub mod output;
pub mod rendering;
pub mod writing;
