//! Output formatting for lookup results

pub mod console;
pub mod formatter;
pub mod json;
