//! Output formatting for engine results.

pub mod json;
