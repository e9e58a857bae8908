//! Input data definitions.

pub mod builtin;
pub mod table;
