//! Subprocess execution

pub mod cancel;
pub mod subprocess;
