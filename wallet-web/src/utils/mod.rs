//! Utilities

pub mod url;
