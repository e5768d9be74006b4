//! Utility modules
//!
//! Filesystem helpers shared by the store

pub mod fs;
