//! System abstraction for filesystem operations
//!
//! All article and index storage goes through the [`System`] trait so the
//! store can run against the real disk or an in-memory filesystem in tests.

use std::io;
use std::path::Path;

pub mod mock;
pub mod real;

pub use mock::MockSystem;
pub use real::RealSystem;

/// Unified trait for the filesystem operations the news store needs
///
/// # Implementations
/// - `RealSystem`: Production implementation using `std::fs` and `tempfile`
/// - `MockSystem`: Test implementation using in-memory storage
pub trait System: Send + Sync {
    /// Read entire file contents as a string
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Write bytes to a file, creating it if it doesn't exist
    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()>;

    /// Replace a file's contents in one step
    ///
    /// Readers observe either the previous contents or the new ones, never a
    /// partially written file. The parent directory must already exist.
    fn write_atomic(&self, path: &Path, contents: &[u8]) -> io::Result<()>;

    /// Recursively create a directory and all parent directories
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Remove a file
    fn remove_file(&self, path: &Path) -> io::Result<()>;

    /// Check if a path exists
    fn exists(&self, path: &Path) -> io::Result<bool>;

    /// Check if a path points to a directory
    fn is_dir(&self, path: &Path) -> io::Result<bool>;
}
