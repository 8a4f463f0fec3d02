/* 📖 # Why have fileset_base as a core library?
fileset_base provides the foundational error handling, logging setup and the path value type
used across all crates. Collections and their consumers agree on one `FilePath` and one error
type without depending on each other.
*/

pub mod error;
mod file_path;
pub mod tracing;

// Re-export commonly used types for convenience
pub use error::{ErrorKind, FilesetError, FilesetResult, ResultExt};
pub use file_path::FilePath;
