/* 📖 # What does fileset_collections provide?

Build systems describe task inputs and outputs as collections of files. Many of those
collections are live (directory scans, filtered views, outputs resolved later), but the
terminal case is a plain set of paths that never changes once known. ImmutableFileCollection
is that terminal case: built once, shared freely, usable as a cache key.

The crate exposes two things:
- `FileCollection`: the read-only capability consumers program against
- `ImmutableFileCollection`: the empty singleton and the populated set behind one handle
*/

mod collection;
mod immutable;

pub use collection::{DEFAULT_DISPLAY_NAME, FileCollection, generic_description};
pub use immutable::ImmutableFileCollection;
