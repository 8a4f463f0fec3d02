/* 📖 # Why is FileCollection a trait with default methods?

Build engines consume many kinds of file collections: directory scans, filtered views, task
outputs. They only need a narrow capability: the set of paths and a description for
diagnostics. The trait captures that capability, and the default methods supply the generic
behaviour every collection shares:

1. **Generic description**: `describe()` falls back to the display name, so a collection only
   overrides it when it can say something more precise.
2. **Conveniences**: emptiness, membership, single-file access and path-list rendering are
   derived from `paths()` once, not re-implemented per collection.

Composition over a base type keeps implementers decoupled: anything that can hand out a
read-only set of paths is a FileCollection.
*/

use std::collections::{BTreeSet, btree_set};
use std::ffi::OsString;
use std::fmt;

use arcstr::ArcStr;

use fileset_base::{ErrorKind, FilePath, FilesetError, FilesetResult};

/// Display name used by collections that do not provide their own.
pub const DEFAULT_DISPLAY_NAME: ArcStr = arcstr::literal!("file collection");

/// Read-only capability shared by all file collections.
///
/// Implementations must never expose a mutable handle to their paths. Consumers must not rely
/// on the iteration order of `paths()`.
pub trait FileCollection: fmt::Debug + Send + Sync {
    /// The set of paths in this collection.
    fn paths(&self) -> &BTreeSet<FilePath>;

    /// A short name for the kind of collection, used in descriptions.
    fn display_name(&self) -> ArcStr {
        DEFAULT_DISPLAY_NAME
    }

    /// A human-readable description for diagnostics and logs.
    fn describe(&self) -> String {
        generic_description(self)
    }

    fn is_empty(&self) -> bool {
        self.paths().is_empty()
    }

    fn len(&self) -> usize {
        self.paths().len()
    }

    fn contains(&self, path: &FilePath) -> bool {
        self.paths().contains(path)
    }

    fn iter(&self) -> btree_set::Iter<'_, FilePath> {
        self.paths().iter()
    }

    /// Returns the only path of this collection.
    ///
    /// Fails with [`ErrorKind::UnexpectedFileCount`] if the collection is empty or holds more
    /// than one path.
    fn single_file(&self) -> FilesetResult<&FilePath> {
        let mut paths = self.iter();
        match (paths.next(), paths.next()) {
            (Some(path), None) => Ok(path),
            _ => Err(Box::new(FilesetError::new(ErrorKind::UnexpectedFileCount {
                description: self.describe(),
                count: self.len(),
            }))),
        }
    }

    /// Joins the absolute paths of this collection with the platform path-list separator
    /// (`:` on Unix, `;` on Windows), as used by `PATH`-like variables.
    fn as_path(&self) -> FilesetResult<OsString> {
        std::env::join_paths(self.iter().map(FilePath::to_absolute)).map_err(|source| {
            Box::new(
                FilesetError::new(ErrorKind::PathList { source })
                    .with_context(|| format!("Rendering {} as a path list", self.describe())),
            )
        })
    }
}

/// The description every collection falls back to: its display name.
pub fn generic_description<C: FileCollection + ?Sized>(collection: &C) -> String {
    collection.display_name().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use expect_test::expect;

    /// Minimal implementer relying on every default.
    #[derive(Debug)]
    struct Sources {
        paths: BTreeSet<FilePath>,
    }

    impl Sources {
        fn new(paths: &[&str]) -> Self {
            Self {
                paths: paths.iter().map(|p| FilePath::from(*p)).collect(),
            }
        }
    }

    impl FileCollection for Sources {
        fn paths(&self) -> &BTreeSet<FilePath> {
            &self.paths
        }
    }

    /// Implementer overriding only the display name.
    #[derive(Debug)]
    struct TaskOutputs(BTreeSet<FilePath>);

    impl FileCollection for TaskOutputs {
        fn paths(&self) -> &BTreeSet<FilePath> {
            &self.0
        }

        fn display_name(&self) -> ArcStr {
            arcstr::literal!("task 'compile' output files")
        }
    }

    #[test]
    fn test_default_describe_uses_display_name() {
        let sources = Sources::new(&["/src/a.rs", "/src/b.rs"]);
        assert_eq!(sources.display_name().as_str(), "file collection");
        assert_eq!(sources.describe(), "file collection");
    }

    #[test]
    fn test_describe_follows_overridden_display_name() {
        let outputs = TaskOutputs(BTreeSet::new());
        assert_eq!(outputs.describe(), "task 'compile' output files");
        assert_eq!(generic_description(&outputs), outputs.describe());
    }

    #[test]
    fn test_membership_helpers() {
        let sources = Sources::new(&["/src/a.rs", "/src/b.rs"]);
        assert!(!sources.is_empty());
        assert_eq!(sources.len(), 2);
        assert!(sources.contains(&FilePath::from("/src/a.rs")));
        assert!(!sources.contains(&FilePath::from("/src/c.rs")));
        assert_eq!(sources.iter().count(), 2);
    }

    #[test]
    fn test_single_file() {
        let sources = Sources::new(&["/src/main.rs"]);
        assert_eq!(
            sources.single_file().unwrap(),
            &FilePath::from("/src/main.rs")
        );
    }

    #[test]
    fn test_single_file_on_empty_collection() {
        let sources = Sources::new(&[]);
        let err = sources.single_file().unwrap_err();
        expect![[r#"Expected file collection to contain exactly one file, however, it contains no files."#]]
            .assert_eq(&err.to_string());
    }

    #[test]
    fn test_single_file_on_many_files() {
        let outputs = TaskOutputs(
            ["/out/a.o", "/out/b.o"]
                .iter()
                .map(|p| FilePath::from(*p))
                .collect(),
        );
        let err = outputs.single_file().unwrap_err();
        match err.kind() {
            ErrorKind::UnexpectedFileCount { description, count } => {
                assert_eq!(description, "task 'compile' output files");
                assert_eq!(*count, 2);
            }
            _ => panic!("Expected UnexpectedFileCount variant"),
        }
    }

    #[test]
    #[cfg(unix)]
    fn test_as_path_joins_with_separator() {
        let sources = Sources::new(&["/lib/b.jar", "/lib/a.jar"]);
        assert_eq!(sources.as_path().unwrap(), OsString::from("/lib/a.jar:/lib/b.jar"));
    }

    #[test]
    fn test_as_path_on_empty_collection() {
        let sources = Sources::new(&[]);
        assert_eq!(sources.as_path().unwrap(), OsString::new());
    }

    #[test]
    #[cfg(unix)]
    fn test_as_path_rejects_separator_in_path() {
        let sources = Sources::new(&["/lib/a:b.jar"]);
        let err = sources.as_path().unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::PathList { .. }));
        assert!(
            err.to_string()
                .starts_with("Rendering file collection as a path list: ")
        );
    }
}
