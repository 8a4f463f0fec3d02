use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/* 📖 # Why wrap PathBuf in FilePath?

Collections store FilePath values rather than bare PathBufs so that every crate agrees on
what makes two paths "the same entry":

1. **Component equality**: equality, ordering and hashing delegate to `Path`, which compares
   components. `/a/b`, `/a//b` and `/a/b/` are one entry.
2. **No filesystem access**: nothing here canonicalizes, resolves symlinks or checks
   existence. A FilePath is a value, not a handle.
3. **Rendering in one place**: diagnostics show absolute paths via `to_absolute()`, without
   changing the stored value.
*/

/// A filesystem path stored in a file collection.
///
/// # Examples
///
/// ```
/// use fileset_base::FilePath;
///
/// let path1 = FilePath::from("/work/src/main.rs");
/// let path2 = FilePath::from(String::from("/work/src//main.rs"));
/// assert_eq!(path1, path2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilePath(PathBuf);

impl FilePath {
    /// Creates a FilePath from anything convertible into a PathBuf.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    /// Returns the underlying path.
    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// Consumes the FilePath and returns the underlying PathBuf.
    pub fn into_path_buf(self) -> PathBuf {
        self.0
    }

    pub fn is_absolute(&self) -> bool {
        self.0.is_absolute()
    }

    /// Returns the path as an absolute path without resolving symlinks.
    ///
    /// Relative paths are joined onto the current working directory. If the working
    /// directory cannot be determined the path is returned unchanged.
    pub fn to_absolute(&self) -> PathBuf {
        if self.0.is_absolute() {
            self.0.clone()
        } else {
            std::env::current_dir()
                .map(|cwd| cwd.join(&self.0))
                .unwrap_or_else(|_| self.0.clone())
        }
    }
}

impl From<&str> for FilePath {
    fn from(s: &str) -> Self {
        Self(PathBuf::from(s))
    }
}

impl From<String> for FilePath {
    fn from(s: String) -> Self {
        Self(PathBuf::from(s))
    }
}

impl From<PathBuf> for FilePath {
    fn from(p: PathBuf) -> Self {
        Self(p)
    }
}

impl From<&Path> for FilePath {
    fn from(p: &Path) -> Self {
        Self(p.to_path_buf())
    }
}

impl From<&PathBuf> for FilePath {
    fn from(p: &PathBuf) -> Self {
        Self(p.clone())
    }
}

impl From<&FilePath> for FilePath {
    fn from(p: &FilePath) -> Self {
        p.clone()
    }
}

impl fmt::Display for FilePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

impl AsRef<Path> for FilePath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_path_from_str() {
        let path = FilePath::from("/src/main.rs");
        assert_eq!(path.as_path(), Path::new("/src/main.rs"));
    }

    #[test]
    fn test_file_path_from_pathbuf() {
        let pb = PathBuf::from("/docs/readme.md");
        let path = FilePath::from(pb.as_path());
        assert_eq!(path.into_path_buf(), pb);
    }

    #[test]
    fn test_file_path_equality_uses_components() {
        assert_eq!(FilePath::from("/a/b"), FilePath::from("/a//b"));
        assert_eq!(FilePath::from("/a/b"), FilePath::from("/a/b/"));
        assert_ne!(FilePath::from("/a/b"), FilePath::from("/a/c"));
    }

    #[test]
    fn test_file_path_hash_matches_equality() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(FilePath::from("/a/b"));
        set.insert(FilePath::from("/a//b"));
        assert_eq!(set.len(), 1);
        assert!(set.contains(&FilePath::from("/a/b/")));
    }

    #[test]
    fn test_file_path_to_absolute_keeps_absolute_paths() {
        let path = FilePath::new(std::env::temp_dir().join("out.txt"));
        assert!(path.is_absolute());
        assert_eq!(path.to_absolute(), path.as_path());
    }

    #[test]
    fn test_file_path_to_absolute_joins_cwd() {
        let path = FilePath::from("build/out.txt");
        assert!(!path.is_absolute());
        let cwd = std::env::current_dir().unwrap();
        assert_eq!(path.to_absolute(), cwd.join("build/out.txt"));
    }

    #[test]
    fn test_file_path_serde_is_transparent() {
        let path = FilePath::from("/work/lib.rs");
        let json = serde_json::to_string(&path).unwrap();
        assert_eq!(json, "\"/work/lib.rs\"");
        let back: FilePath = serde_json::from_str(&json).unwrap();
        assert_eq!(back, path);
    }
}
