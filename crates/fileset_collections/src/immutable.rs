/* 📖 # Why an Arc around a private two-variant enum?

ImmutableFileCollection is a cheap handle to a closed sum type:

- `Contents::Empty` exists exactly once per process, in a `OnceLock`. Every construction that
  ends up with no paths hands out a clone of that one Arc, so "is this the empty collection"
  is an identity check (`ptr_eq`) and the common "no files" case allocates nothing.
- `Contents::Files` owns a deduplicated `BTreeSet`. Nothing outside this module can reach it
  mutably, and the enum is private, so no third variant can be added elsewhere.

Because the contents never change after construction, clones can be sent to any thread and
read without locks.
*/

use std::collections::{BTreeSet, btree_set};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, OnceLock};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::trace;

use fileset_base::FilePath;

use crate::collection::{FileCollection, generic_description};

static EMPTY: OnceLock<ImmutableFileCollection> = OnceLock::new();

static NO_PATHS: BTreeSet<FilePath> = BTreeSet::new();

#[derive(Debug)]
enum Contents {
    Empty,
    Files(BTreeSet<FilePath>),
}

/// A file collection whose paths are fixed at construction.
///
/// # Examples
///
/// ```
/// use fileset_collections::{FileCollection, ImmutableFileCollection};
///
/// let inputs = ImmutableFileCollection::of(&["/src/lib.rs", "/src/lib.rs"]);
/// assert_eq!(inputs.len(), 1);
/// assert_eq!(inputs.describe(), "file '/src/lib.rs'");
///
/// let none = ImmutableFileCollection::of::<&str>(&[]);
/// assert!(none.ptr_eq(&ImmutableFileCollection::empty()));
/// ```
#[derive(Debug, Clone)]
pub struct ImmutableFileCollection {
    contents: Arc<Contents>,
}

impl ImmutableFileCollection {
    /// Returns the shared empty collection.
    pub fn empty() -> Self {
        EMPTY
            .get_or_init(|| Self {
                contents: Arc::new(Contents::Empty),
            })
            .clone()
    }

    /// Creates a collection from a fixed list of paths.
    ///
    /// Duplicates collapse to one entry and the list order is not kept. An empty list
    /// yields the shared empty collection.
    pub fn of<P>(paths: &[P]) -> Self
    where
        P: Clone + Into<FilePath>,
    {
        if paths.is_empty() {
            return Self::empty();
        }
        Self::from_paths(paths.iter().cloned())
    }

    /// Creates a collection from any finite sequence of paths.
    ///
    /// The sequence is consumed completely before the collection is built. If it
    /// produces no paths the shared empty collection is returned.
    pub fn from_paths<I>(paths: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<FilePath>,
    {
        let files: BTreeSet<FilePath> = paths.into_iter().map(Into::into).collect();
        if files.is_empty() {
            return Self::empty();
        }
        trace!(file_count = files.len(), "created immutable file collection");
        Self {
            contents: Arc::new(Contents::Files(files)),
        }
    }

    /// Returns true if both handles refer to the same instance.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.contents, &other.contents)
    }
}

impl FileCollection for ImmutableFileCollection {
    fn paths(&self) -> &BTreeSet<FilePath> {
        match &*self.contents {
            Contents::Empty => &NO_PATHS,
            Contents::Files(files) => files,
        }
    }

    fn describe(&self) -> String {
        if let Contents::Files(files) = &*self.contents {
            let mut iter = files.iter();
            if let (Some(only), None) = (iter.next(), iter.next()) {
                return format!("file '{}'", only.to_absolute().display());
            }
        }
        generic_description(self)
    }
}

impl Default for ImmutableFileCollection {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for ImmutableFileCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

impl PartialEq for ImmutableFileCollection {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || self.paths() == other.paths()
    }
}

impl Eq for ImmutableFileCollection {}

impl Hash for ImmutableFileCollection {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.paths().hash(state);
    }
}

impl<P> FromIterator<P> for ImmutableFileCollection
where
    P: Into<FilePath>,
{
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Self::from_paths(iter)
    }
}

impl<'a> IntoIterator for &'a ImmutableFileCollection {
    type Item = &'a FilePath;
    type IntoIter = btree_set::Iter<'a, FilePath>;

    fn into_iter(self) -> Self::IntoIter {
        self.paths().iter()
    }
}

impl Serialize for ImmutableFileCollection {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.paths())
    }
}

// Deserialization goes through the factory so that an empty list maps to the shared instance.
impl<'de> Deserialize<'de> for ImmutableFileCollection {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Vec::<FilePath>::deserialize(deserializer).map(Self::from_paths)
    }
}
