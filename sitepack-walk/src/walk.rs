use std::path::PathBuf;

/// Options for use in the [`walk()`](function::walk()) function.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub struct Options {
    /// If true, the entries of each directory are visited in byte order of their file names,
    /// making the output deterministic across filesystems.
    /// If false, entries are visited in the order the underlying directory listing yields them,
    /// which is not guaranteed to be stable or sorted — callers must not depend on more than
    /// "depth-first, siblings in listing order".
    pub sort_entries: bool,
}

/// Additional information collected as outcome of [`walk()`](function::walk()).
#[derive(Debug, Default, Clone, Copy, Ord, PartialOrd, Eq, PartialEq)]
pub struct Outcome {
    /// The amount of calls to read the directory contents.
    pub read_dir_calls: usize,
    /// The amount of returned entries.
    pub returned_entries: usize,
    /// The amount of entries seen in directory listings, directories included, prior to
    /// deciding whether to traverse or return them.
    pub seen_entries: usize,
}

/// The error returned by [`walk()`](function::walk()).
#[derive(Debug, thiserror::Error)]
#[allow(missing_docs)]
pub enum Error {
    #[error("Traversal root '{}' could not be accessed", root.display())]
    Root { root: PathBuf, source: std::io::Error },
    #[error("Traversal root '{}' is not a directory", root.display())]
    RootNotADirectory { root: PathBuf },
    #[error("Could not list directory '{}'", path.display())]
    ReadDir { path: PathBuf, source: std::io::Error },
    #[error("Could not obtain metadata of '{}'", path.display())]
    EntryMetadata { path: PathBuf, source: std::io::Error },
    #[error("Could not canonicalize '{}'", path.display())]
    Canonicalize { path: PathBuf, source: std::io::Error },
    #[error("Directory '{}' leads back to '{}' which is still being traversed", path.display(), ancestor.display())]
    SymlinkCycle { path: PathBuf, ancestor: PathBuf },
}

pub(crate) mod function {
    use std::fs;
    use std::path::{Path, PathBuf};

    use crate::entry::Kind;
    use crate::walk::{Error, Options, Outcome};
    use crate::Entry;

    /// A function to enumerate, depth-first, every non-directory entry beneath `root`.
    ///
    /// * `root` - the starting point of the walk and a readable directory.
    ///     - Returned paths keep `root` as their prefix, so a relative `root` yields relative
    ///       paths and an absolute one absolute paths.
    /// * `options` - a way to change the bare traversal contract, see [`Options`].
    ///
    /// Entries come back in strict pre-order: for each entry of a directory, in visiting order,
    /// a sub-directory contributes everything beneath it before the next sibling is considered,
    /// while anything that is not a directory is returned immediately. Each path reachable this
    /// way is returned exactly once, directories themselves are never returned.
    ///
    /// Symbolic links are not special-cased: a link to a directory is traversed like a
    /// directory, a link to anything else is returned like a file. An entry reachable both
    /// directly and through a linked directory is thus returned once per path leading to it,
    /// and a link whose target is missing fails the walk. A link leading back to a directory
    /// that is still being traversed fails the walk as well instead of recursing endlessly.
    ///
    /// Any failure to list a directory or inspect an entry aborts the walk as a whole and
    /// discards entries collected so far; there is no partial result and no internal retry.
    /// The caller decides whether to run the entire walk again.
    ///
    /// ### Implementation Notes
    ///
    /// The traversal is plain recursion over [`std::fs::read_dir`], with each level returning
    /// its own finished sub-sequence for the caller to splice in. Content roots of static
    /// sites are small enough that the parallel traversal offered by the `walkdir`/`jwalk`
    /// crates buys nothing, and owning the recursion keeps abort-on-first-error and cycle
    /// refusal in one place.
    pub fn walk(root: &Path, options: Options) -> Result<(Outcome, Vec<Entry>), Error> {
        let meta = root.metadata().map_err(|err| Error::Root {
            root: root.to_owned(),
            source: err,
        })?;
        if !meta.is_dir() {
            return Err(Error::RootNotADirectory { root: root.to_owned() });
        }

        let mut out = Outcome::default();
        let mut traversed = Vec::new();
        let entries = expand_directory(root, options, &mut traversed, &mut out)?;
        out.returned_entries = entries.len();
        Ok((out, entries))
    }

    /// Produce all entries beneath `dir` as a freshly allocated sequence, with each recursive
    /// call returning its own sub-sequence for the caller to concatenate.
    ///
    /// `traversed` holds the canonical paths of the directories the current traversal path is
    /// made of, so a symbolic link pointing back into that path is refused instead of followed.
    fn expand_directory(
        dir: &Path,
        options: Options,
        traversed: &mut Vec<PathBuf>,
        out: &mut Outcome,
    ) -> Result<Vec<Entry>, Error> {
        let real = fs::canonicalize(dir).map_err(|err| Error::Canonicalize {
            path: dir.to_owned(),
            source: err,
        })?;
        if let Some(ancestor) = traversed.iter().find(|ancestor| **ancestor == real) {
            return Err(Error::SymlinkCycle {
                path: dir.to_owned(),
                ancestor: ancestor.clone(),
            });
        }
        traversed.push(real);

        let mut listing = Vec::new();
        for item in fs::read_dir(dir).map_err(|err| Error::ReadDir {
            path: dir.to_owned(),
            source: err,
        })? {
            listing.push(item.map_err(|err| Error::ReadDir {
                path: dir.to_owned(),
                source: err,
            })?);
        }
        out.read_dir_calls += 1;
        out.seen_entries += listing.len();
        if options.sort_entries {
            listing.sort_by(|lhs, rhs| lhs.file_name().cmp(&rhs.file_name()));
        }

        let mut entries = Vec::new();
        for item in listing {
            let path = item.path();
            let file_type = item.file_type().map_err(|err| Error::EntryMetadata {
                path: path.clone(),
                source: err,
            })?;
            if leads_to_directory(&path, file_type)? {
                entries.extend(expand_directory(&path, options, traversed, out)?);
            } else {
                let kind = if file_type.is_symlink() {
                    Kind::Symlink
                } else if file_type.is_file() {
                    Kind::File
                } else {
                    Kind::Other
                };
                entries.push(Entry { path, kind });
            }
        }

        traversed.pop();
        Ok(entries)
    }

    /// Tell if `path` is to be traversed into, following symbolic links to directories the way
    /// `stat()` would.
    fn leads_to_directory(path: &Path, file_type: fs::FileType) -> Result<bool, Error> {
        if file_type.is_dir() {
            return Ok(true);
        }
        if !file_type.is_symlink() {
            return Ok(false);
        }
        let meta = fs::metadata(path).map_err(|err| Error::EntryMetadata {
            path: path.to_owned(),
            source: err,
        })?;
        Ok(meta.is_dir())
    }
}
