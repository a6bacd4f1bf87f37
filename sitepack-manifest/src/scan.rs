/// Options for use in the [`scan()`](function::scan()) function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub struct Options {
    /// If true, the entries of each directory beneath the content root are visited in byte
    /// order of their file names, making the manifest deterministic across filesystems.
    /// On by default, as manifests are build artifacts meant to be reproducible.
    pub sort_entries: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options { sort_entries: true }
    }
}

/// The error returned by [`scan()`](function::scan()).
#[derive(Debug, thiserror::Error)]
#[allow(missing_docs)]
pub enum Error {
    #[error(transparent)]
    Walk(#[from] sitepack_walk::walk::Error),
}

pub(crate) mod function {
    use std::path::{Path, PathBuf};

    use crate::scan::{Error, Options};
    use crate::{Manifest, Object};

    /// A function to produce the upload manifest for the content root at `root`, a readable
    /// directory, with one [`Object`] per file beneath it in traversal order.
    ///
    /// * `root` - the content root to scan.
    ///     - Object sources keep `root` as their prefix, and object keys are the sources with
    ///       the platform's path separator folded to `/`.
    /// * `options` - a way to change how the content root is traversed, see [`Options`].
    ///
    /// Every non-directory entry the traversal yields becomes an object, without filtering of
    /// any kind. A failure to traverse the content root aborts the scan; there is no partial
    /// manifest.
    pub fn scan(root: &Path, options: Options) -> Result<Manifest, Error> {
        let (_, entries) = sitepack_walk::walk(
            root,
            sitepack_walk::walk::Options {
                sort_entries: options.sort_entries,
            },
        )?;
        Ok(Manifest {
            root: root.to_owned(),
            objects: entries.into_iter().map(|entry| object(entry.path)).collect(),
        })
    }

    fn object(source: PathBuf) -> Object {
        let key = key(&source);
        let content_type = crate::content_type::from_path(&source).map(ToOwned::to_owned);
        Object {
            source,
            key,
            content_type,
        }
    }

    /// The key under which an object is published, `source` with `/` as separator on every
    /// platform.
    fn key(source: &Path) -> String {
        let lossy = source.to_string_lossy();
        if std::path::MAIN_SEPARATOR == '/' {
            lossy.into_owned()
        } else {
            lossy.replace(std::path::MAIN_SEPARATOR, "/")
        }
    }
}
