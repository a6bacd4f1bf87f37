//! A crate for enumerating the content files beneath a static site's root directory.
#![deny(rust_2018_idioms)]
#![forbid(unsafe_code)]
use std::path::PathBuf;

/// A non-directory filesystem entry, typically obtained using [`walk()`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub struct Entry {
    /// The path at which the entry can be found, always with `root` as prefix,
    /// the first parameter of [`walk()`].
    pub path: PathBuf,
    /// The kind of entry.
    pub kind: entry::Kind,
}

///
pub mod entry;

///
pub mod walk;
pub use walk::function::walk;
