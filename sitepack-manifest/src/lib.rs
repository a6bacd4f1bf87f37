//! A crate for turning a static site's content root into its upload manifest.
#![deny(rust_2018_idioms)]
#![forbid(unsafe_code)]
use std::path::PathBuf;

/// An object to publish, derived from one file beneath the content root.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Object {
    /// The path of the file to publish, always with the content root as prefix,
    /// the first parameter of [`scan()`].
    pub source: PathBuf,
    /// The key under which the object is published: `source` with the platform's path
    /// separator folded to `/`.
    pub key: String,
    /// The media type derived from the file extension of `source`, or `None` if the
    /// extension is unrecognized or missing, leaving the choice to the consumer.
    pub content_type: Option<String>,
}

/// All objects to publish for one content root, in traversal order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Manifest {
    /// The content root that was scanned, as passed to [`scan()`].
    pub root: PathBuf,
    /// One object per file found beneath `root`.
    pub objects: Vec<Object>,
}

///
pub mod content_type;

///
pub mod scan;
pub use scan::function::scan;
