/// The kind of a returned entry.
///
/// Directories are traversed into, never returned, so there is no directory kind here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum Kind {
    /// The entry is a regular file.
    File,
    /// The entry is a symbolic link whose target is not a directory.
    ///
    /// A symbolic link to a directory is traversed like the directory it points to instead.
    Symlink,
    /// The entry is any other non-directory filesystem object, like a device node, socket or FIFO.
    Other,
}
