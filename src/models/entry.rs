/// The logical kind of a scanned directory entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Dir,
    File,
    Symlink,
    Other,
}

/// A single entry produced by scanning the root directory. Transient: it
/// exists only between the scan and the rendering pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedEntry {
    pub name: String,
    pub kind: EntryKind,
}

impl ScannedEntry {
    pub fn new(name: impl Into<String>, kind: EntryKind) -> ScannedEntry {
        ScannedEntry {
            name: name.into(),
            kind,
        }
    }

    /// Hidden entries are recognized by name prefix alone, never by an
    /// OS-level hidden attribute (these differ on non-POSIX filesystems).
    pub fn is_hidden(&self) -> bool {
        self.name.starts_with('.')
    }

    /// An entry is indexed only if it is a directory and not hidden.
    pub fn qualifies(&self) -> bool {
        self.kind == EntryKind::Dir && !self.is_hidden()
    }
}
