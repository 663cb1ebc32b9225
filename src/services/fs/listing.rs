use crate::core::errors::{Error, Result};
use crate::models::entry::{EntryKind, ScannedEntry};
use std::ffi::OsStr;
use std::fs;
use std::path::Path;
use tracing::warn;

/// Controls the order in which scanned entries are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryOrder {
    /// Sorted by name in byte order, deterministic across platforms.
    Name,
    /// Raw OS listing order, an accident of the underlying readdir call.
    Listing,
}

/// Scans the immediate entries of `root`. Single level: nothing is recursed
/// into. Entries whose type cannot be determined are skipped with a warning;
/// failing to read `root` itself is an error.
pub fn scan_entries(root: &Path) -> Result<Vec<ScannedEntry>> {
    let read = fs::read_dir(root).map_err(|e| Error::list_dir(root, e))?;

    let mut entries = Vec::new();
    for item in read {
        let item = item.map_err(|e| Error::list_dir(root, e))?;
        let name = os_str_to_string(item.file_name());
        match classify(&item) {
            Ok(kind) => entries.push(ScannedEntry::new(name, kind)),
            Err(e) => warn!("skipping {:?}: cannot determine entry type: {}", name, e),
        }
    }
    Ok(entries)
}

/// Names of the qualifying subdirectories of `root`, in the requested order.
pub fn list_subdirs(root: &Path, order: EntryOrder) -> Result<Vec<String>> {
    let mut names: Vec<String> = scan_entries(root)?
        .into_iter()
        .filter(|e| e.qualifies())
        .map(|e| e.name)
        .collect();
    if order == EntryOrder::Name {
        names.sort();
    }
    Ok(names)
}

/// Symlinks count as whatever they resolve to, so a link to a directory is
/// a directory. Links whose target is unreachable stay `Symlink` and never
/// qualify.
fn classify(item: &fs::DirEntry) -> std::io::Result<EntryKind> {
    let ft = item.file_type()?;
    if ft.is_symlink() {
        return Ok(match fs::metadata(item.path()) {
            Ok(md) if md.is_dir() => EntryKind::Dir,
            Ok(md) if md.is_file() => EntryKind::File,
            _ => EntryKind::Symlink,
        });
    }
    Ok(if ft.is_dir() {
        EntryKind::Dir
    } else if ft.is_file() {
        EntryKind::File
    } else {
        EntryKind::Other
    })
}

fn os_str_to_string(s: impl AsRef<OsStr>) -> String {
    s.as_ref().to_string_lossy().into_owned()
}
