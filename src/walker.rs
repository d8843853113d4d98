// src/walker.rs
use crate::error::{Error, Result};
use crate::filter::IgnoreFilter;
use crate::tokens::is_binary;
use chrono::{DateTime, Utc};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// One discovered file, fully read into memory.
///
/// `content` is empty for binary files; `size` is always the raw byte
/// length.
#[derive(Debug, Clone)]
pub struct FileEntry {
    pub path: PathBuf,
    pub modified: DateTime<Utc>,
    pub content: String,
    pub size: u64,
    pub binary: bool,
}

fn is_hidden(entry: &DirEntry) -> bool {
    // The root itself is exempt so a scan of "." or a dot-named root works.
    entry.depth() > 0 && entry.file_name().to_string_lossy().starts_with('.')
}

/// Depth-first walk of `root` in directory-listing order, subdirectories
/// expanded inline at the point encountered.
///
/// Hidden entries and their whole subtrees are skipped. Symlinks are neither
/// followed nor reported. Directories are recursed into unconditionally; the
/// ignore filter applies to regular files only. Any read, metadata, or
/// encoding failure aborts the walk.
pub fn collect_entries(root: &Path, filter: &IgnoreFilter) -> Result<Vec<FileEntry>> {
    let mut entries = Vec::new();
    let walker = WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|e| !is_hidden(e));

    for entry in walker {
        let entry = entry?;
        // Directories recurse; symlinks are not regular files and drop out.
        if !entry.file_type().is_file() {
            continue;
        }
        if !filter.is_included(entry.path()) {
            continue;
        }
        entries.push(read_entry(&entry)?);
    }

    Ok(entries)
}

fn read_entry(entry: &DirEntry) -> Result<FileEntry> {
    let path = entry.path();

    let metadata = entry.metadata()?;
    let modified = metadata
        .modified()
        .map(DateTime::<Utc>::from)
        .map_err(|source| Error::Metadata { path: path.to_path_buf(), source })?;

    let buffer = fs::read(path).map_err(|source| Error::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let binary = is_binary(&buffer);
    let size = buffer.len() as u64;
    let content = if binary {
        String::new()
    } else {
        String::from_utf8(buffer).map_err(|source| Error::InvalidUtf8 {
            path: path.to_path_buf(),
            source,
        })?
    };

    Ok(FileEntry {
        path: path.to_path_buf(),
        modified,
        content,
        size,
        binary,
    })
}
