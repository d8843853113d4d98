// src/assemble.rs
use crate::tokens::estimate_tokens;
use crate::walker::FileEntry;
use chrono::SecondsFormat;
use std::path::{Path, PathBuf};

/// Result of one assembly pass over the walked entries.
#[derive(Debug, Default)]
pub struct Assembled {
    /// The full context file text.
    pub text: String,
    /// Tokens accounted for the included text files.
    pub total_tokens: u64,
    /// Files dropped because they would exceed the budget, in traversal
    /// order. The caller emits one warning per entry.
    pub skipped: Vec<PathBuf>,
}

/// Build the context text from `entries` in traversal order.
///
/// Binary files are annotated (path, timestamp, byte size) and never counted
/// against the budget. A text file whose estimate would push the running
/// total past `max_tokens` is dropped whole, never truncated. Performs no
/// I/O.
pub fn assemble(entries: &[FileEntry], root: &Path, max_tokens: Option<u64>) -> Assembled {
    let mut out = Assembled::default();

    for entry in entries {
        let rel = entry.path.strip_prefix(root).unwrap_or(&entry.path);
        let stamp = entry.modified.to_rfc3339_opts(SecondsFormat::Millis, true);

        if entry.binary {
            out.text.push_str(&format!(
                "--- Binary File: {} (last modified: {}, size: {} bytes) ---\n\n",
                rel.display(),
                stamp,
                entry.size
            ));
            continue;
        }

        let tokens = estimate_tokens(&entry.content);
        if let Some(budget) = max_tokens {
            if out.total_tokens + tokens > budget {
                out.skipped.push(entry.path.clone());
                continue;
            }
        }

        out.total_tokens += tokens;
        out.text.push_str(&format!(
            "--- File: {} (last modified: {}) ---\n",
            rel.display(),
            stamp
        ));
        out.text.push_str(&entry.content);
        out.text.push_str("\n\n");
    }

    out
}
