// src/filter.rs
use crate::error::{Error, Result};
use crate::prompt::Confirm;
use ignore::gitignore::{Gitignore, GitignoreBuilder};
use std::path::{Path, PathBuf};

const LM_IGNORE: &str = ".lm_ignore";
const GITIGNORE: &str = ".gitignore";
const PROMPT: &str = "No .lm_ignore or .gitignore found. Type \"yes\" to continue: ";

/// Include predicate over file paths, compiled once per run and shared
/// read-only across the whole walk.
#[derive(Debug)]
pub struct IgnoreFilter {
    rules: Gitignore,
}

impl IgnoreFilter {
    /// True when `path` survives the ignore rules, i.e. should be included.
    ///
    /// `path` is matched relative to the filter's root; a rule matching any
    /// parent directory excludes the file as well.
    pub fn is_included(&self, path: &Path) -> bool {
        !self
            .rules
            .matched_path_or_any_parents(path, false)
            .is_ignore()
    }

    fn from_file(root: &Path, file: PathBuf) -> Result<Self> {
        let mut builder = GitignoreBuilder::new(root);
        if let Some(err) = builder.add(file) {
            return Err(err.into());
        }
        Ok(Self { rules: builder.build()? })
    }

    fn allow_all(root: &Path) -> Result<Self> {
        Ok(Self { rules: GitignoreBuilder::new(root).build()? })
    }
}

/// Resolve the ignore rule source for `root`: `.lm_ignore` wins over
/// `.gitignore`; with neither present the operator must confirm scanning the
/// tree unfiltered. `Ok(None)` means the operator declined.
pub fn build_filter(root: &Path, confirm: &mut dyn Confirm) -> Result<Option<IgnoreFilter>> {
    let lm_ignore = root.join(LM_IGNORE);
    if lm_ignore.exists() {
        return IgnoreFilter::from_file(root, lm_ignore).map(Some);
    }

    let gitignore = root.join(GITIGNORE);
    if gitignore.exists() {
        return IgnoreFilter::from_file(root, gitignore).map(Some);
    }

    if confirm.confirm(PROMPT).map_err(Error::Prompt)? {
        IgnoreFilter::allow_all(root).map(Some)
    } else {
        Ok(None)
    }
}
