// src/config.rs
use crate::cli::Args;
use std::path::PathBuf;

/// Resolved run configuration, threaded explicitly through the pass.
#[derive(Debug)]
pub struct Config {
    /// Absolute root of the scan.
    pub root: PathBuf,
    /// Absolute destination of the generated context file.
    pub output: PathBuf,
    /// Token budget; `None` = unlimited.
    pub max_tokens: Option<u64>,
}

impl Config {
    pub fn from_args(args: Args) -> anyhow::Result<Self> {
        let cwd = std::env::current_dir()?;
        let root = match args.root {
            Some(path) => logical_absolute(path, &cwd),
            None => cwd.clone(),
        };
        let output = logical_absolute(args.output, &cwd);
        // 0 は無制限扱い
        let max_tokens = args.max_tokens.filter(|&n| n > 0);

        Ok(Self { root, output, max_tokens })
    }
}

fn logical_absolute(path: PathBuf, cwd: &std::path::Path) -> PathBuf {
    if path.is_absolute() {
        path
    } else {
        cwd.join(path)
    }
}
