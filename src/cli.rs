// src/cli.rs
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "lm_context",
    version,
    about = "Generate a single LLM context file from a directory tree"
)]
pub struct Args {
    /// Root directory to scan
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Output file path
    #[arg(long, default_value = "output.lm.txt")]
    pub output: PathBuf,

    /// Max token limit (approximate); 0 or unset = unlimited
    #[arg(long)]
    pub max_tokens: Option<u64>,
}
