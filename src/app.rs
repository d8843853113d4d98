// src/app.rs
use crate::config::Config;
use crate::prompt::{Confirm, StdinConfirm};
use crate::{assemble, cli, filter, walker};
use anyhow::{Context, Result};
use clap::Parser;
use std::fs;

pub fn run() -> Result<()> {
    let args = cli::Args::parse();
    let config = Config::from_args(args)?;
    run_with_config(&config, &mut StdinConfirm)
}

/// Drive one full pass: filter → walk → assemble → write.
///
/// Returns `Ok(())` without writing anything when the operator declines the
/// no-ignore-file prompt.
pub fn run_with_config(config: &Config, confirm: &mut dyn Confirm) -> Result<()> {
    let Some(filter) = filter::build_filter(&config.root, confirm)
        .context("failed to build ignore filter")?
    else {
        println!("Aborting.");
        return Ok(());
    };

    let entries = walker::collect_entries(&config.root, &filter)
        .with_context(|| format!("failed to scan '{}'", config.root.display()))?;

    let assembled = assemble::assemble(&entries, &config.root, config.max_tokens);
    for path in &assembled.skipped {
        eprintln!("Skipping {} (token limit exceeded)", path.display());
    }

    println!("Estimated total tokens: {}", assembled.total_tokens);

    fs::write(&config.output, &assembled.text)
        .with_context(|| format!("failed to write output '{}'", config.output.display()))?;
    println!("Wrote output to {}", config.output.display());

    Ok(())
}
