// src/main.rs
use anyhow::Result;

fn main() -> Result<()> {
    lm_context::app::run()
}
