// src/tokens.rs

/// Approximate LLM token count: one token per four characters, rounded up.
///
/// This is a heuristic for budget accounting, not a real tokenizer.
pub fn estimate_tokens(text: &str) -> u64 {
    (text.chars().count() as u64).div_ceil(4)
}

/// NULL バイトがあればバイナリと判定
///
/// False negatives are possible for binary formats without null bytes.
pub fn is_binary(buf: &[u8]) -> bool {
    buf.contains(&0)
}
