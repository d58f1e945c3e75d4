//! Shared token estimation heuristic.
//!
//! Used consistently by the block selector (at block-creation time, where
//! the result is persisted into `ArtifactBlock::token_count` and never
//! re-estimated), by the lint engine's `budget-exceeded` rule, and by the
//! pipeline driver for `PromptMeta::total_tokens`.

/// `0` for empty/whitespace-only input, otherwise `ceil(word_count * 1.3)`
/// where `word_count` counts non-empty runs separated by any whitespace.
pub fn estimate_tokens(text: &str) -> u32 {
    let word_count = text.split_whitespace().count();
    if word_count == 0 {
        return 0;
    }
    ((word_count as f64) * 1.3).ceil() as u32
}
