#[cfg(test)]
mod tests;

use tracing::debug;

use crate::config::ChunkingConfig;

/// Split a document into consecutive windows of `chunk_size` words.
///
/// Tokens are whitespace-separated words; each window is rejoined with
/// single spaces, so the concatenated word sequence of all chunks is exactly
/// the word sequence of the input. Windows do not overlap and the final
/// window may be shorter. Empty input yields no chunks.
#[inline]
pub fn chunk_document(text: &str, config: &ChunkingConfig) -> Vec<String> {
    let words: Vec<&str> = text.split_whitespace().collect();
    let chunks: Vec<String> = words
        .chunks(config.chunk_size)
        .map(|window| window.join(" "))
        .collect();

    debug!(
        "Chunked {} words into {} chunks of up to {} words",
        words.len(),
        chunks.len(),
        config.chunk_size
    );

    chunks
}
