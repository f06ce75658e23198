#[cfg(test)]
mod tests;

use crate::QaError;
use crate::index::FlatIndex;

/// Instruction shown when a question arrives before any document has been
/// processed.
pub const NOT_READY_MESSAGE: &str = "Please upload and process a PDF first.";

/// The processed document currently held in memory: the similarity index
/// and the chunk list it was built from.
///
/// The index holds exactly one vector per chunk, in chunk order, so every
/// identifier returned by a search is a valid chunk position. Replaced
/// wholesale when a new document is processed; nothing survives the
/// process.
#[derive(Debug, Clone)]
pub struct DocumentSession {
    index: FlatIndex,
    chunks: Vec<String>,
}

impl DocumentSession {
    #[inline]
    pub fn new(index: FlatIndex, chunks: Vec<String>) -> Result<Self, QaError> {
        if index.len() != chunks.len() {
            return Err(QaError::Index(format!(
                "Index holds {} vectors for {} chunks",
                index.len(),
                chunks.len()
            )));
        }
        Ok(Self { index, chunks })
    }

    #[inline]
    pub fn index(&self) -> &FlatIndex {
        &self.index
    }

    #[inline]
    pub fn chunk(&self, id: usize) -> Option<&str> {
        self.chunks.get(id).map(String::as_str)
    }

    #[inline]
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }
}

/// Result of answering one question, converted to a display string only at
/// the interaction boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryOutcome {
    /// The model's reply, verbatim
    Answer(String),
    /// No document has been processed yet
    NotReady,
    /// The completion call failed; the description is reported as the answer
    Failed(String),
}

impl QueryOutcome {
    #[inline]
    pub fn into_display(self) -> String {
        match self {
            Self::Answer(text) | Self::Failed(text) => text,
            Self::NotReady => NOT_READY_MESSAGE.to_string(),
        }
    }
}
