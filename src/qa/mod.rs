
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use crate::completion::CompletionClient;
use crate::config::{ChunkingConfig, Config};
use crate::embeddings::OllamaClient;
use crate::embeddings::chunk_document;
use crate::extractor::extract_text;
use crate::index::FlatIndex;
use crate::session::{DocumentSession, QueryOutcome};

/// Status line reported after a successful processing run.
pub const PROCESSED_MESSAGE: &str = "PDF processed successfully.";

/// Result of processing one PDF: the status line for the surface and the
/// session state that replaces whatever was loaded before.
#[derive(Debug)]
pub struct ProcessedDocument {
    pub status: String,
    pub session: DocumentSession,
}

/// The question-answering pipeline.
///
/// Owns the embedding and completion clients, which are constructed once
/// and reused read-only for every request.
pub struct QaEngine {
    embeddings: OllamaClient,
    completion: CompletionClient,
    chunking: ChunkingConfig,
    top_k: usize,
}

impl QaEngine {
    #[inline]
    pub fn new(config: &Config) -> Result<Self> {
        let embeddings =
            OllamaClient::new(&config.ollama).context("Failed to create embedding client")?;
        let completion =
            CompletionClient::new(&config.completion).context("Failed to create completion client")?;

        Ok(Self {
            embeddings,
            completion,
            chunking: config.chunking.clone(),
            top_k: config.retrieval.top_k,
        })
    }

    #[inline]
    pub fn embeddings(&self) -> &OllamaClient {
        &self.embeddings
    }

    /// Extract, chunk, embed, and index a PDF.
    ///
    /// A document with no extractable text is rejected and the caller's
    /// current session state is left untouched. The index dimension is
    /// taken from the first embedding returned; every vector is inserted in
    /// chunk order.
    #[inline]
    pub fn process_document(&self, path: &Path) -> Result<ProcessedDocument> {
        info!("Processing document: {}", path.display());

        let text = extract_text(path)?;
        let chunks = chunk_document(&text, &self.chunking);

        if chunks.is_empty() {
            warn!("Document {} produced no chunks", path.display());
            anyhow::bail!(
                "No extractable text found in {}; nothing to index",
                path.display()
            );
        }

        let vectors = self
            .embeddings
            .embed_batch(&chunks)
            .context("Failed to embed document chunks")?;

        let dimension = vectors.first().map_or(0, Vec::len);
        let mut index = FlatIndex::new(dimension);
        for vector in vectors {
            index.add(vector)?;
        }

        let session = DocumentSession::new(index, chunks)?;
        info!(
            "Indexed {} chunks at dimension {}",
            session.chunk_count(),
            dimension
        );

        Ok(ProcessedDocument {
            status: PROCESSED_MESSAGE.to_string(),
            session,
        })
    }

    /// Answer a question against the current session state.
    ///
    /// With no processed document the fixed instruction outcome is returned
    /// and no remote service is contacted. A completion failure is caught
    /// here and reported as a `Failed` outcome; embedding and search
    /// failures propagate to the caller.
    #[inline]
    pub fn answer(&self, question: &str, session: Option<&DocumentSession>) -> Result<QueryOutcome> {
        let Some(session) = session else {
            return Ok(QueryOutcome::NotReady);
        };
        if session.is_empty() {
            return Ok(QueryOutcome::NotReady);
        }

        let query_vector = self
            .embeddings
            .embed(question)
            .context("Failed to embed question")?;

        let hits = session.index().search(&query_vector, self.top_k)?;
        let context = build_context(session, &hits);
        debug!(
            "Retrieved {} chunks ({} chars of context)",
            hits.len(),
            context.len()
        );

        match self.completion.complete(&context, question) {
            Ok(answer) => Ok(QueryOutcome::Answer(answer)),
            Err(e) => {
                warn!("Completion call failed: {:#}", e);
                Ok(QueryOutcome::Failed(format!(
                    "Error from completion API: {:#}",
                    e
                )))
            }
        }
    }
}

/// Join retrieved chunks, nearest first, separated by blank lines.
fn build_context(session: &DocumentSession, hits: &[crate::index::SearchHit]) -> String {
    hits.iter()
        .filter_map(|hit| session.chunk(hit.id))
        .collect::<Vec<_>>()
        .join("\n\n")
}
