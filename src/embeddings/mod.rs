// Embeddings module
// Word-window chunking and the Ollama embedding client

pub mod chunking;
pub mod ollama;

pub use chunking::chunk_document;
pub use ollama::OllamaClient;
