// Configuration management module
// TOML settings plus the interactive editor

pub mod interactive;
pub mod settings;

pub use interactive::{run_interactive_config, show_config};
pub use settings::{ChunkingConfig, CompletionConfig, Config, ConfigError, OllamaConfig, RetrievalConfig};
