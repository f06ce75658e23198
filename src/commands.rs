use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use console::style;
use dialoguer::{Input, Select};
use indicatif::ProgressBar;
use tracing::{info, warn};

use crate::config::Config;
use crate::qa::QaEngine;
use crate::session::DocumentSession;

/// Run the interactive session: a load-a-PDF action and an ask-a-question
/// action over a single shared session state, until the user quits.
#[inline]
pub fn run_chat(config: &Config, pdf: Option<&Path>) -> Result<()> {
    let engine = QaEngine::new(config)?;

    eprintln!("{}", style("📄 pdf-qa interactive session").bold().cyan());

    match engine.embeddings().health_check() {
        Ok(()) => {
            eprintln!(
                "{}",
                style(format!(
                    "✓ Ollama reachable ({}:{})",
                    config.ollama.host, config.ollama.port
                ))
                .green()
            );
        }
        Err(e) => {
            warn!("Ollama health check failed: {:#}", e);
            eprintln!(
                "{}",
                style("⚠ Warning: Ollama is not reachable; processing a PDF will fail.").yellow()
            );
            eprintln!("Run 'pdf-qa config' to update connection settings.");
        }
    }
    eprintln!();

    let mut session: Option<DocumentSession> = None;

    if let Some(path) = pdf {
        process_and_report(&engine, path, &mut session);
    }

    let actions = &["Load a PDF", "Ask a question", "Quit"];
    loop {
        let choice = Select::new()
            .with_prompt("Action")
            .default(if session.is_some() { 1 } else { 0 })
            .items(actions)
            .interact()?;

        match choice {
            0 => {
                let path: String = Input::new()
                    .with_prompt("Path to PDF")
                    .interact_text()?;
                process_and_report(&engine, Path::new(path.trim()), &mut session);
            }
            1 => {
                let question: String = Input::new()
                    .with_prompt("Your question")
                    .allow_empty(false)
                    .interact_text()?;
                answer_and_report(&engine, &question, session.as_ref());
            }
            _ => break,
        }
        eprintln!();
    }

    Ok(())
}

/// Process one PDF and answer one question, non-interactively.
#[inline]
pub fn ask_once(config: &Config, pdf: &Path, question: &str) -> Result<()> {
    let engine = QaEngine::new(config)?;

    let spinner = start_spinner("Processing PDF...");
    let processed = engine.process_document(pdf);
    spinner.finish_and_clear();
    let processed = processed.with_context(|| format!("Failed to process {}", pdf.display()))?;
    eprintln!("{}", style(&processed.status).green());

    let spinner = start_spinner("Answering...");
    let outcome = engine.answer(question, Some(&processed.session));
    spinner.finish_and_clear();

    println!("{}", outcome?.into_display());
    Ok(())
}

fn process_and_report(engine: &QaEngine, path: &Path, session: &mut Option<DocumentSession>) {
    if !path.exists() {
        eprintln!(
            "{}",
            style(format!("No such file: {}", path.display())).red()
        );
        return;
    }

    let spinner = start_spinner("Processing PDF...");
    let result = engine.process_document(path);
    spinner.finish_and_clear();

    match result {
        Ok(processed) => {
            info!(
                "Loaded {} with {} chunks",
                path.display(),
                processed.session.chunk_count()
            );
            eprintln!(
                "{} ({} chunks indexed)",
                style(&processed.status).green(),
                processed.session.chunk_count()
            );
            *session = Some(processed.session);
        }
        Err(e) => {
            eprintln!("{}", style(format!("Processing failed: {:#}", e)).red());
        }
    }
}

fn answer_and_report(engine: &QaEngine, question: &str, session: Option<&DocumentSession>) {
    let spinner = start_spinner("Answering...");
    let result = engine.answer(question, session);
    spinner.finish_and_clear();

    match result {
        Ok(outcome) => {
            eprintln!();
            eprintln!("{}", style("Answer:").bold());
            eprintln!("{}", outcome.into_display());
        }
        Err(e) => {
            eprintln!("{}", style(format!("Question failed: {:#}", e)).red());
        }
    }
}

fn start_spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spinner_does_not_panic_without_tty() {
        let spinner = start_spinner("working...");
        spinner.finish_and_clear();
    }

    #[test]
    fn nonexistent_path_is_reported_not_fatal() {
        let mut config = Config::default();
        config.ollama.port = 1;
        config.completion.api_key_env = "PDF_QA_TEST_MISSING_KEY".to_string();
        let engine = QaEngine::new(&config).expect("Failed to build engine");

        let mut session = None;
        process_and_report(&engine, Path::new("/nonexistent/x.pdf"), &mut session);
        assert!(session.is_none());
    }
}
