use std::path::PathBuf;

use clap::{Parser, Subcommand};
use pdf_qa::Result;
use pdf_qa::commands::{ask_once, run_chat};
use pdf_qa::config::{Config, run_interactive_config, show_config};

#[derive(Parser)]
#[command(name = "pdf-qa")]
#[command(about = "Ask questions about a PDF using embedding search and a completion API")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Configure embedding and completion endpoints
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
    /// Start an interactive question-answering session
    Chat {
        /// PDF to load and process on startup
        #[arg(long)]
        pdf: Option<PathBuf>,
    },
    /// Process a PDF and answer a single question
    Ask {
        /// Path to the PDF document
        pdf: PathBuf,
        /// The question to ask about the document
        question: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Config { show } => {
            if show {
                show_config()?;
            } else {
                run_interactive_config()?;
            }
        }
        Commands::Chat { pdf } => {
            let config = Config::load_default()?;
            run_chat(&config, pdf.as_deref())?;
        }
        Commands::Ask { pdf, question } => {
            let config = Config::load_default()?;
            ask_once(&config, &pdf, &question)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn cli_parsing() {
        let cli = Cli::try_parse_from(["pdf-qa", "chat"]);
        assert!(cli.is_ok());

        if let Ok(parsed) = cli {
            matches!(parsed.command, Commands::Chat { .. });
        }
    }

    #[test]
    fn chat_command_with_pdf() {
        let cli = Cli::try_parse_from(["pdf-qa", "chat", "--pdf", "resume.pdf"]);
        assert!(cli.is_ok());

        if let Ok(parsed) = cli {
            if let Commands::Chat { pdf } = parsed.command {
                assert_eq!(pdf, Some(PathBuf::from("resume.pdf")));
            }
        }
    }

    #[test]
    fn ask_command_arguments() {
        let cli = Cli::try_parse_from(["pdf-qa", "ask", "resume.pdf", "Who wrote this?"]);
        assert!(cli.is_ok());

        if let Ok(parsed) = cli {
            if let Commands::Ask { pdf, question } = parsed.command {
                assert_eq!(pdf, PathBuf::from("resume.pdf"));
                assert_eq!(question, "Who wrote this?");
            }
        }
    }

    #[test]
    fn ask_command_requires_question() {
        let cli = Cli::try_parse_from(["pdf-qa", "ask", "resume.pdf"]);
        assert!(cli.is_err());
    }

    #[test]
    fn config_show_flag() {
        let cli = Cli::try_parse_from(["pdf-qa", "config", "--show"]);
        assert!(cli.is_ok());

        if let Ok(parsed) = cli {
            if let Commands::Config { show } = parsed.command {
                assert!(show);
            }
        }
    }

    #[test]
    fn invalid_command() {
        let cli = Cli::try_parse_from(["pdf-qa", "invalid"]);
        assert!(cli.is_err());

        if let Err(err) = cli {
            assert_eq!(err.kind(), ErrorKind::InvalidSubcommand);
        }
    }

    #[test]
    fn help_message() {
        let cli = Cli::try_parse_from(["pdf-qa", "--help"]);
        assert!(cli.is_err());

        if let Err(err) = cli {
            assert_eq!(err.kind(), ErrorKind::DisplayHelp);
        }
    }
}
