//! Paraphraser CLI
//!
//! Command-line front end for paraphrasing text and reading it aloud.

#![allow(clippy::print_stdout)]

use std::{io::Read, path::PathBuf};

use anyhow::Context;
use application::TtsResult;
use clap::{Parser, Subcommand};
use domain::{ParaphraseOptions, ParaphraseStyle, WordCount};
use infrastructure::{AppConfig, AppServices, init_tracing};
use tracing::{debug, warn};

/// Paraphraser CLI
#[derive(Parser)]
#[command(name = "paraphraser")]
#[command(author, version, about = "Rewrite text in a chosen style and read it aloud", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Count words the way the paraphrase limit does
    CountWords {
        /// Text to count, or "-" to read stdin
        text: String,
    },

    /// List the available paraphrasing styles
    Styles,

    /// Paraphrase text in a chosen style
    Paraphrase {
        /// Text to paraphrase, or "-" to read stdin
        text: String,

        /// Paraphrasing style (balanced, formal, casual, concise, detailed)
        #[arg(short, long, default_value_t = ParaphraseStyle::Balanced)]
        style: ParaphraseStyle,

        /// Do not ask the model to keep the emotional tone
        #[arg(long)]
        no_preserve_tone: bool,

        /// Do not ask the model to keep the length similar
        #[arg(long)]
        no_maintain_length: bool,

        /// API key for this request (falls back to GEMINI_API_KEY)
        #[arg(long)]
        api_key: Option<String>,
    },

    /// Convert text to speech and save the audio
    Speak {
        /// Text to speak, or "-" to read stdin
        text: String,

        /// Voice identifier
        #[arg(long)]
        voice: Option<String>,

        /// Where to write the audio
        #[arg(short, long)]
        output: PathBuf,
    },
}

const fn log_filter_from_verbosity(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    }
}

/// Use the argument as-is, or read all of stdin for "-"
fn read_text(arg: String) -> anyhow::Result<String> {
    if arg != "-" {
        return Ok(arg);
    }

    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .context("Failed to read text from stdin")?;
    Ok(text)
}

fn options_from_flags(
    style: ParaphraseStyle,
    no_preserve_tone: bool,
    no_maintain_length: bool,
) -> ParaphraseOptions {
    ParaphraseOptions::with_style(style)
        .preserve_tone(!no_preserve_tone)
        .maintain_length(!no_maintain_length)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let dotenv = dotenvy::dotenv();

    let (mut config, load_error) = AppConfig::load_or_default();

    if let Some(filter) = log_filter_from_verbosity(cli.verbose) {
        config.logging.filter = filter.to_string();
    }
    init_tracing(&config.logging)?;

    if let Ok(path) = dotenv {
        debug!(path = %path.display(), "Loaded .env file");
    }
    if let Some(e) = load_error {
        warn!("Failed to load config, using defaults: {e}");
    }

    match cli.command {
        Commands::CountWords { text } => {
            let text = read_text(text)?;
            let count = WordCount::of(&text);
            println!("{count}");
            if count.exceeds_limit() {
                println!("⚠️  Text exceeds {} words", count.limit());
            }
        },

        Commands::Styles => {
            for style in ParaphraseStyle::all() {
                println!("{:<10} {}", style.label(), style.instruction());
            }
        },

        Commands::Paraphrase {
            text,
            style,
            no_preserve_tone,
            no_maintain_length,
            api_key,
        } => {
            let text = read_text(text)?;
            let services = AppServices::from_config(&config)?;
            let options = options_from_flags(style, no_preserve_tone, no_maintain_length);

            match services
                .paraphrase
                .paraphrase_text(&text, options, api_key.as_deref())
                .await
            {
                Ok(paraphrased) => println!("{paraphrased}"),
                Err(e) => {
                    println!("❌ {}", e.user_message());
                    std::process::exit(1);
                },
            }
        },

        Commands::Speak {
            text,
            voice,
            output,
        } => {
            let text = read_text(text)?;
            let services = AppServices::from_config(&config)?;

            match services
                .speech
                .fetch_tts_audio(&text, voice.as_deref())
                .await
            {
                TtsResult::Success { audio } => {
                    tokio::fs::write(&output, &audio)
                        .await
                        .with_context(|| format!("Failed to write {}", output.display()))?;
                    println!("🔊 Saved {} bytes to {}", audio.len(), output.display());
                },
                TtsResult::Unavailable => {
                    println!("🔇 Speech unavailable; fall back to local speech synthesis.");
                    std::process::exit(2);
                },
            }
        },
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_filter_verbosity_zero_keeps_config() {
        assert_eq!(log_filter_from_verbosity(0), None);
    }

    #[test]
    fn log_filter_verbosity_levels() {
        assert_eq!(log_filter_from_verbosity(1), Some("info"));
        assert_eq!(log_filter_from_verbosity(2), Some("debug"));
        assert_eq!(log_filter_from_verbosity(3), Some("trace"));
        assert_eq!(log_filter_from_verbosity(10), Some("trace"));
    }

    #[test]
    fn read_text_passes_arguments_through() {
        assert_eq!(read_text("hello".to_string()).unwrap(), "hello");
    }

    #[test]
    fn flags_invert_toggles() {
        let options = options_from_flags(ParaphraseStyle::Casual, true, false);
        assert_eq!(options.style, ParaphraseStyle::Casual);
        assert!(!options.preserve_tone);
        assert!(options.maintain_length);
    }

    #[test]
    fn cli_parses_paraphrase() {
        let cli = Cli::parse_from([
            "paraphraser",
            "paraphrase",
            "hello there",
            "--style",
            "FORMAL",
            "--no-maintain-length",
        ]);
        match cli.command {
            Commands::Paraphrase {
                text,
                style,
                no_preserve_tone,
                no_maintain_length,
                api_key,
            } => {
                assert_eq!(text, "hello there");
                assert_eq!(style, ParaphraseStyle::Formal);
                assert!(!no_preserve_tone);
                assert!(no_maintain_length);
                assert!(api_key.is_none());
            },
            _ => panic!("expected paraphrase command"),
        }
    }

    #[test]
    fn cli_rejects_unknown_style() {
        let result = Cli::try_parse_from(["paraphraser", "paraphrase", "hi", "--style", "poetic"]);
        assert!(result.is_err());
    }

    #[test]
    fn cli_requires_output_for_speak() {
        assert!(Cli::try_parse_from(["paraphraser", "speak", "hi"]).is_err());
        let cli = Cli::try_parse_from(["paraphraser", "speak", "hi", "-o", "out.mp3"]).unwrap();
        assert!(matches!(cli.command, Commands::Speak { voice: None, .. }));
    }

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
