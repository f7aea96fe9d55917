/// Interactive CLI front end for the FAQ bot.
///
/// Owns everything the retrieval core does not: flag parsing, config
/// loading, log subscriber setup, model download, and the read-eval loop.
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use faqbot::bot::FaqBot;
use faqbot::config::Config;
use faqbot::embedder::{download, Embedder, MockEmbedder, OnnxEmbedder};

#[derive(Parser)]
#[command(
    name = "faqbot",
    version,
    about = "Semantic FAQ bot over a static knowledge base"
)]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "")]
    config: String,

    /// Directory holding model.onnx and tokenizer.json (downloaded on demand)
    #[arg(long)]
    model_dir: Option<PathBuf>,

    /// Use the deterministic mock embedder instead of the ONNX model
    #[arg(long)]
    mock: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // 1. Load config
    let config = Config::load(&cli.config)?;
    config.validate().context("invalid configuration")?;

    // 2. Init logging (RUST_LOG overrides the configured level)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.logging.level.clone())),
        )
        .with_target(false)
        .init();

    // 3. Init embedder
    let embedder: Arc<dyn Embedder> = if cli.mock {
        Arc::new(MockEmbedder::new(config.model.dimensions))
    } else {
        let model_dir = cli
            .model_dir
            .clone()
            .unwrap_or_else(download::default_model_dir);
        download::download_model_files(&model_dir).context("model download failed")?;
        Arc::new(OnnxEmbedder::new(&model_dir)?)
    };

    // 4. Build the bot (embeds the whole corpus once)
    let bot = FaqBot::new(config, embedder)?;

    run_loop(&bot)
}

fn run_loop(bot: &FaqBot) -> Result<()> {
    println!("FAQ Bot: Hello! Ask me anything. Type 'exit' to quit.\n");
    println!("Here are some example questions:");
    for (i, q) in bot.example_questions().iter().take(3).enumerate() {
        println!("{}. {q}", i + 1);
    }

    let mut history = Vec::new();
    let stdin = io::stdin();
    let mut reader = stdin.lock();

    loop {
        print!("\nYou: ");
        io::stdout().flush()?;

        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            break; // EOF
        }
        let input = line.trim();

        if matches!(input.to_lowercase().as_str(), "exit" | "quit" | "bye") {
            println!("\nFAQ Bot: Goodbye!");
            break;
        }
        if input.is_empty() {
            continue;
        }

        match bot.handle_turn(&mut history, input) {
            Ok(response) => println!("\nFAQ Bot: {}", response.answer),
            Err(e) => eprintln!("\nError: {e}"),
        }
    }

    Ok(())
}
