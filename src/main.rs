//! Wrdle - CLI
//!
//! Word guessing game with TUI and line-based modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use wrdle::{
    commands::{check_word, run_simple, score_words},
    engine::{AnswerFallback, EngineConfig, GameEngine},
    output::{Palette, print_score_result},
    wordlists::{
        DICTIONARY, WORDS, WordSource,
        loader::{load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "wrdle",
    about = "Guess the hidden five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Answer list file, one word per line (default: built-in list)
    #[arg(long, global = true)]
    words: Option<String>,

    /// Extra guessable words file, one per line (default: built-in list)
    #[arg(long, global = true)]
    dictionary: Option<String>,

    /// Word pre-filled as the first guess of every game
    #[arg(short = 'i', long, global = true)]
    initial_guess: Option<String>,

    /// Seed for answer selection
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Fail instead of using a fallback answer when the word list is unusable
    #[arg(long, global = true)]
    strict: bool,

    /// Use blue/red tiles instead of yellow/green
    #[arg(long, global = true)]
    high_contrast: bool,

    /// Start each game with a debug opening guess and the answer pre-filled
    #[arg(long, global = true)]
    debug: bool,

    /// Log engine activity to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line-based mode (no TUI)
    Simple,

    /// Score a guess against an answer
    Score {
        /// The guessed word
        guess: String,

        /// The answer to score against
        answer: String,
    },

    /// Check whether a word would be accepted as a guess
    Check {
        /// Word to check
        word: String,
    },
}

/// Load the answer list and dictionary from files or the built-in lists
fn load_words(words: Option<&str>, dictionary: Option<&str>) -> Result<WordSource> {
    let words = match words {
        Some(path) => load_from_file(path)?,
        None => words_from_slice(WORDS),
    };
    let dictionary = match dictionary {
        Some(path) => load_from_file(path)?,
        None => words_from_slice(DICTIONARY),
    };
    Ok(WordSource::new(words, dictionary))
}

fn build_config(cli: &Cli) -> EngineConfig {
    let mut config = EngineConfig::default().with_debug(cli.debug);
    if let Some(word) = &cli.initial_guess {
        config = config.with_initial_guess(word.clone());
    }
    if cli.strict {
        config = config.with_fallback(AnswerFallback::FailFast);
    }
    config
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();
    init_logging(cli.verbose);

    let palette = Palette::new(cli.high_contrast);

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play);

    if let Commands::Score { guess, answer } = &command {
        let result = score_words(guess, answer).map_err(|e| anyhow::anyhow!(e))?;
        print_score_result(&result.guess, &result.answer, &result.score, palette);
        return Ok(());
    }

    let words = load_words(cli.words.as_deref(), cli.dictionary.as_deref())?;
    let config = build_config(&cli);
    let mut engine = match cli.seed {
        Some(seed) => GameEngine::with_seed(words, config, seed),
        None => GameEngine::new(words, config),
    }
    .context("Could not start a game")?;

    match command {
        Commands::Play => run_play_command(engine, palette),
        Commands::Simple => run_simple(&mut engine, palette).map_err(|e| anyhow::anyhow!(e)),
        Commands::Check { word } => {
            run_check_command(&mut engine, &word);
            Ok(())
        }
        Commands::Score { .. } => Ok(()),
    }
}

fn run_check_command(engine: &mut GameEngine, word: &str) {
    let result = check_word(engine, word);
    if !result.valid {
        println!("❌ {}: {}", result.word, result.message.red());
    } else if result.is_answer {
        println!("✅ {} is a valid guess and a possible answer", result.word.green());
    } else {
        println!("✅ {} is a valid guess", result.word.green());
    }
}

fn run_play_command(engine: GameEngine, palette: Palette) -> Result<()> {
    use wrdle::interactive::{App, run_tui};

    let app = App::new(engine, palette);
    run_tui(app)
}
