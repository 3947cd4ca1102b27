//! Wordle Game - CLI
//!
//! Terminal Wordle with a TUI mode, a line-based mode and a scripted replay.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use wordle_game::{
    commands::{replay, run_simple},
    config::{GameConfig, WordList},
    core::Word,
    interactive::{App, run_tui},
    output::{outcome_message, print_board, print_keyboard, share_text},
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the hidden five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Seed for reproducible target selection
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Always play against this word
    #[arg(short, long, global = true)]
    target: Option<String>,

    /// Log debug output to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (one guess per line, no TUI)
    Simple,

    /// Replay a list of guesses against a known target and print the board
    Replay {
        /// The target word
        target: String,

        /// Guesses in order
        #[arg(required = true)]
        guesses: Vec<String>,
    },
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    let filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .without_time()
                .with_target(false),
        )
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = GameConfig {
        word_list: WordList::from_arg(&cli.wordlist),
        seed: cli.seed,
        target: cli.target,
    };

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&config),
        Commands::Simple => run_simple_command(&config),
        Commands::Replay { target, guesses } => run_replay_command(&target, &guesses),
    }
}

fn run_play_command(config: &GameConfig) -> Result<()> {
    let source = config.word_source()?;
    run_tui(App::new(source))
}

fn run_simple_command(config: &GameConfig) -> Result<()> {
    let mut source = config.word_source()?;
    run_simple(source.as_mut())
}

fn run_replay_command(target: &str, guesses: &[String]) -> Result<()> {
    let target = Word::new(target).with_context(|| format!("invalid target {target:?}"))?;
    let result = replay(target, guesses);

    for (guess, error) in &result.rejected {
        println!("{} {guess}: {error}", "skipped".yellow());
    }

    print_board(&result.game);
    print_keyboard(result.game.key_statuses());

    match outcome_message(&result.game) {
        Some(message) => {
            println!("\n{}\n", message.bold());
            println!("{}", share_text(&result.game));
        }
        None => println!(
            "\nGame still in progress after {} guesses.",
            result.game.attempts_used()
        ),
    }

    if !result.unused.is_empty() {
        println!(
            "{} {}",
            "ignored after game end:".bright_black(),
            result.unused.join(" ")
        );
    }
    Ok(())
}
