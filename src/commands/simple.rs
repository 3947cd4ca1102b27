//! Simple interactive CLI mode
//!
//! Text-based game without the TUI: one whole guess per line.

use super::replay::enter_word;
use crate::core::{GameState, Transition, Word};
use crate::output::{outcome_message, print_board, print_keyboard, share_text};
use crate::wordlists::WordSource;
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// What a line of user input asks for
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Quit,
    NewGame,
    Guess(Word),
    Invalid(String),
}

fn parse_line(line: &str) -> Command {
    match line.trim().to_lowercase().as_str() {
        "quit" | "q" | "exit" => Command::Quit,
        "new" | "n" => Command::NewGame,
        other => match Word::new(other) {
            Ok(word) => Command::Guess(word),
            Err(e) => Command::Invalid(e.to_string()),
        },
    }
}

/// Run the simple interactive CLI mode on stdin
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(source: &mut dyn WordSource) -> Result<()> {
    let stdin = io::stdin();
    play_lines(source, stdin.lock())
}

/// Drive games from any line-oriented reader
///
/// # Errors
///
/// Returns an error if reading from `input` or flushing stdout fails.
pub fn play_lines<R: BufRead>(source: &mut dyn WordSource, mut input: R) -> Result<()> {
    println!("\n╔══════════════════════════════════════════╗");
    println!("║            Wordle - Simple Mode          ║");
    println!("╚══════════════════════════════════════════╝\n");
    println!("Guess the hidden five-letter word in six tries.");
    println!("  - {} right letter, right spot", " A ".black().on_green());
    println!("  - {} right letter, wrong spot", " A ".black().on_yellow());
    println!("Commands: 'quit' to exit, 'new' for a new game\n");

    let mut game = GameState::new(source);

    loop {
        if game.is_ended() {
            if let Some(message) = outcome_message(&game) {
                let styled = if game.outcome().is_some_and(|o| o.is_win()) {
                    message.green().bold()
                } else {
                    message.red().bold()
                };
                println!("\n{styled}\n");
            }
            println!("{}\n", share_text(&game));

            match prompt(&mut input, "Play again? (yes/no)")?.as_deref() {
                Some("yes" | "y") => {
                    game.restart(source);
                    println!("\n🔄 New game started!");
                    continue;
                }
                _ => break,
            }
        }

        let (row, _) = game.cursor();
        let Some(line) = prompt(&mut input, &format!("Guess {}/6", row + 1))? else {
            break;
        };

        match parse_line(&line) {
            Command::Quit => break,
            Command::NewGame => {
                game.restart(source);
                println!("\n🔄 New game started!");
            }
            Command::Invalid(reason) => println!("❌ {reason}"),
            Command::Guess(word) => {
                if enter_word(&mut game, &word) != Transition::Ignored {
                    print_board(&game);
                    print_keyboard(game.key_statuses());
                }
            }
        }
    }

    println!("\n👋 Thanks for playing!\n");
    Ok(())
}

/// Read one trimmed, lowercased line; `None` at end of input
fn prompt<R: BufRead>(input: &mut R, text: &str) -> Result<Option<String>> {
    print!("{text}: ");
    io::stdout().flush().context("failed to flush stdout")?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("failed to read input")?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::FixedWordSource;
    use std::io::Cursor;

    #[test]
    fn parse_commands_and_guesses() {
        assert_eq!(parse_line("quit"), Command::Quit);
        assert_eq!(parse_line(" N "), Command::NewGame);
        assert_eq!(
            parse_line("Apple"),
            Command::Guess(Word::new("apple").unwrap())
        );
        assert!(matches!(parse_line("abc"), Command::Invalid(_)));
    }

    #[test]
    fn plays_to_a_win_and_stops() {
        let mut source = FixedWordSource(Word::new("apple").unwrap());
        let input = Cursor::new("pears\nabc\napple\nno\n");
        assert!(play_lines(&mut source, input).is_ok());
    }

    #[test]
    fn end_of_input_ends_session() {
        let mut source = FixedWordSource(Word::new("apple").unwrap());
        assert!(play_lines(&mut source, Cursor::new("pears\n")).is_ok());
    }
}
