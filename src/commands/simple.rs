//! Simple interactive CLI mode
//!
//! Line-based game without the TUI

use crate::engine::{GameEngine, SubmitError};
use crate::output::{Palette, print_alphabet, print_board, print_game_result, print_statistics};
use crate::stats::Statistics;
use colored::Colorize;
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or if a new
/// game cannot be started from the configured word lists.
pub fn run_simple(engine: &mut GameEngine, palette: Palette) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════╗");
    println!("║                 W R D L E                ║");
    println!("╚══════════════════════════════════════════╝\n");

    println!(
        "Guess the hidden word in {} tries.",
        engine.config().max_guesses
    );
    println!("After each guess the tiles show how close you were:\n");
    println!("  - green: right letter, right spot");
    println!("  - yellow: right letter, wrong spot");
    println!("  - gray: letter not in the word\n");
    println!("Commands: 'quit' to exit, 'new' for a new game\n");

    let mut stats = Statistics::new(engine.config().max_guesses);

    loop {
        print_board(engine, palette);
        print_alphabet(engine.state().alphabet_score(), palette);

        let prefilled = !engine.state().current_guess().is_blank();
        let prompt = if prefilled {
            format!(
                "Guess {} (Enter for {})",
                engine.state().guesses().len() + 1,
                engine.state().current_guess().as_string().trim_end()
            )
        } else {
            format!("Guess {}", engine.state().guesses().len() + 1)
        };

        let input = get_user_input(&prompt)?;
        let result = match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                print_statistics(&stats);
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "new" | "n" => {
                engine.new_game().map_err(|e| e.to_string())?;
                println!("\n🔄 New game started!");
                continue;
            }
            "" if prefilled => engine.submit_current_guess().map(|_| ()),
            _ => engine.submit_guess(&input).map(|_| ()),
        };

        match result {
            Ok(()) => {}
            Err(SubmitError::Invalid(_)) => {
                println!("❌ {}", engine.state().invalid_message().red());
                continue;
            }
            Err(SubmitError::GameOver) => {}
        }

        if engine.state().game_over() {
            print_board(engine, palette);
            print_game_result(engine);
            stats.record(engine.state());

            match get_user_input("Play again? (yes/no)")?
                .to_lowercase()
                .as_str()
            {
                "yes" | "y" => {
                    engine.new_game().map_err(|e| e.to_string())?;
                    println!("\n🔄 New game started!");
                }
                _ => {
                    print_statistics(&stats);
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
            }
        }
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;
    if read == 0 {
        return Ok("quit".to_string());
    }

    Ok(input.trim().to_string())
}
