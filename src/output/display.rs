//! Display functions for game state and command results

use super::formatters::{Palette, buffer_row, create_progress_bar, word_row};
use crate::core::{AlphabetScore, LetterScore, WordScore, score_to_emoji};
use crate::engine::GameEngine;
use crate::stats::Statistics;
use colored::Colorize;

/// Print every committed guess followed by the current guess buffer
pub fn print_board(engine: &GameEngine, palette: Palette) {
    let state = engine.state();
    println!();
    for guess in state.guesses() {
        println!("  {}", word_row(guess.word(), guess.score(), palette));
    }
    if !state.game_over() {
        println!("  {}", buffer_row(state.current_guess()));
    }
    println!();
}

/// Print the keyboard summary: known-good, misplaced and absent letters
pub fn print_alphabet(alphabet: &AlphabetScore, palette: Palette) {
    let row: String = alphabet
        .iter()
        .map(|(letter, score)| match score {
            LetterScore::NotEvaluated => format!(" {letter} "),
            _ => palette.tile(letter, score).to_string(),
        })
        .collect();
    println!("  {row}");

    let groups = alphabet.groups();
    if !groups.correct.is_empty() {
        println!("  {} {}", "Correct:".green(), groups.correct);
    }
    if !groups.wrong_position.is_empty() {
        println!("  {} {}", "Misplaced:".yellow(), groups.wrong_position);
    }
    if !groups.not_in_word.is_empty() {
        println!("  {} {}", "Absent:".bright_black(), groups.not_in_word);
    }
}

/// Print the end-of-game banner with the shareable emoji grid
pub fn print_game_result(engine: &GameEngine) {
    let state = engine.state();
    println!("{}", "═".repeat(40).bright_cyan());
    if state.user_won() {
        let message = engine.winning_message().unwrap_or("Solved");
        println!("  🎉 {}", message.bright_green().bold());
        println!(
            "  Solved in {} {}",
            state.guesses().len().to_string().bright_cyan().bold(),
            if state.guesses().len() == 1 {
                "guess"
            } else {
                "guesses"
            }
        );
    } else {
        println!("  ❌ The word was {}", state.answer().bright_yellow().bold());
    }
    println!();
    for guess in state.guesses() {
        println!("  {}", score_to_emoji(guess.score()));
    }
    println!("{}", "═".repeat(40).bright_cyan());
}

/// Print the result of scoring one word against another
pub fn print_score_result(guess: &str, answer: &str, score: &WordScore, palette: Palette) {
    println!(
        "\n{} against {}",
        guess.bright_white().bold(),
        answer.bright_yellow().bold()
    );
    println!("  {}", word_row(guess, score, palette));
    println!("  {}", score_to_emoji(score));
    for (letter, s) in guess.chars().zip(score.iter()) {
        println!("    {letter}: {s}");
    }
}

/// Print session statistics with a guess distribution chart
pub fn print_statistics(stats: &Statistics) {
    println!("\n📈 {}", "Statistics:".bright_cyan().bold());
    println!("   Played:   {}", stats.total_games);
    println!("   Win rate: {}%", stats.win_rate());
    let most = stats.guess_distribution.iter().copied().max().unwrap_or(0);
    for (count, &wins) in stats.guess_distribution.iter().enumerate().skip(1) {
        let bar = create_progress_bar(wins, most, 20);
        println!("   {count}: {} {wins}", bar.green());
    }
}
