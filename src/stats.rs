//! Per-session win statistics shown by the front-ends

use crate::engine::{EngineConfig, GameState};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Wins by number of guesses; index 0 is unused
    pub guess_distribution: Vec<usize>,
}

impl Default for Statistics {
    fn default() -> Self {
        Self::new(EngineConfig::default().max_guesses)
    }
}

impl Statistics {
    /// Empty statistics with a distribution row for each of `max_guesses`
    #[must_use]
    pub fn new(max_guesses: usize) -> Self {
        Self {
            total_games: 0,
            games_won: 0,
            guess_distribution: vec![0; max_guesses + 1],
        }
    }

    /// Count a finished game; unfinished games are ignored
    pub fn record(&mut self, state: &GameState) {
        if !state.game_over() {
            return;
        }
        self.total_games += 1;
        if state.user_won() {
            self.games_won += 1;
            let count = state.guesses().len();
            if self.guess_distribution.len() <= count {
                self.guess_distribution.resize(count + 1, 0);
            }
            self.guess_distribution[count] += 1;
        }
    }

    /// Percentage of finished games that were won
    #[must_use]
    pub fn win_rate(&self) -> usize {
        if self.total_games == 0 {
            0
        } else {
            self.games_won * 100 / self.total_games
        }
    }
}
