//! Game state and the engine that drives it

use super::config::{AnswerFallback, DEBUG_OPENING, EngineConfig};
use super::error::{ConfigError, InvalidGuess, SubmitError};
use crate::core::{AlphabetScore, BLANK, Guess, GuessBuffer, WORD_LENGTH, score};
use crate::wordlists::WordSource;
use crate::wordlists::loader::normalize;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;

/// Congratulations indexed by the number of guesses taken, minus one
pub const WINNER_MESSAGES: [&str; 6] =
    ["Brilliant", "Spectacular", "Grand", "Great", "Good", "Phew"];

/// Everything a front-end needs to draw one game
///
/// Replaced wholesale by [`GameEngine::new_game`]. Only the engine mutates
/// it, apart from edits to the current guess buffer.
#[derive(Debug, Clone)]
pub struct GameState {
    answer: String,
    guesses: Vec<Guess>,
    current_guess: GuessBuffer,
    alphabet_score: AlphabetScore,
    game_over: bool,
    user_won: bool,
    invalid_message: String,
}

impl GameState {
    fn new(answer: String) -> Self {
        Self {
            answer,
            guesses: Vec::new(),
            current_guess: GuessBuffer::new(),
            alphabet_score: AlphabetScore::new(),
            game_over: false,
            user_won: false,
            invalid_message: String::new(),
        }
    }

    /// The hidden word; front-ends should only reveal it once the game is over
    #[must_use]
    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// Committed guesses in submission order
    #[must_use]
    pub fn guesses(&self) -> &[Guess] {
        &self.guesses
    }

    #[must_use]
    pub const fn current_guess(&self) -> &GuessBuffer {
        &self.current_guess
    }

    #[must_use]
    pub const fn alphabet_score(&self) -> &AlphabetScore {
        &self.alphabet_score
    }

    #[must_use]
    pub const fn game_over(&self) -> bool {
        self.game_over
    }

    #[must_use]
    pub const fn user_won(&self) -> bool {
        self.user_won
    }

    /// Reason the last rejected guess failed, or empty
    #[must_use]
    pub fn invalid_message(&self) -> &str {
        &self.invalid_message
    }
}

/// Owns one game and the word lists it is played from
///
/// All operations are synchronous; callers on different threads must
/// serialise access themselves.
///
/// # Examples
/// ```
/// use wrdle::engine::{EngineConfig, GameEngine};
/// use wrdle::wordlists::WordSource;
///
/// let source = WordSource::new(vec!["CRANE".into()], vec!["TRACE".into()]);
/// let mut engine = GameEngine::with_seed(source, EngineConfig::default(), 7).unwrap();
///
/// assert!(engine.is_valid_guess("trace"));
/// engine.submit_guess("TRACE").unwrap();
/// engine.submit_guess("CRANE").unwrap();
///
/// assert!(engine.state().game_over());
/// assert!(engine.state().user_won());
/// assert_eq!(engine.winning_message(), Some("Spectacular"));
/// ```
#[derive(Debug)]
pub struct GameEngine {
    words: WordSource,
    config: EngineConfig,
    rng: StdRng,
    state: GameState,
}

impl GameEngine {
    /// Create an engine seeded from the OS and start the first game
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the word list cannot produce an answer.
    pub fn new(words: WordSource, config: EngineConfig) -> Result<Self, ConfigError> {
        Self::with_rng(words, config, StdRng::from_os_rng())
    }

    /// Create an engine whose answers are determined by `seed`
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the word list cannot produce an answer.
    pub fn with_seed(words: WordSource, config: EngineConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(words, config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(words: WordSource, config: EngineConfig, rng: StdRng) -> Result<Self, ConfigError> {
        let mut engine = Self {
            words,
            config,
            rng,
            state: GameState::new(String::new()),
        };
        engine.new_game()?;
        Ok(engine)
    }

    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub const fn words(&self) -> &WordSource {
        &self.words
    }

    /// Buffer for front-ends to type the next guess into
    pub fn current_guess_mut(&mut self) -> &mut GuessBuffer {
        &mut self.state.current_guess
    }

    /// Change the preferred opening word used by later games
    pub fn set_initial_guess(&mut self, word: Option<String>) {
        self.config.initial_guess = word;
    }

    /// Discard the current game and start another with a fresh answer
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::EmptyWordList` when there are no words to draw
    /// from, and `ConfigError::NoPlayableAnswer` when every draw was unusable
    /// and the fallback is [`AnswerFallback::FailFast`]. The previous game is
    /// left untouched on error.
    pub fn new_game(&mut self) -> Result<(), ConfigError> {
        let answer = self.pick_answer()?;
        log::info!("New game started");
        log::debug!("Answer: {answer}");

        self.state = GameState::new(answer);

        if let Some(word) = &self.config.initial_guess {
            self.state.current_guess = GuessBuffer::from_word(word);
        }

        if self.config.debug {
            self.commit(DEBUG_OPENING.to_string());
            self.state.current_guess = GuessBuffer::from_word(&self.state.answer);
        }

        Ok(())
    }

    fn pick_answer(&mut self) -> Result<String, ConfigError> {
        if self.words.words().is_empty() {
            return Err(ConfigError::EmptyWordList);
        }

        for attempt in 1..=self.config.answer_attempts {
            if let Some(word) = self.words.words().choose(&mut self.rng) {
                if let Some(answer) = normalize(word) {
                    return Ok(answer);
                }
                log::debug!("Draw {attempt} rejected unusable entry {word:?}");
            }
        }

        let attempts = self.config.answer_attempts;
        match &self.config.fallback {
            AnswerFallback::Sentinel(word) => {
                let answer = normalize(word).ok_or(ConfigError::NoPlayableAnswer { attempts })?;
                log::warn!("No usable answer after {attempts} draws, falling back to {answer}");
                Ok(answer)
            }
            AnswerFallback::FailFast => Err(ConfigError::NoPlayableAnswer { attempts }),
        }
    }

    /// Check a candidate without touching any state
    ///
    /// Rules are applied in order and the first failure is reported:
    /// blank slots or too few letters, then non A-Z characters, then
    /// membership in the word list or dictionary. On success the
    /// uppercased word is returned.
    ///
    /// # Errors
    ///
    /// Returns the first [`InvalidGuess`] rule the candidate breaks.
    pub fn validate(&self, candidate: &str) -> Result<String, InvalidGuess> {
        if candidate.contains(BLANK) || candidate.chars().count() < WORD_LENGTH {
            return Err(InvalidGuess::NotEnoughLetters);
        }
        if !candidate.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(InvalidGuess::NonAlphabetic);
        }
        let word = candidate.to_ascii_uppercase();
        if !self.words.contains(&word) {
            return Err(InvalidGuess::NotInWordList);
        }
        Ok(word)
    }

    /// Validate a candidate and record the outcome in `invalid_message`
    ///
    /// The message is cleared when the candidate is valid.
    pub fn is_valid_guess(&mut self, candidate: &str) -> bool {
        match self.validate(candidate) {
            Ok(_) => {
                self.state.invalid_message.clear();
                true
            }
            Err(reason) => {
                self.state.invalid_message = reason.to_string();
                false
            }
        }
    }

    /// Validate and commit a guess
    ///
    /// # Errors
    ///
    /// Returns `SubmitError::GameOver` once the game has ended, or
    /// `SubmitError::Invalid` (also stored as the invalid message) when the
    /// word fails validation. A successful submit clears the message.
    pub fn submit_guess(&mut self, word: &str) -> Result<&Guess, SubmitError> {
        if self.state.game_over {
            return Err(SubmitError::GameOver);
        }
        let word = self.validate(word).map_err(|reason| {
            self.state.invalid_message = reason.to_string();
            reason
        })?;
        self.state.invalid_message.clear();
        Ok(self.commit(word))
    }

    /// Submit whatever is in the current guess buffer
    ///
    /// # Errors
    ///
    /// Same as [`GameEngine::submit_guess`].
    pub fn submit_current_guess(&mut self) -> Result<&Guess, SubmitError> {
        let candidate = self.state.current_guess.as_string();
        self.submit_guess(&candidate)
    }

    fn commit(&mut self, word: String) -> &Guess {
        let state = &mut self.state;
        let solved = word == state.answer;

        state.alphabet_score.record(&word, &state.answer);
        let word_score = score(&word, &state.answer);
        let guess = Guess::new(word, word_score);
        log::debug!("Guess {}: {guess}", state.guesses.len() + 1);
        state.guesses.push(guess);

        state.current_guess.clear();

        if solved || state.guesses.len() >= self.config.max_guesses {
            state.game_over = true;
            state.user_won = solved;
        }

        &state.guesses[state.guesses.len() - 1]
    }

    /// Guesses left before the game is lost
    #[must_use]
    pub fn remaining_guesses(&self) -> usize {
        self.config
            .max_guesses
            .saturating_sub(self.state.guesses.len())
    }

    /// Congratulation matching the number of guesses taken
    ///
    /// Meant for won games; `None` when no guess has been made or the count
    /// is past the end of [`WINNER_MESSAGES`].
    #[must_use]
    pub fn winning_message(&self) -> Option<&'static str> {
        self.state
            .guesses
            .len()
            .checked_sub(1)
            .and_then(|i| WINNER_MESSAGES.get(i))
            .copied()
    }
}
