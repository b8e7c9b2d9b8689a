//! Read-only snapshot of the game for renderers

use std::time::Duration;

use super::letters::LetterStatus;
use super::state::{GameOverReason, GameState, Position};

/// A letter as the player should see it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterView {
    pub position: Position,
    pub ch: char,
    pub index: usize,
    pub status: LetterStatus,
}

/// Everything a renderer needs to draw one frame
#[derive(Debug, Clone, PartialEq)]
pub struct GameView {
    pub grid_size: usize,
    /// Snake cells, tail first
    pub snake: Vec<Position>,
    /// Letters on the board, ordered by their index in the word
    pub letters: Vec<LetterView>,
    pub word: &'static str,
    pub glyph: &'static str,
    pub next_letter_index: usize,
    pub score: u32,
    pub tick_interval: Duration,
    pub game_over: Option<GameOverReason>,
}

impl GameView {
    pub fn from_state(state: &GameState) -> Self {
        let mut letters: Vec<LetterView> = state
            .letters
            .iter()
            .map(|(position, letter)| LetterView {
                position,
                ch: letter.ch,
                index: letter.index,
                status: LetterStatus::for_index(letter.index, state.next_letter_index),
            })
            .collect();
        letters.sort_by_key(|letter| letter.index);

        Self {
            grid_size: state.grid_size,
            snake: state.snake.cells().collect(),
            letters,
            word: state.animal.name,
            glyph: state.animal.glyph,
            next_letter_index: state.next_letter_index,
            score: state.score,
            tick_interval: state.tick_interval,
            game_over: state.status.game_over_reason(),
        }
    }

    pub fn head(&self) -> Option<Position> {
        self.snake.last().copied()
    }

    pub fn letter_at(&self, pos: Position) -> Option<&LetterView> {
        self.letters.iter().find(|letter| letter.position == pos)
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over.is_some()
    }

    /// Target word letters paired with their collection status
    pub fn word_progress(&self) -> impl Iterator<Item = (char, LetterStatus)> + '_ {
        self.word
            .chars()
            .enumerate()
            .map(|(i, ch)| (ch, LetterStatus::for_index(i, self.next_letter_index)))
    }
}
