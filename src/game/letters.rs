//! Letter placement for the current target word

use std::collections::{HashMap, HashSet};

use log::warn;
use rand::Rng;

use super::state::Position;

/// A letter lying on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedLetter {
    pub ch: char,
    /// Position of the letter within the target word
    pub index: usize,
}

/// How a letter relates to the player's progress through the word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterStatus {
    Collected,
    Next,
    Future,
}

impl LetterStatus {
    pub fn for_index(index: usize, next_letter_index: usize) -> Self {
        use std::cmp::Ordering;
        match index.cmp(&next_letter_index) {
            Ordering::Less => LetterStatus::Collected,
            Ordering::Equal => LetterStatus::Next,
            Ordering::Greater => LetterStatus::Future,
        }
    }
}

/// Letters of the current word keyed by the cell they sit on
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LetterBoard {
    letters: HashMap<Position, PlacedLetter>,
}

impl LetterBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scatter the letters of `word` over free cells of the grid.
    ///
    /// Each letter gets at most `max_attempts` random samples; a letter that
    /// finds no free cell in time is left off the board.
    pub fn place<R: Rng>(
        word: &str,
        occupied: &HashSet<Position>,
        grid_size: usize,
        max_attempts: usize,
        rng: &mut R,
    ) -> Self {
        let mut letters: HashMap<Position, PlacedLetter> = HashMap::with_capacity(word.len());
        let size = grid_size as i32;

        for (index, ch) in word.chars().enumerate() {
            let free = (0..max_attempts)
                .map(|_| Position::new(rng.gen_range(0..size), rng.gen_range(0..size)))
                .find(|pos| !occupied.contains(pos) && !letters.contains_key(pos));

            match free {
                Some(pos) => {
                    letters.insert(pos, PlacedLetter { ch, index });
                }
                None => {
                    warn!(
                        "No free cell for letter {:?} (#{}) of {} after {} attempts",
                        ch, index, word, max_attempts
                    );
                }
            }
        }

        Self { letters }
    }

    /// Build a board from explicit placements
    pub fn from_letters(letters: impl IntoIterator<Item = (Position, PlacedLetter)>) -> Self {
        Self {
            letters: letters.into_iter().collect(),
        }
    }

    pub fn get(&self, pos: Position) -> Option<PlacedLetter> {
        self.letters.get(&pos).copied()
    }

    pub fn remove(&mut self, pos: Position) -> Option<PlacedLetter> {
        self.letters.remove(&pos)
    }

    /// Where the letter with the given index lies, if it was placed
    pub fn position_of(&self, index: usize) -> Option<Position> {
        self.letters
            .iter()
            .find(|(_, letter)| letter.index == index)
            .map(|(pos, _)| *pos)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Position, PlacedLetter)> + '_ {
        self.letters.iter().map(|(pos, letter)| (*pos, *letter))
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}
