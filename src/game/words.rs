//! The animal catalog the target words are drawn from

use rand::Rng;
use rand::seq::SliceRandom;

/// An animal whose name the player has to spell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Animal {
    /// Uppercase ASCII name, the target word
    pub name: &'static str,
    /// Picture shown to the player
    pub glyph: &'static str,
}

impl Animal {
    pub const fn new(name: &'static str, glyph: &'static str) -> Self {
        Self { name, glyph }
    }

    /// Number of letters to collect
    pub fn len(&self) -> usize {
        self.name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
    }

    /// Letter at `index`, if the word is that long
    pub fn letter(&self, index: usize) -> Option<char> {
        self.name.as_bytes().get(index).map(|&b| b as char)
    }
}

pub const ANIMALS: [Animal; 15] = [
    Animal::new("DOG", "🐶"),
    Animal::new("CAT", "🐱"),
    Animal::new("RAT", "🐀"),
    Animal::new("PARROT", "🦜"),
    Animal::new("FOX", "🦊"),
    Animal::new("BEAR", "🐻"),
    Animal::new("PANDA", "🐼"),
    Animal::new("ZEBRA", "🦓"),
    Animal::new("LION", "🦁"),
    Animal::new("HORSE", "🐴"),
    Animal::new("SNAKE", "🐍"),
    Animal::new("TIGER", "🐯"),
    Animal::new("MONKEY", "🐒"),
    Animal::new("RABBIT", "🐰"),
    Animal::new("FROG", "🐸"),
];

/// Hands out animals from the fixed catalog
pub struct WordProvider {
    catalog: &'static [Animal],
}

impl WordProvider {
    pub fn new() -> Self {
        Self { catalog: &ANIMALS }
    }

    /// Uniformly pick one animal; the same one may come up twice in a row
    pub fn pick_random<R: Rng>(&self, rng: &mut R) -> Animal {
        // The catalog is a non-empty constant
        self.catalog.choose(rng).copied().unwrap_or(ANIMALS[0])
    }
}

impl Default for WordProvider {
    fn default() -> Self {
        Self::new()
    }
}
