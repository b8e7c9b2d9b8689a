//! Core game logic for Word Snake
//!
//! This module contains all the game rules without any I/O or rendering
//! dependencies. Hosts drive it through [`GameEngine`] and a [`Scheduler`],
//! and draw from the [`GameView`] snapshot.

pub mod action;
pub mod config;
pub mod engine;
pub mod letters;
pub mod schedule;
pub mod state;
pub mod view;
pub mod words;

// Re-export commonly used types
pub use action::{Action, Direction};
pub use config::{ConfigError, GameConfig};
pub use engine::{GameEngine, TickResult};
pub use letters::{LetterBoard, LetterStatus, PlacedLetter};
pub use schedule::{ManualScheduler, ScheduleCall, Scheduler};
pub use state::{GameOverReason, GameState, GameStatus, Position, Snake};
pub use view::{GameView, LetterView};
pub use words::{ANIMALS, Animal, WordProvider};
