//! Word Snake - steer the snake over the letters of an animal's name, in order
//!
//! This library provides:
//! - Core game logic: rules, state machine and tick scheduling (game module)
//! - Terminal key mapping (input module)
//! - TUI rendering (render module)
//! - Session statistics (metrics module)
//! - The interactive terminal front end (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
