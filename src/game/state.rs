use std::collections::{HashSet, VecDeque};
use std::fmt;
use std::time::Duration;

use super::action::Direction;
use super::letters::LetterBoard;
use super::words::Animal;

/// A cell on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move one cell in a direction, wrapping around the edges of the grid
    pub fn wrapped_step(&self, direction: Direction, grid_size: usize) -> Self {
        let (dx, dy) = direction.delta();
        let size = grid_size as i32;
        Self {
            x: (self.x + dx).rem_euclid(size),
            y: (self.y + dy).rem_euclid(size),
        }
    }

    /// Check if the position is within a square grid
    pub fn is_in_bounds(&self, grid_size: usize) -> bool {
        let size = grid_size as i32;
        (0..size).contains(&self.x) && (0..size).contains(&self.y)
    }
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, tail at the front and head at the back
    body: VecDeque<Position>,
    /// Direction used by the last move
    pub direction: Direction,
    /// Latest requested direction, applied on the next move
    pub pending: Direction,
}

impl Snake {
    /// Create a snake with its head at `head` and the body trailing behind it
    pub fn new(head: Position, direction: Direction, length: usize, grid_size: usize) -> Self {
        let back = direction.opposite();
        let mut body = VecDeque::with_capacity(length);
        let mut segment = head;
        body.push_front(segment);

        for _ in 1..length {
            segment = segment.wrapped_step(back, grid_size);
            body.push_front(segment);
        }

        Self {
            body,
            direction,
            pending: direction,
        }
    }

    /// Build a snake from explicit cells, tail first
    pub fn from_cells(cells: impl IntoIterator<Item = Position>, direction: Direction) -> Self {
        Self {
            body: cells.into_iter().collect(),
            direction,
            pending: direction,
        }
    }

    /// Get the head position
    pub fn head(&self) -> Option<Position> {
        self.body.back().copied()
    }

    /// Get the tail position
    pub fn tail(&self) -> Option<Position> {
        self.body.front().copied()
    }

    /// Resolve the pending direction against the current one and compute
    /// where the head goes next. Does not mutate the snake.
    pub fn step(&self, grid_size: usize) -> Option<(Position, Direction)> {
        let direction = self.direction.resolve(self.pending);
        let head = self.head()?;
        Some((head.wrapped_step(direction, grid_size), direction))
    }

    /// Check if position is occupied by any segment, head included
    pub fn occupies(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    pub fn push_head(&mut self, pos: Position) {
        self.body.push_back(pos);
    }

    pub fn drop_tail(&mut self) -> Option<Position> {
        self.body.pop_front()
    }

    /// Segments from tail to head
    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        self.body.iter().copied()
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check if the snake is empty (should never happen in practice)
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Why a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverReason {
    /// The head ran into the snake's own body
    BitItself,
    /// A letter was picked up out of order
    WrongLetter { expected: char },
}

impl fmt::Display for GameOverReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOverReason::BitItself => write!(f, "The snake bit itself"),
            GameOverReason::WrongLetter { expected } => {
                write!(f, "Wrong letter: expected \"{expected}\"")
            }
        }
    }
}

/// Engine state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    GameOver(GameOverReason),
}

impl GameStatus {
    pub fn is_running(&self) -> bool {
        matches!(self, GameStatus::Running)
    }

    pub fn game_over_reason(&self) -> Option<GameOverReason> {
        match self {
            GameStatus::Running => None,
            GameStatus::GameOver(reason) => Some(*reason),
        }
    }
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub animal: Animal,
    pub letters: LetterBoard,
    /// Index of the next letter of `animal.name` to collect
    pub next_letter_index: usize,
    pub grid_size: usize,
    /// Completed words this game
    pub score: u32,
    pub tick_interval: Duration,
    /// Ticks since the last restart
    pub steps: u32,
    pub status: GameStatus,
}

impl GameState {
    /// Create a running state at the start of a round
    pub fn new(
        snake: Snake,
        animal: Animal,
        letters: LetterBoard,
        grid_size: usize,
        tick_interval: Duration,
    ) -> Self {
        Self {
            snake,
            animal,
            letters,
            next_letter_index: 0,
            grid_size,
            score: 0,
            tick_interval,
            steps: 0,
            status: GameStatus::Running,
        }
    }

    /// The letter the player has to collect next
    pub fn expected_letter(&self) -> Option<char> {
        self.animal.letter(self.next_letter_index)
    }

    pub fn is_word_complete(&self) -> bool {
        self.next_letter_index >= self.animal.len()
    }

    /// Cells the snake currently covers
    pub fn occupied_cells(&self) -> HashSet<Position> {
        self.snake.cells().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_movement() {
        let pos = Position::new(5, 5);
        assert_eq!(pos.moved_by(1, 0), Position::new(6, 5));
        assert_eq!(pos.moved_by(-1, 0), Position::new(4, 5));
        assert_eq!(pos.moved_by(0, 1), Position::new(5, 6));
        assert_eq!(pos.moved_by(0, -1), Position::new(5, 4));
    }

    #[test]
    fn test_wrapped_step() {
        assert_eq!(
            Position::new(0, 5).wrapped_step(Direction::Left, 20),
            Position::new(19, 5)
        );
        assert_eq!(
            Position::new(19, 5).wrapped_step(Direction::Right, 20),
            Position::new(0, 5)
        );
        assert_eq!(
            Position::new(4, 0).wrapped_step(Direction::Up, 20),
            Position::new(4, 19)
        );
        assert_eq!(
            Position::new(4, 19).wrapped_step(Direction::Down, 20),
            Position::new(4, 0)
        );
        assert_eq!(
            Position::new(4, 7).wrapped_step(Direction::Down, 20),
            Position::new(4, 8)
        );
    }

    #[test]
    fn test_wrapped_step_stays_in_bounds() {
        let directions = [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ];
        for x in 0..5 {
            for y in 0..5 {
                for dir in directions {
                    let next = Position::new(x, y).wrapped_step(dir, 5);
                    assert!(next.is_in_bounds(5), "{next:?} escaped the grid");
                }
            }
        }
    }

    #[test]
    fn test_snake_creation() {
        let snake = Snake::new(Position::new(10, 10), Direction::Right, 3, 20);
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Some(Position::new(10, 10)));
        assert_eq!(snake.tail(), Some(Position::new(8, 10)));
        assert_eq!(
            snake.cells().collect::<Vec<_>>(),
            vec![
                Position::new(8, 10),
                Position::new(9, 10),
                Position::new(10, 10)
            ]
        );
        assert_eq!(snake.pending, Direction::Right);
    }

    #[test]
    fn test_snake_creation_wraps() {
        let snake = Snake::new(Position::new(1, 0), Direction::Right, 3, 10);
        assert_eq!(snake.tail(), Some(Position::new(9, 0)));
    }

    #[test]
    fn test_step_ignores_reversal() {
        let mut snake = Snake::new(Position::new(10, 10), Direction::Right, 3, 20);
        snake.pending = Direction::Left;

        let (head, dir) = snake.step(20).unwrap();
        assert_eq!(dir, Direction::Right);
        assert_eq!(head, Position::new(11, 10));
    }

    #[test]
    fn test_step_takes_turn() {
        let mut snake = Snake::new(Position::new(10, 10), Direction::Right, 3, 20);
        snake.pending = Direction::Up;

        let (head, dir) = snake.step(20).unwrap();
        assert_eq!(dir, Direction::Up);
        assert_eq!(head, Position::new(10, 9));
    }

    #[test]
    fn test_push_head_and_drop_tail() {
        let mut snake = Snake::new(Position::new(5, 5), Direction::Right, 3, 10);

        snake.push_head(Position::new(6, 5));
        assert_eq!(snake.len(), 4);
        assert_eq!(snake.drop_tail(), Some(Position::new(3, 5)));
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Some(Position::new(6, 5)));
    }

    #[test]
    fn test_occupies() {
        let snake = Snake::new(Position::new(5, 5), Direction::Right, 3, 10);
        assert!(snake.occupies(Position::new(5, 5))); // head
        assert!(snake.occupies(Position::new(3, 5))); // tail
        assert!(!snake.occupies(Position::new(6, 5)));
    }

    #[test]
    fn test_game_over_reason_messages() {
        assert_eq!(GameOverReason::BitItself.to_string(), "The snake bit itself");
        assert_eq!(
            GameOverReason::WrongLetter { expected: 'A' }.to_string(),
            "Wrong letter: expected \"A\""
        );
    }

    #[test]
    fn test_game_state_progress() {
        let mut state = GameState::new(
            Snake::new(Position::new(10, 10), Direction::Right, 3, 20),
            Animal::new("CAT", "🐱"),
            LetterBoard::new(),
            20,
            Duration::from_millis(140),
        );

        assert!(state.status.is_running());
        assert_eq!(state.expected_letter(), Some('C'));
        assert!(!state.is_word_complete());

        state.next_letter_index = 3;
        assert_eq!(state.expected_letter(), None);
        assert!(state.is_word_complete());
        assert_eq!(state.occupied_cells().len(), 3);
    }
}
