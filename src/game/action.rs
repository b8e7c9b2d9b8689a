/// Direction the snake can move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// The direction pointing the other way
    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Returns true if turning from self to other would be a 180-degree turn
    pub fn is_opposite(&self, other: Direction) -> bool {
        self.opposite() == other
    }

    /// Returns the delta (dx, dy) for moving in this direction
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Direction actually taken this tick: a reversal request keeps `self`
    pub fn resolve(&self, pending: Direction) -> Direction {
        if self.is_opposite(pending) {
            *self
        } else {
            pending
        }
    }
}

/// Discrete input events accepted by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Request a new heading for the next tick
    Move(Direction),
    /// Start a fresh game (score and speed reset)
    Restart,
}

impl From<Direction> for Action {
    fn from(direction: Direction) -> Self {
        Action::Move(direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_directions() {
        assert!(Direction::Up.is_opposite(Direction::Down));
        assert!(Direction::Down.is_opposite(Direction::Up));
        assert!(Direction::Left.is_opposite(Direction::Right));
        assert!(Direction::Right.is_opposite(Direction::Left));

        assert!(!Direction::Up.is_opposite(Direction::Left));
        assert!(!Direction::Up.is_opposite(Direction::Right));
        assert!(!Direction::Up.is_opposite(Direction::Up));
    }

    #[test]
    fn test_direction_delta() {
        assert_eq!(Direction::Up.delta(), (0, -1));
        assert_eq!(Direction::Down.delta(), (0, 1));
        assert_eq!(Direction::Left.delta(), (-1, 0));
        assert_eq!(Direction::Right.delta(), (1, 0));
    }

    #[test]
    fn test_resolve_rejects_reversal() {
        assert_eq!(Direction::Right.resolve(Direction::Left), Direction::Right);
        assert_eq!(Direction::Up.resolve(Direction::Down), Direction::Up);
    }

    #[test]
    fn test_resolve_accepts_turns() {
        assert_eq!(Direction::Right.resolve(Direction::Up), Direction::Up);
        assert_eq!(Direction::Right.resolve(Direction::Down), Direction::Down);
        assert_eq!(Direction::Left.resolve(Direction::Left), Direction::Left);
    }

    #[test]
    fn test_action_from_direction() {
        assert_eq!(Action::from(Direction::Down), Action::Move(Direction::Down));
    }
}
