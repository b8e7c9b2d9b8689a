use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use word_snake::game::{
    Action, Animal, Direction, GameConfig, GameEngine, GameOverReason, GameState, GameStatus,
    LetterBoard, ManualScheduler, PlacedLetter, Position, ScheduleCall, Snake, TickResult,
};

/// Lay `word` out in a row directly ahead of a right-facing snake
fn word_ahead(state: &mut GameState, word: &'static str) {
    let head = state.snake.head().unwrap();
    state.animal = Animal::new(word, "?");
    state.next_letter_index = 0;
    state.letters = LetterBoard::from_letters(word.chars().enumerate().map(|(index, ch)| {
        (
            head.moved_by(index as i32 + 1, 0),
            PlacedLetter { ch, index },
        )
    }));
}

fn cat_engine() -> GameEngine {
    let mut engine = GameEngine::with_seed(GameConfig::default(), 2024).unwrap();
    let mut state = GameState::new(
        Snake::from_cells(
            [(8, 10), (9, 10), (10, 10)].map(|(x, y)| Position::new(x, y)),
            Direction::Right,
        ),
        Animal::new("CAT", "🐱"),
        LetterBoard::new(),
        20,
        Duration::from_millis(140),
    );
    word_ahead(&mut state, "CAT");
    engine.load_state(state);
    engine
}

#[test]
fn collecting_cat_in_three_ticks_scores_a_point() {
    let mut engine = cat_engine();
    let mut scheduler = ManualScheduler::new();

    assert_eq!(
        engine.tick(&mut scheduler),
        TickResult::LetterCollected { ch: 'C', index: 0 }
    );
    assert_eq!(
        engine.tick(&mut scheduler),
        TickResult::LetterCollected { ch: 'A', index: 1 }
    );
    assert_eq!(
        engine.tick(&mut scheduler),
        TickResult::WordCompleted { word: "CAT", score: 1 }
    );

    let view = engine.view();
    assert!(!view.is_game_over());
    assert_eq!(view.score, 1);
    assert_eq!(view.next_letter_index, 0);
    assert_eq!(view.head(), Some(Position::new(13, 10)));
    assert_eq!(view.letters.len(), view.word.len());
    assert!(view.letters.iter().all(|l| !view.snake.contains(&l.position)));
    assert_eq!(scheduler.pending(), Some(Duration::from_millis(136)));
}

#[test]
fn entering_the_tail_cell_is_a_bite() {
    let mut engine = cat_engine();
    let mut state = engine.state().clone();
    // A hairpin: tail at (7,10), head at (7,11) heading left
    state.snake = Snake::from_cells(
        [(7, 10), (8, 10), (9, 10), (9, 11), (8, 11), (7, 11)].map(|(x, y)| Position::new(x, y)),
        Direction::Left,
    );
    engine.load_state(state);
    let mut scheduler = ManualScheduler::new();

    engine.handle_action(Action::Move(Direction::Up), &mut scheduler);
    let result = engine.tick(&mut scheduler);

    assert_eq!(result, TickResult::GameOver(GameOverReason::BitItself));
    assert_eq!(engine.view().game_over, Some(GameOverReason::BitItself));
    assert_eq!(scheduler.last_call(), Some(ScheduleCall::Cancel));
}

#[test]
fn reversal_between_ticks_is_rejected() {
    let mut engine = cat_engine();
    let mut state = engine.state().clone();
    state.letters = LetterBoard::new();
    engine.load_state(state);
    let mut scheduler = ManualScheduler::new();

    engine.handle_action(Action::Move(Direction::Left), &mut scheduler);
    engine.handle_action(Action::Move(Direction::Right), &mut scheduler);
    engine.tick(&mut scheduler);
    assert_eq!(engine.state().snake.head(), Some(Position::new(11, 10)));

    // A lone reversal request is ignored too
    engine.handle_action(Action::Move(Direction::Left), &mut scheduler);
    engine.tick(&mut scheduler);
    assert_eq!(engine.state().snake.direction, Direction::Right);
    assert_eq!(engine.state().snake.head(), Some(Position::new(12, 10)));
}

#[test]
fn wrong_letter_ends_the_game_and_ticks_stop() {
    let mut engine = cat_engine();
    let mut state = engine.state().clone();
    // The A sits right in front of the snake, the C is far away
    state.letters = LetterBoard::from_letters([
        (Position::new(11, 10), PlacedLetter { ch: 'A', index: 1 }),
        (Position::new(15, 15), PlacedLetter { ch: 'C', index: 0 }),
        (Position::new(16, 16), PlacedLetter { ch: 'T', index: 2 }),
    ]);
    engine.load_state(state);
    let mut scheduler = ManualScheduler::new();

    let result = engine.tick(&mut scheduler);
    assert_eq!(
        result,
        TickResult::GameOver(GameOverReason::WrongLetter { expected: 'C' })
    );

    let frozen = engine.state().clone();
    for _ in 0..5 {
        assert_eq!(engine.tick(&mut scheduler), TickResult::Idle);
    }
    assert_eq!(engine.state(), &frozen);

    engine.handle_action(Action::Restart, &mut scheduler);
    assert!(engine.is_running());
    assert_eq!(engine.state().status, GameStatus::Running);
    assert_eq!(scheduler.pending(), Some(Duration::from_millis(140)));
}

#[test]
fn speed_ramps_down_to_the_floor() {
    let config = GameConfig::default();
    let mut engine = GameEngine::with_seed(config.clone(), 99).unwrap();
    let mut scheduler = ManualScheduler::new();
    let mut previous = engine.state().tick_interval;

    for round in 1..=25u32 {
        // Fresh short snake each round so the word always fits ahead of it
        let mut state = engine.state().clone();
        state.snake = Snake::new(Position::new(5, 5), Direction::Right, 3, 20);
        word_ahead(&mut state, "DOG");
        engine.load_state(state);

        engine.tick(&mut scheduler);
        engine.tick(&mut scheduler);
        let result = engine.tick(&mut scheduler);
        assert_eq!(result, TickResult::WordCompleted { word: "DOG", score: round });

        let interval = engine.state().tick_interval;
        assert!(interval <= previous);
        assert!(interval >= config.min_tick());
        previous = interval;
    }

    assert_eq!(previous, Duration::from_millis(80));
    assert_eq!(scheduler.pending(), Some(Duration::from_millis(80)));
}

#[test]
fn random_play_stays_on_the_grid() {
    let directions = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];
    let mut engine = GameEngine::with_seed(GameConfig::default(), 7).unwrap();
    let mut scheduler = ManualScheduler::new();
    let mut rng = StdRng::seed_from_u64(7);
    engine.restart(true, &mut scheduler);

    for _ in 0..5000 {
        if rng.gen_bool(0.3) {
            let direction = directions[rng.gen_range(0..directions.len())];
            engine.handle_action(Action::Move(direction), &mut scheduler);
        }

        let before = engine.state().snake.direction;
        let pending = engine.state().snake.pending;
        let result = engine.tick(&mut scheduler);

        let state = engine.state();
        if let Some(head) = state.snake.head() {
            assert!(head.is_in_bounds(state.grid_size));
        }
        if pending == before.opposite() {
            assert_eq!(state.snake.direction, before);
        }
        assert!(state.tick_interval >= Duration::from_millis(80));

        if result.is_game_over() {
            assert!(!scheduler.is_armed());
            engine.restart(true, &mut scheduler);
        } else {
            assert!(scheduler.is_armed());
        }
    }
}
