use super::{
    action::{Action, Direction},
    config::{ConfigError, GameConfig},
    letters::LetterBoard,
    schedule::Scheduler,
    state::{GameOverReason, GameState, GameStatus, Position, Snake},
    view::GameView,
    words::{ANIMALS, WordProvider},
};
use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// What a tick did to the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickResult {
    /// The game is over; nothing changed
    Idle,
    /// The snake moved onto an empty cell
    Moved,
    /// The expected letter was picked up and the snake grew
    LetterCollected { ch: char, index: usize },
    /// The last letter was picked up; a new word is on the board
    WordCompleted { word: &'static str, score: u32 },
    /// The tick ended the game
    GameOver(GameOverReason),
}

impl TickResult {
    pub fn is_game_over(&self) -> bool {
        matches!(self, TickResult::GameOver(_))
    }
}

/// The game engine that owns all game state and applies the rules
pub struct GameEngine {
    config: GameConfig,
    words: WordProvider,
    rng: StdRng,
    state: GameState,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Create an engine whose letter placement and word choice are reproducible
    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, rng: StdRng) -> Result<Self, ConfigError> {
        config.validate()?;

        let state = GameState::new(
            start_snake(&config),
            ANIMALS[0],
            LetterBoard::new(),
            config.grid_size,
            config.initial_tick(),
        );
        let mut engine = Self {
            config,
            words: WordProvider::new(),
            rng,
            state,
        };
        engine.deal_new_word();

        Ok(engine)
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Replace the game state wholesale, e.g. to set up a known board
    pub fn load_state(&mut self, state: GameState) {
        self.state = state;
    }

    /// Snapshot for renderers
    pub fn view(&self) -> GameView {
        GameView::from_state(&self.state)
    }

    pub fn is_running(&self) -> bool {
        self.state.status.is_running()
    }

    /// Overwrite the requested direction; only the latest request before a
    /// tick counts
    pub fn set_pending_direction(&mut self, direction: Direction) {
        self.state.snake.pending = direction;
    }

    /// Forward an input event
    pub fn handle_action(&mut self, action: Action, scheduler: &mut impl Scheduler) {
        match action {
            Action::Move(direction) => self.set_pending_direction(direction),
            Action::Restart => self.restart(true, scheduler),
        }
    }

    /// Start over with a fresh snake and word.
    ///
    /// A full reset also clears the score and the speed ramp.
    pub fn restart(&mut self, full_reset: bool, scheduler: &mut impl Scheduler) {
        scheduler.cancel();

        self.state.status = GameStatus::Running;
        self.state.snake = start_snake(&self.config);
        self.state.steps = 0;
        if full_reset {
            self.state.score = 0;
            self.state.tick_interval = self.config.initial_tick();
        }
        self.deal_new_word();

        info!(
            "Restarted (full reset: {}): spell {} {}",
            full_reset, self.state.animal.name, self.state.animal.glyph
        );

        scheduler.schedule_next(self.state.tick_interval);
    }

    /// Execute one step of the game
    pub fn tick(&mut self, scheduler: &mut impl Scheduler) -> TickResult {
        if !self.is_running() {
            return TickResult::Idle;
        }

        let Some((new_head, direction)) = self.state.snake.step(self.state.grid_size) else {
            return TickResult::Idle;
        };
        debug!("Tick {}: heading {:?} to {:?}", self.state.steps, direction, new_head);

        self.state.snake.direction = direction;
        self.state.steps += 1;

        if self.state.snake.occupies(new_head) {
            return self.game_over(GameOverReason::BitItself, scheduler);
        }

        let result = match self.state.letters.get(new_head) {
            None => {
                self.state.snake.push_head(new_head);
                self.state.snake.drop_tail();
                TickResult::Moved
            }
            Some(letter) if letter.index != self.state.next_letter_index => {
                let expected = self.state.expected_letter().unwrap_or(letter.ch);
                return self.game_over(GameOverReason::WrongLetter { expected }, scheduler);
            }
            Some(letter) => {
                self.state.letters.remove(new_head);
                self.state.next_letter_index += 1;
                self.state.snake.push_head(new_head);
                TickResult::LetterCollected {
                    ch: letter.ch,
                    index: letter.index,
                }
            }
        };

        let result = if self.state.is_word_complete() {
            self.complete_word()
        } else {
            result
        };

        scheduler.schedule_next(self.state.tick_interval);
        result
    }

    fn complete_word(&mut self) -> TickResult {
        let word = self.state.animal.name;
        self.state.score += 1;
        self.state.tick_interval = self.config.next_tick(self.state.tick_interval);

        info!(
            "Collected {}: score {}, tick {:?}",
            word, self.state.score, self.state.tick_interval
        );

        self.deal_new_word();

        TickResult::WordCompleted {
            word,
            score: self.state.score,
        }
    }

    fn game_over(&mut self, reason: GameOverReason, scheduler: &mut impl Scheduler) -> TickResult {
        info!("Game over after {} ticks: {}", self.state.steps, reason);
        self.state.status = GameStatus::GameOver(reason);
        scheduler.cancel();
        TickResult::GameOver(reason)
    }

    /// Pick a new animal and lay out its letters around the current snake
    fn deal_new_word(&mut self) {
        let animal = self.words.pick_random(&mut self.rng);
        let occupied = self.state.occupied_cells();
        self.state.letters = LetterBoard::place(
            animal.name,
            &occupied,
            self.config.grid_size,
            self.config.placement_attempts,
            &mut self.rng,
        );
        self.state.animal = animal;
        self.state.next_letter_index = 0;
    }
}

/// Snake after a restart: centred, facing right
fn start_snake(config: &GameConfig) -> Snake {
    let center = (config.grid_size / 2) as i32;
    Snake::new(
        Position::new(center, center),
        Direction::Right,
        config.initial_snake_length,
        config.grid_size,
    )
}
