use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use log::{info, warn};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::{Instant, interval, sleep_until};

use crate::game::{Action, ConfigError, GameConfig, GameEngine, Scheduler, TickResult};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::GameMetrics;
use crate::render::Renderer;

/// Single tokio deadline standing in for the game's tick timer
#[derive(Debug, Default)]
pub struct TickTimer {
    deadline: Option<Instant>,
}

impl TickTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }
}

impl Scheduler for TickTimer {
    fn schedule_next(&mut self, delay: Duration) {
        self.deadline = Some(Instant::now() + delay);
    }

    fn cancel(&mut self) {
        self.deadline = None;
    }
}

/// Interactive play in the terminal
pub struct PlayMode {
    engine: GameEngine,
    timer: TickTimer,
    metrics: GameMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    should_quit: bool,
}

impl PlayMode {
    pub fn new(config: GameConfig, seed: Option<u64>) -> Result<Self, ConfigError> {
        let engine = match seed {
            Some(seed) => GameEngine::with_seed(config, seed)?,
            None => GameEngine::new(config)?,
        };

        Ok(Self {
            engine,
            timer: TickTimer::new(),
            metrics: GameMetrics::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            should_quit: false,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        // Render at 30 FPS (33ms per frame)
        let render_interval = Duration::from_millis(33);
        let mut render_timer = interval(render_interval);

        self.restart();

        loop {
            // Copy the deadline out so the select arms don't borrow the timer
            let deadline = self.timer.deadline();

            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    self.handle_input(maybe_event);
                }

                // Game logic tick, only while one is scheduled
                _ = sleep_until(deadline.unwrap_or_else(Instant::now)), if deadline.is_some() => {
                    self.update_game();
                }

                // Render frame
                _ = render_timer.tick() => {
                    self.metrics.update();
                    let view = self.engine.view();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &view, &self.metrics);
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_input(&mut self, maybe_event: Option<std::io::Result<Event>>) {
        match maybe_event {
            Some(Ok(event)) => self.handle_event(event),
            Some(Err(err)) => warn!("Failed to read terminal event: {}", err),
            // The stream is finished and would resolve immediately forever
            None => {
                info!("Terminal input closed, quitting");
                self.should_quit = true;
            }
        }
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return;
            }

            match self.input_handler.handle_key_event(key) {
                KeyAction::GameAction(Action::Restart) => {
                    // Abandoning a live game still counts it
                    if self.engine.is_running() {
                        self.metrics.on_game_over(self.engine.state().score);
                    }
                    self.restart();
                }
                KeyAction::GameAction(action) => {
                    self.engine.handle_action(action, &mut self.timer);
                }
                KeyAction::Quit => {
                    self.should_quit = true;
                }
                KeyAction::None => {}
            }
        }
    }

    fn update_game(&mut self) {
        match self.engine.tick(&mut self.timer) {
            TickResult::LetterCollected { .. } => self.metrics.on_letter_collected(),
            TickResult::WordCompleted { score, .. } => self.metrics.on_word_completed(score),
            TickResult::GameOver(_) => self.metrics.on_game_over(self.engine.state().score),
            TickResult::Moved | TickResult::Idle => {}
        }
    }

    fn restart(&mut self) {
        self.engine.restart(true, &mut self.timer);
        self.metrics.on_game_start();
        info!("New game on a {0}x{0} grid", self.engine.config().grid_size);
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}
