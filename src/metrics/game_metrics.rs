use std::time::{Duration, Instant};

/// Per-session statistics shown next to the board. Nothing here is saved.
pub struct GameMetrics {
    pub start_time: Instant,
    pub elapsed_time: Duration,
    pub best_score: u32,
    pub games_played: u32,
    /// Letters picked up in the current game
    pub letters_collected: u32,
    game_finished: bool,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            elapsed_time: Duration::ZERO,
            best_score: 0,
            games_played: 0,
            letters_collected: 0,
            game_finished: false,
        }
    }

    /// Advance the clock unless the game has ended
    pub fn update(&mut self) {
        if !self.game_finished {
            self.elapsed_time = self.start_time.elapsed();
        }
    }

    pub fn on_game_start(&mut self) {
        self.start_time = Instant::now();
        self.elapsed_time = Duration::ZERO;
        self.letters_collected = 0;
        self.game_finished = false;
    }

    pub fn on_letter_collected(&mut self) {
        self.letters_collected += 1;
    }

    pub fn on_word_completed(&mut self, score: u32) {
        self.letters_collected += 1;
        self.best_score = self.best_score.max(score);
    }

    pub fn on_game_over(&mut self, final_score: u32) {
        self.update();
        self.game_finished = true;
        self.games_played += 1;
        self.best_score = self.best_score.max(final_score);
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}
