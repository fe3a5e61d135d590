//! Match lifecycle around the simulation step
//!
//! A session alternates between Idle (start or end screen) and Running.
//! Only `start`/`restart` leave Idle; only a finished match re-enters it
//! (or an explicit `return_to_menu`).

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::difficulty::{Difficulty, Progress};
use crate::persistence::ProgressStore;
use crate::sim::{GameEvent, GamePhase, GameState, Score, Side, TickInput, step};

/// Everything one frame produced for the outside world
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameReport {
    /// Events for the audio collaborator, in order
    pub events: Vec<GameEvent>,
    /// Winner, on the frame the match ended
    pub winner: Option<Side>,
}

/// A player's game: state, RNG, chosen difficulty and saved progress
pub struct Session<S: ProgressStore> {
    state: GameState,
    rng: Pcg32,
    difficulty: Difficulty,
    progress: Progress,
    store: S,
}

impl<S: ProgressStore> Session<S> {
    /// Load progress once and wait on the start screen
    pub fn new(store: S, seed: u64) -> Self {
        let progress = store.load();
        log::info!(
            "Session created with seed {} ({} of {} difficulties completed)",
            seed,
            progress.completed_count(),
            Difficulty::ALL.len()
        );
        Self {
            state: GameState::new(),
            rng: Pcg32::seed_from_u64(seed),
            difficulty: Difficulty::default(),
            progress,
            store,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn progress(&self) -> Progress {
        self.progress
    }

    pub fn is_completed(&self, difficulty: Difficulty) -> bool {
        self.progress.is_completed(difficulty)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Final (or current) score, for the end screen
    pub fn final_score(&self) -> Score {
        self.state.score
    }

    /// Choose the opponent tier for the next match
    pub fn select_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        log::info!("Difficulty set to {}", difficulty.as_str());
    }

    /// Reset scores, paddles and ball, then start simulating
    pub fn start(&mut self) {
        self.state.reset_match(&mut self.rng);
        self.state.phase = GamePhase::Running;
        log::info!("Match started on {}", self.difficulty.as_str());
    }

    /// Same as `start`; used by the end screen's play-again button
    pub fn restart(&mut self) {
        self.start();
    }

    /// Reset everything and go back to the start screen without playing
    pub fn return_to_menu(&mut self) {
        self.state.reset_match(&mut self.rng);
        self.state.phase = GamePhase::Idle;
        log::info!("Returned to start screen");
    }

    /// Pointer moved: centre the player paddle on `y` (board coordinates)
    pub fn set_pointer_y(&mut self, y: f32) {
        self.state.set_player_target(y);
    }

    /// Run one simulation step and handle the end of a match
    pub fn frame(&mut self) -> FrameReport {
        let input = TickInput::for_difficulty(self.difficulty);
        let outcome = step(&mut self.state, &input, &mut self.rng);
        let mut report = FrameReport {
            events: outcome.events,
            winner: outcome.winner,
        };

        match outcome.winner {
            Some(Side::Left) => {
                if self.progress.mark_completed(self.difficulty) {
                    log::info!("Cleared {} for the first time", self.difficulty.as_str());
                }
                self.store.save(&self.progress);
                report.events.push(GameEvent::GameWon);
            }
            Some(Side::Right) => report.events.push(GameEvent::GameLost),
            None => {}
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::persistence::MemoryStore;
    use glam::Vec2;

    /// Park the ball just inside `side`'s goal line, clear of its paddle
    fn set_up_goal(session: &mut Session<MemoryStore>, scorer: Side) {
        let state = &mut session.state;
        match scorer {
            Side::Left => {
                state.opponent.y = 0.0;
                state.ball.pos = Vec2::new(BOARD_WIDTH - 2.0, 500.0);
                state.ball.vel = Vec2::new(BALL_SPEED, 0.0);
            }
            Side::Right => {
                state.player.y = 0.0;
                state.ball.pos = Vec2::new(2.0, 500.0);
                state.ball.vel = Vec2::new(-BALL_SPEED, 0.0);
            }
        }
    }

    #[test]
    fn test_new_session_is_idle() {
        let session = Session::new(MemoryStore::new(), 1);
        assert_eq!(session.phase(), GamePhase::Idle);
        assert_eq!(session.difficulty(), Difficulty::Easy);
        assert_eq!(session.progress(), Progress::default());
    }

    #[test]
    fn test_loads_saved_progress() {
        let session = Session::new(MemoryStore::with_raw(r#"{"easy":true,"hard":"x"}"#), 1);
        assert!(session.is_completed(Difficulty::Easy));
        assert!(!session.is_completed(Difficulty::Hard));
    }

    #[test]
    fn test_idle_frames_do_nothing() {
        let mut session = Session::new(MemoryStore::new(), 1);
        let before = serde_json::to_string(session.state()).unwrap();
        for _ in 0..3 {
            assert_eq!(session.frame(), FrameReport::default());
        }
        assert_eq!(serde_json::to_string(session.state()).unwrap(), before);
    }

    #[test]
    fn test_start_resets_match() {
        let mut session = Session::new(MemoryStore::new(), 2);
        session.start();
        session.state.score = Score { left: 2, right: 1 };
        session.state.player.y = 0.0;
        session.start();
        assert!(session.is_running());
        assert_eq!(session.final_score(), Score::default());
        assert_eq!(session.state().player.y, 250.0);
        assert!((session.state().ball.vel.length() - BALL_SPEED).abs() < 1e-4);
    }

    #[test]
    fn test_player_win_marks_difficulty() {
        let mut session = Session::new(MemoryStore::new(), 3);
        session.select_difficulty(Difficulty::Medium);
        session.start();
        session.state.score.left = WINNING_SCORE - 1;
        set_up_goal(&mut session, Side::Left);

        let report = session.frame();
        assert_eq!(report.winner, Some(Side::Left));
        assert_eq!(report.events, vec![GameEvent::GameWon]);
        assert_eq!(session.phase(), GamePhase::Idle);
        assert!(session.is_completed(Difficulty::Medium));
        assert!(!session.is_completed(Difficulty::Easy));
        assert_eq!(session.store().save_count(), 1);
        assert_eq!(session.store().load(), session.progress());
    }

    #[test]
    fn test_opponent_win_saves_nothing() {
        let mut session = Session::new(MemoryStore::new(), 4);
        session.start();
        session.state.score = Score { left: 1, right: 2 };
        set_up_goal(&mut session, Side::Right);

        let report = session.frame();
        assert_eq!(report.winner, Some(Side::Right));
        assert_eq!(report.events, vec![GameEvent::GameLost]);
        assert_eq!(session.store().save_count(), 0);
        assert_eq!(session.final_score(), Score { left: 1, right: 3 });

        // Frozen until restart
        assert_eq!(session.frame(), FrameReport::default());
        session.restart();
        assert!(session.is_running());
        assert_eq!(session.final_score(), Score::default());
        assert_eq!(session.state().winner, None);
    }

    #[test]
    fn test_completion_is_never_cleared() {
        let mut session = Session::new(MemoryStore::with_raw(r#"{"easy":true}"#), 5);
        session.start();
        session.state.score.right = WINNING_SCORE - 1;
        set_up_goal(&mut session, Side::Right);
        session.frame();
        assert!(session.is_completed(Difficulty::Easy));
    }

    #[test]
    fn test_return_to_menu_stays_idle() {
        let mut session = Session::new(MemoryStore::new(), 6);
        session.start();
        session.state.score.left = 2;
        session.return_to_menu();
        assert_eq!(session.phase(), GamePhase::Idle);
        assert_eq!(session.final_score(), Score::default());
        assert_eq!(session.frame(), FrameReport::default());
    }

    #[test]
    fn test_pointer_drives_player_paddle() {
        let mut session = Session::new(MemoryStore::new(), 7);
        session.set_pointer_y(120.0);
        assert_eq!(session.state().player.y, 70.0);
        session.set_pointer_y(-40.0);
        assert_eq!(session.state().player.y, 0.0);
    }
}
