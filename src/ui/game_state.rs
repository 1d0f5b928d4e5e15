//! Game session management for the Othello GUI
//!
//! Wraps the core [`Game`] with everything the window needs: mode
//! selection, the AI worker thread, pass/game-over resolution, the move
//! timer, and the flip animation state.

use crate::{AiPlayer, Disc, Game, GameError, MoveChoice, PlayerKind, Pos};
use std::sync::mpsc::{channel, Receiver};
use std::thread;
use std::time::{Duration, Instant};

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Player vs AI
    PvE { human_color: Disc },
    /// Player vs Player (hotseat)
    PvP,
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::PvE {
            human_color: Disc::Black,
        }
    }
}

/// AI computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<Option<MoveChoice>>,
        start_time: Instant,
    },
}

/// Final standing once neither side can move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOutcome {
    /// `None` on a draw
    pub winner: Option<Disc>,
    pub black: usize,
    pub white: usize,
}

/// Presentation-only flip animation.
///
/// Ownership on the board flips the moment a move lands; only the
/// *displayed* color lags. Each flipped cell starts its flip
/// `index x stagger` after the move, so captures ripple outward in the
/// order the capture runs were reported.
pub struct FlipAnimation {
    started: Instant,
    cells: Vec<Pos>,
    /// Owner the flipped discs are shown as until their flip begins
    pub from: Disc,
}

impl FlipAnimation {
    const STAGGER: Duration = Duration::from_millis(70);
    const FLIP: Duration = Duration::from_millis(240);

    pub fn new(cells: Vec<Pos>, from: Disc) -> Self {
        Self {
            started: Instant::now(),
            cells,
            from,
        }
    }

    /// Flip progress for `pos`: `None` when the cell is not animated,
    /// otherwise a value that is negative before the cell's flip starts,
    /// in `0..1` while it turns, and `>= 1` afterwards.
    pub fn progress(&self, pos: Pos) -> Option<f32> {
        let index = self.cells.iter().position(|&p| p == pos)?;
        let delay = Self::STAGGER * index as u32;
        let elapsed = self.started.elapsed().as_secs_f32() - delay.as_secs_f32();
        Some(elapsed / Self::FLIP.as_secs_f32())
    }

    pub fn is_complete(&self) -> bool {
        let total = Self::STAGGER * self.cells.len() as u32 + Self::FLIP;
        self.started.elapsed() >= total
    }
}

/// Move timer for tracking thinking time
pub struct MoveTimer {
    pub start_time: Option<Instant>,
    pub last_move_duration: Option<Duration>,
    pub ai_thinking_time: Option<Duration>,
}

impl Default for MoveTimer {
    fn default() -> Self {
        Self {
            start_time: Some(Instant::now()),
            last_move_duration: None,
            ai_thinking_time: None,
        }
    }
}

impl MoveTimer {
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn stop(&mut self) -> Duration {
        let duration = self.elapsed();
        self.last_move_duration = Some(duration);
        self.start_time = None;
        duration
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.map_or(Duration::ZERO, |t| t.elapsed())
    }

    pub fn set_ai_time(&mut self, duration: Duration) {
        self.ai_thinking_time = Some(duration);
    }
}

/// Main session state behind the window
pub struct GameSession {
    pub game: Game,
    pub mode: GameMode,
    pub outcome: Option<GameOutcome>,
    pub last_move: Option<Pos>,
    pub move_history: Vec<(Pos, Disc)>,
    pub last_ai_choice: Option<MoveChoice>,
    pub ai_state: AiState,
    pub move_timer: MoveTimer,
    pub flip_animation: Option<FlipAnimation>,
    pub message: Option<String>,

    // AI configuration for the non-human seat (and PvP demo games)
    ai: AiPlayer,
}

fn side_name(side: Disc) -> &'static str {
    match side {
        Disc::Black => "Black",
        Disc::White => "White",
        Disc::Empty => "Nobody",
    }
}

impl GameSession {
    pub fn new(mode: GameMode) -> Self {
        Self {
            game: Game::new(),
            mode,
            outcome: None,
            last_move: None,
            move_history: Vec::new(),
            last_ai_choice: None,
            ai_state: AiState::Idle,
            move_timer: MoveTimer::default(),
            flip_animation: None,
            message: None,
            ai: AiPlayer::default(),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.mode);
    }

    /// Who controls `side` under the current mode.
    pub fn seat(&self, side: Disc) -> PlayerKind {
        match self.mode {
            GameMode::PvE { human_color } if side == human_color => PlayerKind::Human,
            GameMode::PvE { .. } => PlayerKind::Ai(self.ai),
            GameMode::PvP => PlayerKind::Human,
        }
    }

    /// Check if it's the human's turn
    pub fn is_human_turn(&self) -> bool {
        self.seat(self.game.side_to_move()) == PlayerKind::Human
    }

    /// Check if it's the AI's turn
    pub fn is_ai_turn(&self) -> bool {
        self.seat(self.game.side_to_move()).is_ai()
    }

    /// Check if AI is currently thinking
    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// Legal moves to highlight for the human player; empty while the AI
    /// is on move or the game is over.
    pub fn highlighted_moves(&self) -> Vec<Pos> {
        if self.outcome.is_some() || !self.is_human_turn() {
            return Vec::new();
        }
        self.game.legal_moves()
    }

    /// Attempt to place a disc at the given position for the human player.
    pub fn try_place(&mut self, pos: Pos) -> Result<(), String> {
        if self.outcome.is_some() {
            return Err("Game is over".to_string());
        }
        if self.is_ai_thinking() {
            return Err("AI is thinking".to_string());
        }
        if !self.is_human_turn() {
            return Err("Not your turn".to_string());
        }

        self.execute_move(pos).map_err(|e| e.to_string())
    }

    /// Execute a move for whichever side is on move (human or AI).
    fn execute_move(&mut self, pos: Pos) -> Result<(), GameError> {
        let side = self.game.side_to_move();
        let placed = self.game.place_piece(side, pos)?;

        self.move_history.push((pos, side));
        self.last_move = Some(pos);
        self.flip_animation = Some(FlipAnimation::new(placed.flipped, side.opponent()));
        self.move_timer.stop();
        self.message = None;

        self.resolve_turn();
        self.move_timer.start();
        Ok(())
    }

    /// After a move: finish the game if neither side can move, otherwise
    /// pass the turn while the side to move is stuck.
    fn resolve_turn(&mut self) {
        if self.game.is_game_over() {
            self.outcome = Some(GameOutcome {
                winner: self.game.winner(),
                black: self.game.tile_count(Disc::Black),
                white: self.game.tile_count(Disc::White),
            });
            return;
        }
        if self.game.legal_moves().is_empty() {
            let stuck = self.game.side_to_move();
            self.game.pass_turn();
            self.message = Some(format!("{} has no legal move, turn passes", side_name(stuck)));
        }
    }

    /// Start AI thinking on a worker thread.
    pub fn start_ai_thinking(&mut self) {
        if self.is_ai_thinking() || self.outcome.is_some() {
            return;
        }

        let side = self.game.side_to_move();
        let PlayerKind::Ai(ai) = self.seat(side) else {
            return;
        };
        let board = *self.game.board();

        let (tx, rx) = channel();

        thread::spawn(move || {
            let choice = ai.choose_move(&board, side);
            let _ = tx.send(choice);
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Check if AI has finished thinking and apply its move.
    pub fn check_ai_result(&mut self) {
        let result = match &self.ai_state {
            AiState::Thinking {
                receiver,
                start_time,
            } => match receiver.try_recv() {
                Ok(choice) => Some((choice, start_time.elapsed())),
                Err(std::sync::mpsc::TryRecvError::Empty) => None,
                Err(std::sync::mpsc::TryRecvError::Disconnected) => {
                    self.ai_state = AiState::Idle;
                    self.message = Some("AI error".to_string());
                    return;
                }
            },
            AiState::Idle => None,
        };

        if let Some((choice, elapsed)) = result {
            self.ai_state = AiState::Idle;
            self.move_timer.set_ai_time(elapsed);

            match choice {
                Some(choice) => {
                    self.last_ai_choice = Some(choice);
                    if let Err(err) = self.execute_move(choice.pos) {
                        self.message = Some(err.to_string());
                    }
                }
                None => {
                    // The turn logic resolves passes before the AI runs, so
                    // a moveless AI means the position just closed out.
                    self.resolve_turn();
                }
            }
        }
    }

    /// Get AI thinking elapsed time
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }
}
