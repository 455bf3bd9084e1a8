//! Game state module - the tick-driven state machine
//!
//! Sequences the core operations across discrete ticks: one optional
//! input event and one gravity evaluation per tick, a fixed pause while
//! full rows are highlighted, and spawning with the topped-out check.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::rng::ShapeDealer;
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{
    InputEvent, PieceKind, CLEAR_PAUSE_TICKS, FALL_INTERVAL_TICKS, SPAWN_COL, SPAWN_ROW,
};

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FallingPiece {
    pub kind: PieceKind,
    /// Rotation state 0..=3 (quarter turns clockwise).
    pub rotation: u8,
    pub col: i8,
    pub row: i8,
}

impl FallingPiece {
    /// Create a piece at the spawn origin.
    pub fn at_spawn(kind: PieceKind) -> Self {
        Self {
            kind,
            rotation: 0,
            col: SPAWN_COL,
            row: SPAWN_ROW,
        }
    }
}

/// What the state machine is doing this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// A piece is in play; input and gravity apply.
    Falling,
    /// Full rows are highlighted; held for a fixed number of ticks,
    /// then cleared before the next spawn.
    ClearPause,
    /// Terminal: a freshly spawned piece did not fit.
    GameOver,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    active: Option<FallingPiece>,
    dealer: ShapeDealer,
    phase: Phase,
    /// Ticks since the last automatic fall.
    tick_count: u32,
    /// Ticks between automatic falls (fixed; no level progression).
    fall_interval: u32,
    /// Remaining ticks of the row-clear highlight.
    pause_ticks: u32,
    /// Full rows found at the last lock, ascending; cleared when the
    /// pause ends.
    pending_rows: ArrayVec<usize, 4>,
    started: bool,
    /// Set by the quit input event; distinct from game over.
    stopped: bool,
}

impl GameState {
    /// Create a new game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self::with_board(Board::new(), seed)
    }

    /// Create a game over a prepared board (test harnesses and replays).
    pub fn with_board(board: Board, seed: u32) -> Self {
        Self {
            board,
            active: None,
            dealer: ShapeDealer::new(seed),
            phase: Phase::Falling,
            tick_count: 0,
            fall_interval: FALL_INTERVAL_TICKS,
            pause_ticks: 0,
            pending_rows: ArrayVec::new(),
            started: false,
            stopped: false,
        }
    }

    /// Start the game and spawn the first piece
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.spawn_piece();
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// False once the quit event was honored or the game ended.
    pub fn running(&self) -> bool {
        self.started && !self.stopped && !self.game_over()
    }

    pub fn active(&self) -> Option<FallingPiece> {
        self.active
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Rows highlighted for clearing, ascending. Empty outside the
    /// clear pause.
    pub fn clearing_rows(&self) -> &[usize] {
        &self.pending_rows
    }

    /// Advance the game by one tick, consuming at most one input event.
    ///
    /// Phase order within the tick: input first (quit is honored before
    /// gravity), then gravity or the clear-pause countdown.
    pub fn tick(&mut self, input: Option<InputEvent>) {
        if !self.running() {
            return;
        }

        if let Some(event) = input {
            self.apply_input(event);
            if self.stopped {
                return;
            }
        }

        match self.phase {
            Phase::Falling => self.gravity_step(),
            Phase::ClearPause => self.pause_step(),
            Phase::GameOver => {}
        }
    }

    /// Apply a single input event. Illegal moves are silently rejected;
    /// the piece simply stays put.
    pub fn apply_input(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::MoveLeft => self.try_move(-1, 0),
            InputEvent::MoveRight => self.try_move(1, 0),
            InputEvent::SoftDrop => self.try_move(0, 1),
            InputEvent::Rotate => self.try_rotate(),
            InputEvent::Quit => {
                self.stopped = true;
                true
            }
        }
    }

    /// Try to move the active piece
    pub(crate) fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        if self
            .board
            .fits(active.kind, active.rotation, active.col + dx, active.row + dy)
        {
            self.active = Some(FallingPiece {
                col: active.col + dx,
                row: active.row + dy,
                ..active
            });
            return true;
        }

        false
    }

    /// Try to rotate the active piece one quarter turn clockwise
    pub(crate) fn try_rotate(&mut self) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        let rotation = (active.rotation + 1) % 4;
        if self
            .board
            .fits(active.kind, rotation, active.col, active.row)
        {
            self.active = Some(FallingPiece { rotation, ..active });
            return true;
        }

        false
    }

    /// Gravity phase: once the tick counter reaches the fall interval,
    /// drop the piece one row or lock it where it rests.
    fn gravity_step(&mut self) {
        let Some(active) = self.active else {
            return;
        };

        self.tick_count += 1;
        if self.tick_count < self.fall_interval {
            return;
        }
        self.tick_count = 0;

        if self
            .board
            .fits(active.kind, active.rotation, active.col, active.row + 1)
        {
            self.active = Some(FallingPiece {
                row: active.row + 1,
                ..active
            });
        } else {
            self.lock_active();
        }
    }

    /// Lock the active piece onto the board, scan for full rows, and
    /// either enter the clear pause or spawn the next piece.
    fn lock_active(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };

        self.board
            .lock_piece(active.kind, active.rotation, active.col, active.row);

        let full_rows = self.board.scan_full_rows(active.row);
        if full_rows.is_empty() {
            self.spawn_piece();
        } else {
            self.pending_rows = full_rows;
            self.pause_ticks = CLEAR_PAUSE_TICKS;
            self.phase = Phase::ClearPause;
        }
    }

    /// Clear-pause countdown; applies the pending clears when it ends.
    fn pause_step(&mut self) {
        self.pause_ticks = self.pause_ticks.saturating_sub(1);
        if self.pause_ticks > 0 {
            return;
        }

        self.board.clear_rows(&self.pending_rows);
        self.pending_rows.clear();
        self.spawn_piece();
    }

    /// Spawn the next dealt shape at the spawn origin.
    pub fn spawn_piece(&mut self) -> bool {
        let kind = self.dealer.deal();
        self.spawn_kind(kind)
    }

    /// Spawn a specific shape (deterministic harnesses). Failure to fit
    /// at the spawn origin is the game-over condition; the board is not
    /// touched.
    pub fn spawn_kind(&mut self, kind: PieceKind) -> bool {
        let piece = FallingPiece::at_spawn(kind);

        if !self.board.fits(piece.kind, piece.rotation, piece.col, piece.row) {
            self.active = None;
            self.phase = Phase::GameOver;
            return false;
        }

        self.active = Some(piece);
        self.tick_count = 0;
        self.phase = Phase::Falling;
        true
    }

    /// Fill a caller-owned snapshot without allocating.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_grid(&mut out.board);
        out.active = self.active.map(ActiveSnapshot::from);
        out.clearing_rows.clear();
        out.clearing_rows
            .extend(self.pending_rows.iter().copied());
        out.game_over = self.game_over();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
