use crate::engine::Move;
use crate::logic::board::{Board, BoardCoordinate, Color};
use crate::logic::rules::{apply_move, flips_for, has_legal_move, is_terminal, validate_move, MoveError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Playing,
    Finished { winner: Option<Color> }, // None on equal disk counts
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveRecord {
    Place {
        color: Color,
        at: Move,
        flipped: usize,
    },
    Pass {
        color: Color,
    },
}

/// Headless game lifecycle: whose turn it is, the turn counter and the
/// end-of-game check, driven by the same rules the engine searches with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub board: Board,
    pub turn: Color,
    pub turn_count: u32,
    pub status: GameStatus,
    pub history: Vec<MoveRecord>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Color::Black,
            turn_count: 1,
            status: GameStatus::Playing,
            history: Vec::new(),
        }
    }

    /// Resumes from an arbitrary position.
    #[must_use]
    pub fn from_position(board: Board, turn: Color, turn_count: u32) -> Self {
        let mut state = Self {
            board,
            turn,
            turn_count,
            status: GameStatus::Playing,
            history: Vec::new(),
        };
        state.update_status();
        state
    }

    pub const fn is_over(&self) -> bool {
        matches!(self.status, GameStatus::Finished { .. })
    }

    pub fn make_move(&mut self, row: usize, col: usize) -> Result<(), MoveError> {
        let at = BoardCoordinate::new(row, col).ok_or(MoveError::OutOfBounds)?;
        self.play(at)
    }

    pub fn play(&mut self, at: Move) -> Result<(), MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        validate_move(&self.board, at, self.turn)?;

        let flipped = flips_for(&self.board, at, self.turn).len();
        apply_move(&mut self.board, at, self.turn);
        self.history.push(MoveRecord::Place {
            color: self.turn,
            at,
            flipped,
        });

        self.turn = self.turn.opposite();
        self.turn_count += 1;
        self.update_status();
        Ok(())
    }

    /// Hands the turn over when the side to move has nowhere to play.
    pub fn pass(&mut self) -> Result<(), MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        if has_legal_move(&self.board, self.turn) {
            return Err(MoveError::PassNotAllowed);
        }

        self.history.push(MoveRecord::Pass { color: self.turn });
        self.turn = self.turn.opposite();
        self.update_status();
        Ok(())
    }

    pub fn must_pass(&self) -> bool {
        !self.is_over() && !has_legal_move(&self.board, self.turn)
    }

    fn update_status(&mut self) {
        if is_terminal(&self.board, self.turn, self.turn_count) {
            self.status = GameStatus::Finished {
                winner: self.leader(),
            };
        }
    }

    /// Color with strictly more disks on the board.
    #[must_use]
    pub fn leader(&self) -> Option<Color> {
        let black = self.board.disk_count(Color::Black);
        let white = self.board.disk_count(Color::White);
        match black.cmp(&white) {
            std::cmp::Ordering::Greater => Some(Color::Black),
            std::cmp::Ordering::Less => Some(Color::White),
            std::cmp::Ordering::Equal => None,
        }
    }
}
