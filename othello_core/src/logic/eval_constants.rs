use crate::logic::board::BoardCoordinate;

/// Placements available in a game: 64 cells minus the 4 pre-filled.
pub const TURN_CAP: u32 = 60;

pub const MOBILITY_WEIGHT: i32 = 2;

// Positional weights, Black-positive. Corners are stable; the cells touching
// a corner hand it to the opponent.
#[rustfmt::skip]
pub const WEIGHT_TABLE: [[i32; 8]; 8] = [
    [2000, -200,  20,   5,   5,  20, -200, 2000],
    [-200, -400,  -5,  -5,  -5,  -5, -400, -200],
    [  20,   -5,  15,   3,   3,  15,   -5,   20],
    [   5,   -5,   3,   3,   3,   3,   -5,    5],
    [   5,   -5,   3,   3,   3,   3,   -5,    5],
    [  20,   -5,  15,   3,   3,  15,   -5,   20],
    [-200, -400,  -5,  -5,  -5,  -5, -400, -200],
    [2000, -200,  20,   5,   5,  20, -200, 2000],
];

pub const CORNERS: [(usize, usize); 4] = [(0, 0), (0, 7), (7, 0), (7, 7)];

// Diagonal neighbours of the corners.
pub const X_SQUARES: [(usize, usize); 4] = [(1, 1), (1, 6), (6, 1), (6, 6)];

// Edge neighbours of the corners.
pub const C_SQUARES: [(usize, usize); 8] = [
    (0, 1),
    (1, 0),
    (0, 6),
    (1, 7),
    (6, 0),
    (7, 1),
    (6, 7),
    (7, 6),
];

#[must_use]
pub fn weight_at(pos: BoardCoordinate) -> i32 {
    WEIGHT_TABLE
        .get(pos.row())
        .and_then(|rank| rank.get(pos.col()))
        .copied()
        .unwrap_or(0)
}
