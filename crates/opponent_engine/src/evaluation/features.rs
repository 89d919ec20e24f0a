//! Input encoding for learned scorers
//!
//! The evaluator network is trained offline on this exact layout, so a
//! scorer that wraps such a network calls [`encode_position`] and feeds
//! the result to the model:
//!
//! - 12 planes of 8×8, one per (colour, role): White pawn..king in planes
//!   0-5, Black pawn..king in planes 6-11. Row 0 is rank 8, column 0 is
//!   file a. A set square is 1.0.
//! - 5 extras: White O-O, White O-O-O, Black O-O, Black O-O-O rights, and
//!   1.0 when White is to move.

use shakmaty::{CastlingSide, Chess, Color, Position, Role};

pub const PLANES: usize = 12;
pub const EXTRAS: usize = 5;

/// Board planes plus extra features
#[derive(Debug, Clone, PartialEq)]
pub struct PositionTensor {
    pub planes: [[[f32; 8]; 8]; PLANES],
    pub extras: [f32; EXTRAS],
}

impl PositionTensor {
    /// Flattened planes (row-major) followed by the extras
    pub fn to_vec(&self) -> Vec<f32> {
        let mut out = Vec::with_capacity(PLANES * 64 + EXTRAS);
        for plane in &self.planes {
            for row in plane {
                out.extend_from_slice(row);
            }
        }
        out.extend_from_slice(&self.extras);
        out
    }
}

fn plane_index(role: Role, color: Color) -> usize {
    let base = match role {
        Role::Pawn => 0,
        Role::Knight => 1,
        Role::Bishop => 2,
        Role::Rook => 3,
        Role::Queen => 4,
        Role::King => 5,
    };
    match color {
        Color::White => base,
        Color::Black => base + 6,
    }
}

fn flag(value: bool) -> f32 {
    if value {
        1.0
    } else {
        0.0
    }
}

/// Encode a position for a learned scorer
pub fn encode_position(position: &Chess) -> PositionTensor {
    let mut planes = [[[0.0f32; 8]; 8]; PLANES];
    let board = position.board();

    for color in [Color::White, Color::Black] {
        for role in crate::constants::ROLES {
            for square in board.by_role(role) & board.by_color(color) {
                let index = u32::from(square) as usize;
                let (row, col) = (7 - index / 8, index % 8);
                planes[plane_index(role, color)][row][col] = 1.0;
            }
        }
    }

    let castles = position.castles();
    let extras = [
        flag(castles.has(Color::White, CastlingSide::KingSide)),
        flag(castles.has(Color::White, CastlingSide::QueenSide)),
        flag(castles.has(Color::Black, CastlingSide::KingSide)),
        flag(castles.has(Color::Black, CastlingSide::QueenSide)),
        flag(position.turn() == Color::White),
    ];

    PositionTensor { planes, extras }
}
