//! Default position scorer
//!
//! Used when no learned model is injected: material plus a small bonus for
//! knights, bishops and pawns near the centre.

use super::material::material_difference;
use super::Scorer;
use shakmaty::{Chess, Color, Position, Role, Square};

/// Centralisation bonus per piece, by distance from the centre
const CENTER_BONUS: [i32; 4] = [10, 5, 2, 0];

/// Material + centralisation scorer
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

fn center_distance(square: Square) -> usize {
    let index = u32::from(square) as i32;
    let (file, rank) = (index % 8, index / 8);
    let file_dist = (2 * file - 7).abs() / 2;
    let rank_dist = (2 * rank - 7).abs() / 2;
    file_dist.max(rank_dist) as usize
}

impl Scorer for MaterialScorer {
    fn score(&self, position: &Chess) -> f32 {
        let board = position.board();
        let mut score = material_difference(position);

        for role in [Role::Pawn, Role::Knight, Role::Bishop] {
            for color in [Color::White, Color::Black] {
                let sign = if color == Color::White { 1 } else { -1 };
                for square in board.by_role(role) & board.by_color(color) {
                    score += sign * CENTER_BONUS[center_distance(square)];
                }
            }
        }

        score as f32
    }
}
