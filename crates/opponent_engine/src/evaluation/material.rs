//! Material evaluation
//!
//! Material balance, game phase detection and the middlegame attack bonus.
//! All values are from White's perspective.

use crate::board::Game;
use crate::constants::*;
use shakmaty::{Bitboard, Chess, Color, Position, Role};

/// Phase of the game, as used by the attack bonus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Opening,
    Middlegame,
    Endgame,
}

fn pieces(position: &Chess, role: Role, color: Color) -> Bitboard {
    let board = position.board();
    board.by_role(role) & board.by_color(color)
}

fn count(position: &Chess, role: Role, color: Color) -> i32 {
    pieces(position, role, color).count() as i32
}

/// Evaluate material balance (White minus Black, centipawns)
pub fn material_difference(position: &Chess) -> i32 {
    ROLES
        .iter()
        .map(|&role| {
            let balance = count(position, role, Color::White) - count(position, role, Color::Black);
            piece_value(role) * balance
        })
        .sum()
}

/// Endgame once queens are gone (or both remain with few minors), opening
/// for the first moves, middlegame otherwise
pub fn game_phase(position: &Chess) -> GamePhase {
    let queens =
        count(position, Role::Queen, Color::White) + count(position, Role::Queen, Color::Black);
    let minors = [Role::Knight, Role::Bishop]
        .iter()
        .map(|&role| count(position, role, Color::White) + count(position, role, Color::Black))
        .sum::<i32>();

    if queens == 0 || (queens == 2 && minors <= 4) {
        GamePhase::Endgame
    } else if position.fullmoves().get() < OPENING_PHASE_MOVES {
        GamePhase::Opening
    } else {
        GamePhase::Middlegame
    }
}

/// Middlegame bonus for pieces in enemy territory and available checks
///
/// Zero outside the middlegame. Pieces count when White's stand on ranks
/// 5-8 or Black's on ranks 1-4. Each checking move of the side to move adds
/// `CHECK_BONUS` for that side.
pub fn attack_bonus(game: &Game) -> i32 {
    let position = game.position();
    if game_phase(position) != GamePhase::Middlegame {
        return 0;
    }

    let mut bonus = 0;
    for color in [Color::White, Color::Black] {
        let sign = if color == Color::White { 1 } else { -1 };
        for role in [Role::Knight, Role::Bishop, Role::Rook, Role::Queen] {
            for square in pieces(position, role, color) {
                let rank = u32::from(square) / 8;
                let advanced = match color {
                    Color::White => rank >= 4,
                    Color::Black => rank <= 3,
                };
                if advanced {
                    bonus += sign * TERRITORY_BONUS;
                }
            }
        }
    }

    let checks = game
        .legal_moves()
        .iter()
        .filter(|mv| game.gives_check(mv))
        .count() as i32;
    bonus + game.side_sign() * checks * CHECK_BONUS
}
