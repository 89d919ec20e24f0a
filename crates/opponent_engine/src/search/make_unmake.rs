//! Move making and unmaking for search
//!
//! The search never calls `Game::push` directly. It goes through
//! [`MoveGuard`], which undoes the move when dropped, so every exit path
//! (normal return, beta cutoff, early TT return inside the child) leaves the
//! position exactly as it was.

use crate::board::Game;
use shakmaty::Move;
use std::ops::{Deref, DerefMut};

/// A move applied to a game; undone on drop
pub(crate) struct MoveGuard<'a> {
    game: &'a mut Game,
}

impl Drop for MoveGuard<'_> {
    fn drop(&mut self) {
        self.game.pop();
    }
}

impl Deref for MoveGuard<'_> {
    type Target = Game;

    fn deref(&self) -> &Game {
        self.game
    }
}

impl DerefMut for MoveGuard<'_> {
    fn deref_mut(&mut self) -> &mut Game {
        self.game
    }
}

/// Make a move on the game (returns the guard that unmakes it)
pub(crate) fn make_move<'a>(game: &'a mut Game, mv: &Move) -> MoveGuard<'a> {
    game.push(mv);
    MoveGuard { game }
}
