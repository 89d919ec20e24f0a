//! Transposition table
//!
//! Caches alpha-beta results by position identity so transposed lines are
//! not searched twice. One entry per position, last write wins. Capacity is
//! fixed; once full, the next new position clears the whole table (same
//! policy as the evaluation cache).
//!
//! Mate scores are measured from the root while searching but stored
//! measured from the node itself, so an entry stays correct when the same
//! position is reached at a different ply.

use crate::constants::is_mate_score;
use crate::hash::{BoundedCache, PositionId};
use shakmaty::Move;

/// How a stored score relates to the true value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    /// Score is the exact minimax value
    Exact,
    /// A beta cutoff happened: true value >= score
    LowerBound,
    /// Nothing beat alpha: true value <= score
    UpperBound,
}

/// Stored search result
#[derive(Debug, Clone, PartialEq)]
pub struct TtEntry {
    pub score: i32,
    pub best_move: Option<Move>,
    pub depth: u32,
    pub bound: Bound,
}

/// Outcome of a probe
#[derive(Debug, Clone, PartialEq)]
pub enum Probe {
    /// The node can return this result without searching
    Hit { score: i32, best_move: Option<Move> },
    /// Search with this (possibly narrowed) window
    Window { alpha: i32, beta: i32 },
}

#[derive(Debug, Clone)]
pub struct TranspositionTable {
    entries: BoundedCache<PositionId, TtEntry>,
    hits: u64,
}

impl TranspositionTable {
    /// Table holding at most `capacity` entries; 0 disables it
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: BoundedCache::new(capacity),
            hits: 0,
        }
    }

    /// Probe for a result usable at `depth` inside `(alpha, beta)` for a
    /// node `ply` plies from the root
    ///
    /// Entries searched shallower than `depth` are ignored.
    pub fn probe(
        &mut self,
        id: PositionId,
        depth: u32,
        ply: u32,
        mut alpha: i32,
        mut beta: i32,
    ) -> Probe {
        let Some(entry) = self.entries.get(&id) else {
            return Probe::Window { alpha, beta };
        };
        if entry.depth < depth {
            return Probe::Window { alpha, beta };
        }

        let score = score_from_table(entry.score, ply);
        let best_move = entry.best_move;
        match entry.bound {
            Bound::Exact => {
                self.hits += 1;
                return Probe::Hit { score, best_move };
            }
            Bound::LowerBound => alpha = alpha.max(score),
            Bound::UpperBound => beta = beta.min(score),
        }

        if alpha >= beta {
            self.hits += 1;
            Probe::Hit { score, best_move }
        } else {
            Probe::Window { alpha, beta }
        }
    }

    /// Store a result found `ply` plies from the root, overwriting any
    /// previous entry for the position
    pub fn store(
        &mut self,
        id: PositionId,
        score: i32,
        best_move: Option<Move>,
        depth: u32,
        ply: u32,
        bound: Bound,
    ) {
        self.entries.insert(
            id,
            TtEntry {
                score: score_to_table(score, ply),
                best_move,
                depth,
                bound,
            },
        );
    }

    pub fn get(&self, id: PositionId) -> Option<&TtEntry> {
        self.entries.get(&id)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.entries.capacity()
    }

    /// Probes that returned a usable result
    pub fn hits(&self) -> u64 {
        self.hits
    }
}

/// Root-relative mate score to node-relative
fn score_to_table(score: i32, ply: u32) -> i32 {
    if !is_mate_score(score) {
        return score;
    }
    let ply = ply as i32;
    if score > 0 {
        score + ply
    } else {
        score - ply
    }
}

/// Node-relative mate score back to root-relative
fn score_from_table(score: i32, ply: u32) -> i32 {
    if !is_mate_score(score) {
        return score;
    }
    let ply = ply as i32;
    if score > 0 {
        score - ply
    } else {
        score + ply
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{mate_in, mated_in};

    const ID: PositionId = PositionId(0xDEAD_BEEF);

    #[test]
    fn test_exact_entry_returns_immediately() {
        let mut tt = TranspositionTable::new(16);
        tt.store(ID, 42, None, 3, 0, Bound::Exact);
        assert_eq!(
            tt.probe(ID, 3, 0, -100, 100),
            Probe::Hit {
                score: 42,
                best_move: None
            }
        );
        assert_eq!(tt.hits(), 1);
    }

    #[test]
    fn test_shallower_entry_is_never_used() {
        //! Depth sufficiency: a depth-2 result cannot answer a depth-3 query
        let mut tt = TranspositionTable::new(16);
        tt.store(ID, 42, None, 2, 0, Bound::Exact);
        assert_eq!(tt.probe(ID, 3, 0, -100, 100), Probe::Window { alpha: -100, beta: 100 });
        assert_eq!(tt.hits(), 0);

        // Deeper entries answer shallower queries
        assert!(matches!(tt.probe(ID, 1, 0, -100, 100), Probe::Hit { .. }));
    }

    #[test]
    fn test_lower_bound_raises_alpha() {
        let mut tt = TranspositionTable::new(16);
        tt.store(ID, 30, None, 4, 0, Bound::LowerBound);
        assert_eq!(tt.probe(ID, 4, 0, -100, 100), Probe::Window { alpha: 30, beta: 100 });
        assert_eq!(tt.probe(ID, 4, 0, 50, 100), Probe::Window { alpha: 50, beta: 100 });
    }

    #[test]
    fn test_upper_bound_lowers_beta() {
        let mut tt = TranspositionTable::new(16);
        tt.store(ID, -20, None, 4, 0, Bound::UpperBound);
        assert_eq!(tt.probe(ID, 2, 0, -100, 100), Probe::Window { alpha: -100, beta: -20 });
    }

    #[test]
    fn test_empty_window_returns_cached_score() {
        let mut tt = TranspositionTable::new(16);
        tt.store(ID, 150, None, 4, 0, Bound::LowerBound);
        assert_eq!(
            tt.probe(ID, 4, 0, -100, 100),
            Probe::Hit {
                score: 150,
                best_move: None
            }
        );

        tt.store(ID, -150, None, 4, 0, Bound::UpperBound);
        assert!(matches!(tt.probe(ID, 4, 0, -100, 100), Probe::Hit { score: -150, .. }));
    }

    #[test]
    fn test_store_overwrites() {
        let mut tt = TranspositionTable::new(16);
        tt.store(ID, 1, None, 5, 0, Bound::Exact);
        tt.store(ID, 2, None, 1, 0, Bound::UpperBound);
        assert_eq!(tt.len(), 1);
        let entry = tt.get(ID).unwrap();
        assert_eq!(entry.score, 2);
        assert_eq!(entry.depth, 1);
        assert_eq!(entry.bound, Bound::UpperBound);
    }

    #[test]
    fn test_overflow_clears_table() {
        let mut tt = TranspositionTable::new(2);
        tt.store(PositionId(1), 0, None, 1, 0, Bound::Exact);
        tt.store(PositionId(2), 0, None, 1, 0, Bound::Exact);
        tt.store(PositionId(3), 0, None, 1, 0, Bound::Exact);
        assert_eq!(tt.len(), 1);
        assert!(tt.get(PositionId(1)).is_none());
        assert!(tt.get(PositionId(3)).is_some());
    }

    #[test]
    fn test_mate_scores_follow_the_probing_ply() {
        //! A mate stored 3 plies from the root, found again at ply 5, is two
        //! plies further from the new root
        let mut tt = TranspositionTable::new(16);
        tt.store(ID, mate_in(4), None, 2, 3, Bound::Exact);
        assert_eq!(tt.get(ID).unwrap().score, mate_in(1), "Stored relative to the node");
        assert_eq!(
            tt.probe(ID, 2, 5, -100, 100),
            Probe::Hit {
                score: mate_in(6),
                best_move: None
            }
        );

        tt.store(ID, mated_in(3), None, 2, 3, Bound::Exact);
        assert!(matches!(
            tt.probe(ID, 2, 1, -100, 100),
            Probe::Hit { score, .. } if score == mated_in(1)
        ));

        tt.store(ID, 250, None, 2, 7, Bound::Exact);
        assert!(matches!(tt.probe(ID, 2, 1, -100, 300), Probe::Hit { score: 250, .. }));
    }

    #[test]
    fn test_zero_capacity_disables_table() {
        let mut tt = TranspositionTable::new(0);
        tt.store(ID, 42, None, 9, 0, Bound::Exact);
        assert!(tt.is_empty());
        assert_eq!(tt.probe(ID, 1, 0, -1, 1), Probe::Window { alpha: -1, beta: 1 });
    }
}
