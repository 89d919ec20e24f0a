//! Position identity and bounded caches
//!
//! Positions are keyed by a 64-bit Zobrist hash of the game-relevant state
//! (board, side to move, castling rights, legal en-passant target). Move
//! counters are not part of the key, so transposed move orders share entries.

use shakmaty::zobrist::Zobrist64;
use shakmaty::{Chess, EnPassantMode, Position};
use std::collections::HashMap;
use std::hash::Hash;

/// Identity of a position for cache lookups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PositionId(pub u64);

impl PositionId {
    /// Hash a shakmaty position
    pub fn of(position: &Chess) -> Self {
        let Zobrist64(hash) = position.zobrist_hash::<Zobrist64>(EnPassantMode::Legal);
        PositionId(hash)
    }
}

/// Fixed-capacity map that is cleared wholesale once full
///
/// Inserting a new key into a full cache drops every entry first. This keeps
/// memory bounded with O(1) amortized eviction at the cost of hit rate right
/// after a clear. Overwriting an existing key never triggers a clear.
///
/// A capacity of zero disables the cache: inserts are ignored.
#[derive(Debug, Clone)]
pub struct BoundedCache<K, V> {
    map: HashMap<K, V>,
    capacity: usize,
    clears: u64,
}

impl<K: Hash + Eq, V> BoundedCache<K, V> {
    pub fn new(capacity: usize) -> Self {
        Self {
            map: HashMap::with_capacity(capacity),
            capacity,
            clears: 0,
        }
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.map.get(key)
    }

    /// Insert or overwrite; clears the whole cache first if it is full
    pub fn insert(&mut self, key: K, value: V) {
        if self.capacity == 0 {
            return;
        }
        if self.map.len() >= self.capacity && !self.map.contains_key(&key) {
            self.map.clear();
            self.clears += 1;
        }
        self.map.insert(key, value);
    }

    pub fn clear(&mut self) {
        self.map.clear();
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of wholesale evictions since creation
    pub fn clears(&self) -> u64 {
        self.clears
    }
}
