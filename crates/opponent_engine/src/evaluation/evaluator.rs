//! Cached position evaluation
//!
//! Scores are in centipawns from **White's** perspective. The search converts
//! them to the mover's perspective with `Game::side_sign`.

use super::material::{attack_bonus, material_difference};
use super::{MaterialScorer, Scorer};
use crate::board::Game;
use crate::config::EvaluatorConfig;
use crate::constants::{MATE_SCORE, MAX_HEURISTIC_SCORE};
use crate::hash::{BoundedCache, PositionId};
use shakmaty::Color;

/// Scorer wrapped with mate detection, aggression bonus and a cache
pub struct Evaluator {
    scorer: Box<dyn Scorer>,
    cache: BoundedCache<PositionId, i32>,
    config: EvaluatorConfig,
    cache_hits: u64,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new(Box::new(MaterialScorer), EvaluatorConfig::default())
    }
}

impl std::fmt::Debug for Evaluator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Evaluator")
            .field("cached", &self.cache.len())
            .field("config", &self.config)
            .finish()
    }
}

impl Evaluator {
    pub fn new(scorer: Box<dyn Scorer>, config: EvaluatorConfig) -> Self {
        Self {
            scorer,
            cache: BoundedCache::new(config.cache_capacity),
            config,
            cache_hits: 0,
        }
    }

    pub fn config(&self) -> &EvaluatorConfig {
        &self.config
    }

    /// Evaluate a position (positive favors White)
    ///
    /// A checkmate returns `±MATE_SCORE` against the mated side before the
    /// cache or any heuristic is consulted. Everything else is clamped to
    /// `±MAX_HEURISTIC_SCORE`; a NaN from the scorer counts as 0.
    pub fn evaluate(&mut self, game: &Game) -> i32 {
        if game.is_checkmate() {
            return match game.turn() {
                Color::White => -MATE_SCORE,
                Color::Black => MATE_SCORE,
            };
        }

        let id = game.id();
        if let Some(&cached) = self.cache.get(&id) {
            self.cache_hits += 1;
            return cached;
        }

        let base = self.scorer.score(game.position());
        let score = clamp_heuristic(base + self.aggression_bonus(game));
        self.cache.insert(id, score);
        score
    }

    /// Bonus pushing a side that is clearly ahead in material to keep trading
    pub fn aggression_bonus(&self, game: &Game) -> f32 {
        let diff = material_difference(game.position());
        if diff.abs() > self.config.aggression_threshold {
            diff as f32 * self.config.aggression_factor
        } else {
            0.0
        }
    }

    /// Static score used by quiescence, from the side to move's perspective
    pub fn stand_pat(&mut self, game: &Game) -> i32 {
        let mut score = self.evaluate(game);
        if self.config.attack_bonus && !game.is_checkmate() {
            score = (score + attack_bonus(game)).clamp(-MAX_HEURISTIC_SCORE, MAX_HEURISTIC_SCORE);
        }
        score * game.side_sign()
    }

    pub fn cache_hits(&self) -> u64 {
        self.cache_hits
    }

    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }
}

fn clamp_heuristic(raw: f32) -> i32 {
    if raw.is_nan() {
        return 0;
    }
    let limit = MAX_HEURISTIC_SCORE as f32;
    raw.round().clamp(-limit, limit) as i32
}
