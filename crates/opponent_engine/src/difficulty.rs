//! Difficulty levels and search limits
//!
//! Opponent strength is controlled by two limits: a wall-clock budget and a
//! maximum search depth. Iterative deepening stops at whichever comes first.
//!
//! | Difficulty | Time/Move | Max Depth |
//! |------------|-----------|-----------|
//! | Easy       | 1.5s      | 2 ply     |
//! | Medium     | 3.0s      | 3 ply     |
//! | Hard       | 5.0s      | 4 ply     |
//!
//! The budget is only checked between depths, so a move can take longer than
//! its budget when the last depth started just before the deadline.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Opponent difficulty levels corresponding to search time and depth
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Easy - 1.5 seconds per move, depth 2
    ///
    /// Sees direct captures and one reply. Good for new players.
    Easy,

    /// Medium - 3.0 seconds per move, depth 3
    #[default]
    Medium,

    /// Hard - 5.0 seconds per move, depth 4
    ///
    /// Finds short tactics; quiescence extends every line past the horizon
    /// until captures and checks run out.
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Get the time allocation for this difficulty level
    ///
    /// Time in seconds:
    /// - Easy: 1.5s
    /// - Medium: 3.0s
    /// - Hard: 5.0s
    pub fn seconds_per_move(self) -> f32 {
        match self {
            Difficulty::Easy => 1.5,
            Difficulty::Medium => 3.0,
            Difficulty::Hard => 5.0,
        }
    }

    /// Deepest iteration the driver will start
    pub fn max_depth(self) -> u32 {
        match self {
            Difficulty::Easy => 2,
            Difficulty::Medium => 3,
            Difficulty::Hard => 4,
        }
    }

    pub fn time_budget(self) -> Duration {
        Duration::from_secs_f32(self.seconds_per_move())
    }

    pub fn limits(self) -> SearchLimits {
        SearchLimits {
            time_budget: self.time_budget(),
            max_depth: self.max_depth(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!("unknown difficulty '{other}' (expected easy, medium or hard)")),
        }
    }
}

/// Bounds for one iterative-deepening run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchLimits {
    /// Elapsed time after which no further depth is started
    pub time_budget: Duration,
    /// Deepest iteration; depth 1 always runs even if this is 0
    pub max_depth: u32,
}

impl SearchLimits {
    pub fn new(time_budget: Duration, max_depth: u32) -> Self {
        Self {
            time_budget,
            max_depth,
        }
    }
}

impl From<Difficulty> for SearchLimits {
    fn from(difficulty: Difficulty) -> Self {
        difficulty.limits()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_time_allocation() {
        //! Verifies difficulty time allocations are correct
        assert_eq!(Difficulty::Easy.seconds_per_move(), 1.5);
        assert_eq!(Difficulty::Medium.seconds_per_move(), 3.0);
        assert_eq!(Difficulty::Hard.seconds_per_move(), 5.0);
        assert_eq!(Difficulty::Hard.time_budget(), Duration::from_secs(5));
    }

    #[test]
    fn test_difficulty_depths() {
        let depths: Vec<u32> = Difficulty::ALL.iter().map(|d| d.max_depth()).collect();
        assert_eq!(depths, vec![2, 3, 4]);
    }

    #[test]
    fn test_limits_from_difficulty() {
        let limits = SearchLimits::from(Difficulty::Easy);
        assert_eq!(limits.max_depth, 2);
        assert_eq!(limits.time_budget, Duration::from_millis(1500));
    }

    #[test]
    fn test_parse_and_display() {
        for difficulty in Difficulty::ALL {
            assert_eq!(difficulty.to_string().parse::<Difficulty>(), Ok(difficulty));
        }
        assert_eq!("HARD".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert!("grandmaster".parse::<Difficulty>().is_err());
    }

    #[test]
    fn test_default_is_medium() {
        assert_eq!(Difficulty::default(), Difficulty::Medium);
    }
}
