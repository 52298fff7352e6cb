//! Named difficulties and their binding to a search algorithm and depth.

use serde::{Deserialize, Serialize};

use super::search::Algorithm;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Expert,
}

/// The algorithm/depth pair a difficulty resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchSpec {
    pub algorithm: Algorithm,
    pub depth: u32,
}

impl Difficulty {
    pub const DEFAULT: Difficulty = Difficulty::Medium;

    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Expert,
    ];

    /// Parse a wire-format difficulty name. Unrecognized names recover to
    /// the default rather than erroring.
    pub fn from_name(name: &str) -> Difficulty {
        match name {
            "easy" => Difficulty::Easy,
            "medium" => Difficulty::Medium,
            "hard" => Difficulty::Hard,
            "expert" => Difficulty::Expert,
            _ => Difficulty::DEFAULT,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::Expert => "expert",
        }
    }

    /// Canonical binding. Easy is implemented as a one-ply negamax (a
    /// greedy/defensive heuristic move) rather than a pure random choice.
    pub fn default_spec(self) -> SearchSpec {
        match self {
            Difficulty::Easy => SearchSpec {
                algorithm: Algorithm::Negamax,
                depth: 1,
            },
            Difficulty::Medium => SearchSpec {
                algorithm: Algorithm::Negamax,
                depth: 2,
            },
            Difficulty::Hard => SearchSpec {
                algorithm: Algorithm::Negascout,
                depth: 6,
            },
            Difficulty::Expert => SearchSpec {
                algorithm: Algorithm::Negascout,
                depth: 8,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name() {
        assert_eq!(Difficulty::from_name("easy"), Difficulty::Easy);
        assert_eq!(Difficulty::from_name("expert"), Difficulty::Expert);
    }

    #[test]
    fn test_unknown_name_falls_back_to_default() {
        assert_eq!(Difficulty::from_name("nightmare"), Difficulty::Medium);
        assert_eq!(Difficulty::from_name(""), Difficulty::Medium);
    }

    #[test]
    fn test_default_depths_increase_with_difficulty() {
        let depths: Vec<u32> = Difficulty::ALL
            .iter()
            .map(|d| d.default_spec().depth)
            .collect();
        assert!(depths.windows(2).all(|w| w[0] <= w[1]), "{depths:?}");
    }

    #[test]
    fn test_default_binding() {
        assert_eq!(Difficulty::Medium.default_spec().algorithm, Algorithm::Negamax);
        assert_eq!(Difficulty::Hard.default_spec().algorithm, Algorithm::Negascout);
        assert_eq!(Difficulty::Expert.default_spec().algorithm, Algorithm::Negascout);
    }
}
