//! Opponent strength tiers.

use std::fmt;
use std::str::FromStr;

use rand::rngs::StdRng;

use crate::engines::engine_capture_biased::CaptureBiasedEngine;
use crate::engines::engine_positional::PositionalEngine;
use crate::engines::engine_random::RandomEngine;
use crate::engines::engine_trait::Engine;
use crate::errors::ChessError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tier {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::Easy, Tier::Medium, Tier::Hard];

    pub fn build_engine(self, rng: StdRng) -> Box<dyn Engine> {
        match self {
            Tier::Easy => Box::new(RandomEngine::new(rng)),
            Tier::Medium => Box::new(CaptureBiasedEngine::new(rng)),
            Tier::Hard => Box::new(PositionalEngine::new(rng)),
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tier::Easy => write!(f, "easy"),
            Tier::Medium => write!(f, "medium"),
            Tier::Hard => write!(f, "hard"),
        }
    }
}

impl FromStr for Tier {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Tier::Easy),
            "medium" => Ok(Tier::Medium),
            "hard" => Ok(Tier::Hard),
            _ => Err(ChessError::InvalidTier(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Tier;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("Hard".parse::<Tier>().expect("hard"), Tier::Hard);
        assert_eq!(" easy ".parse::<Tier>().expect("easy"), Tier::Easy);
        assert!("grandmaster".parse::<Tier>().is_err());
    }

    #[test]
    fn display_round_trips_through_parse() {
        for tier in Tier::ALL {
            assert_eq!(tier.to_string().parse::<Tier>().expect("round trip"), tier);
        }
    }

    #[test]
    fn each_tier_builds_its_engine() {
        let names: Vec<String> = Tier::ALL
            .iter()
            .map(|t| t.build_engine(StdRng::seed_from_u64(1)).name().to_owned())
            .collect();
        assert_eq!(
            names,
            vec!["Random (easy)", "Capture-biased (medium)", "Positional (hard)"]
        );
    }
}
