//! Per-game configuration.
//!
//! Only the opponent tier affects play. The seed controls reproducibility;
//! the reply delay and hint window are presentation timings for the board UI.

use std::str::FromStr;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::tier::Tier;
use crate::errors::{ChessError, ChessResult};

pub(crate) const HINT_SEED_SALT: u64 = 0xA5A5_5A5A_0123_4567;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub tier: Tier,
    /// `None` seeds from OS entropy.
    pub seed: Option<u64>,
    /// Cosmetic pause before the engine's reply is shown.
    pub engine_reply_delay: Duration,
    /// How long a hint stays highlighted.
    pub hint_window: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tier: Tier::default(),
            seed: None,
            engine_reply_delay: Duration::from_millis(500),
            hint_window: Duration::from_secs(2),
        }
    }
}

impl GameConfig {
    pub fn with_tier(mut self, tier: Tier) -> Self {
        self.tier = tier;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_engine_reply_delay(mut self, delay: Duration) -> Self {
        self.engine_reply_delay = delay;
        self
    }

    pub fn with_hint_window(mut self, window: Duration) -> Self {
        self.hint_window = window;
        self
    }

    /// Apply `--tier` and `--seed` from a command line.
    pub fn from_args(args: &[String]) -> ChessResult<Self> {
        let mut config = Self::default();
        if let Some(tier) = parse_flag::<String>(args, "--tier")? {
            config = config.with_tier(tier.parse::<Tier>()?);
        }
        if let Some(seed) = parse_flag::<u64>(args, "--seed")? {
            config = config.with_seed(seed);
        }
        Ok(config)
    }

    pub fn engine_rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }

    pub fn hint_rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed ^ HINT_SEED_SALT),
            None => StdRng::from_os_rng(),
        }
    }
}

/// Value following `flag`, parsed as `T`. `Ok(None)` when the flag is absent;
/// a flag without a value or with an unparsable one is an error.
pub fn parse_flag<T: FromStr>(args: &[String], flag: &str) -> ChessResult<Option<T>> {
    let Some(idx) = args.iter().position(|a| a == flag) else {
        return Ok(None);
    };
    let invalid = |value: &str| ChessError::InvalidArgument {
        flag: flag.to_owned(),
        value: value.to_owned(),
    };
    let value = args.get(idx + 1).ok_or_else(|| invalid(""))?;
    value.parse::<T>().map(Some).map_err(|_| invalid(value))
}
