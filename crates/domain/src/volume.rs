use std::{collections::BTreeMap, fmt, str::FromStr};

use chrono::Duration;
use log::debug;

use crate::{Goal, Property};

/// Repetitions per set, either an exact count or an inclusive range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reps {
    Fixed(u32),
    Range(u32, u32),
}

impl Reps {
    pub fn range(min: u32, max: u32) -> Result<Self, RepsError> {
        if min == 0 || max < min {
            return Err(RepsError::InvalidRange(min, max));
        }
        if min == max {
            return Ok(Reps::Fixed(min));
        }
        Ok(Reps::Range(min, max))
    }

    /// Upper bound, used for estimating the duration of a set.
    #[must_use]
    pub fn max(self) -> u32 {
        match self {
            Reps::Fixed(reps) | Reps::Range(_, reps) => reps,
        }
    }
}

impl fmt::Display for Reps {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Reps::Fixed(reps) => write!(f, "{reps}"),
            Reps::Range(min, max) => write!(f, "{min}-{max}"),
        }
    }
}

impl FromStr for Reps {
    type Err = RepsError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let parse = |v: &str| {
            v.trim()
                .parse::<u32>()
                .map_err(|_| RepsError::ParseError(value.to_string()))
        };
        match value.split_once('-') {
            Some((min, max)) => Reps::range(parse(min)?, parse(max)?),
            None => match parse(value)? {
                0 => Err(RepsError::InvalidRange(0, 0)),
                reps => Ok(Reps::Fixed(reps)),
            },
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RepsError {
    #[error("Reps must be a number or a range like \"8-12\" ({0})")]
    ParseError(String),
    #[error("Reps range must be positive and ascending ({0}-{1})")]
    InvalidRange(u32, u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VolumeConfig {
    pub sets: u32,
    pub reps: Reps,
    pub rest_seconds: u32,
}

impl VolumeConfig {
    pub const STRENGTH: VolumeConfig = VolumeConfig {
        sets: 5,
        reps: Reps::Fixed(5),
        rest_seconds: 180,
    };
    pub const HYPERTROPHY: VolumeConfig = VolumeConfig {
        sets: 4,
        reps: Reps::Range(8, 12),
        rest_seconds: 120,
    };
    pub const FAT_LOSS: VolumeConfig = VolumeConfig {
        sets: 3,
        reps: Reps::Range(12, 15),
        rest_seconds: 90,
    };
    pub const MAINTENANCE: VolumeConfig = VolumeConfig {
        sets: 3,
        reps: Reps::Range(8, 12),
        rest_seconds: 120,
    };

    #[must_use]
    pub fn rest(&self) -> Duration {
        Duration::seconds(i64::from(self.rest_seconds))
    }
}

/// Goal to volume lookup table.
#[derive(Debug, Clone, PartialEq)]
pub struct VolumePolicy(BTreeMap<Goal, VolumeConfig>);

impl VolumePolicy {
    #[must_use]
    pub fn new(table: BTreeMap<Goal, VolumeConfig>) -> Self {
        Self(table)
    }

    /// Goals without an entry get the maintenance volume.
    #[must_use]
    pub fn volume_for(&self, goal: Goal) -> VolumeConfig {
        if let Some(volume) = self.0.get(&goal) {
            return *volume;
        }
        debug!("no volume defined for {}, using maintenance", goal.name());
        self.0
            .get(&Goal::Maintenance)
            .copied()
            .unwrap_or(VolumeConfig::MAINTENANCE)
    }

    pub fn insert(&mut self, goal: Goal, volume: VolumeConfig) {
        self.0.insert(goal, volume);
    }

    pub fn remove(&mut self, goal: Goal) -> Option<VolumeConfig> {
        self.0.remove(&goal)
    }
}

impl Default for VolumePolicy {
    fn default() -> Self {
        Self(BTreeMap::from([
            (Goal::Strength, VolumeConfig::STRENGTH),
            (Goal::Hypertrophy, VolumeConfig::HYPERTROPHY),
            (Goal::FatLoss, VolumeConfig::FAT_LOSS),
            (Goal::Maintenance, VolumeConfig::MAINTENANCE),
        ]))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("5", Ok(Reps::Fixed(5)))]
    #[case("8-12", Ok(Reps::Range(8, 12)))]
    #[case(" 12 - 15 ", Ok(Reps::Range(12, 15)))]
    #[case("10-10", Ok(Reps::Fixed(10)))]
    #[case("12-8", Err(RepsError::InvalidRange(12, 8)))]
    #[case("0", Err(RepsError::InvalidRange(0, 0)))]
    #[case("0-5", Err(RepsError::InvalidRange(0, 5)))]
    #[case("many", Err(RepsError::ParseError("many".to_string())))]
    #[case("8-", Err(RepsError::ParseError("8-".to_string())))]
    fn test_reps_from_str(#[case] value: &str, #[case] expected: Result<Reps, RepsError>) {
        assert_eq!(value.parse::<Reps>(), expected);
    }

    #[rstest]
    #[case(Reps::Fixed(5), "5")]
    #[case(Reps::Range(8, 12), "8-12")]
    fn test_reps_display(#[case] reps: Reps, #[case] expected: &str) {
        assert_eq!(reps.to_string(), expected);
    }

    #[test]
    fn test_reps_max() {
        assert_eq!(Reps::Fixed(5).max(), 5);
        assert_eq!(Reps::Range(8, 12).max(), 12);
    }

    #[rstest]
    #[case(Goal::Strength, VolumeConfig { sets: 5, reps: Reps::Fixed(5), rest_seconds: 180 })]
    #[case(Goal::Hypertrophy, VolumeConfig { sets: 4, reps: Reps::Range(8, 12), rest_seconds: 120 })]
    #[case(Goal::FatLoss, VolumeConfig { sets: 3, reps: Reps::Range(12, 15), rest_seconds: 90 })]
    #[case(Goal::Maintenance, VolumeConfig { sets: 3, reps: Reps::Range(8, 12), rest_seconds: 120 })]
    #[case(Goal::Endurance, VolumeConfig::MAINTENANCE)]
    #[case(Goal::Recomposition, VolumeConfig::MAINTENANCE)]
    fn test_volume_policy_volume_for(#[case] goal: Goal, #[case] expected: VolumeConfig) {
        assert_eq!(VolumePolicy::default().volume_for(goal), expected);
    }

    #[test]
    fn test_volume_policy_volume_for_custom_maintenance() {
        let custom = VolumeConfig {
            sets: 2,
            reps: Reps::Range(10, 12),
            rest_seconds: 60,
        };
        let mut policy = VolumePolicy::default();
        policy.insert(Goal::Maintenance, custom);
        assert_eq!(policy.volume_for(Goal::Endurance), custom);
    }

    #[test]
    fn test_volume_policy_volume_for_empty_table() {
        let policy = VolumePolicy::new(BTreeMap::new());
        assert_eq!(policy.volume_for(Goal::Strength), VolumeConfig::MAINTENANCE);
    }

    #[test]
    fn test_volume_policy_remove() {
        let mut policy = VolumePolicy::default();
        assert_eq!(policy.remove(Goal::Strength), Some(VolumeConfig::STRENGTH));
        assert_eq!(policy.volume_for(Goal::Strength), VolumeConfig::MAINTENANCE);
    }

    #[test]
    fn test_volume_config_rest() {
        assert_eq!(VolumeConfig::STRENGTH.rest(), Duration::minutes(3));
    }
}
