use std::collections::{BTreeMap, BTreeSet};

use log::debug;
use strum::{AsRefStr, Display, EnumString};

use crate::{FitnessLevel, MuscleGroup, Property};

#[derive(
    AsRefStr, Display, EnumString, Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum SplitArchetype {
    FullBody,
    UpperLower,
    PushPullLegs,
    PushPullLegsRest,
    PushPullLegsLegs,
}

/// One training day of a split: its label and the number of exercises
/// taken from each muscle group, in training order.
#[derive(Debug, PartialEq, Eq)]
pub struct DayTemplate {
    pub label: &'static str,
    pub buckets: &'static [(MuscleGroup, usize)],
}

const FULL_BODY: DayTemplate = DayTemplate {
    label: "full_body",
    buckets: &[
        (MuscleGroup::Legs, 1),
        (MuscleGroup::Chest, 1),
        (MuscleGroup::Back, 1),
        (MuscleGroup::Shoulders, 1),
        (MuscleGroup::Biceps, 1),
        (MuscleGroup::Triceps, 1),
    ],
};

const UPPER: DayTemplate = DayTemplate {
    label: "upper",
    buckets: &[
        (MuscleGroup::Chest, 2),
        (MuscleGroup::Back, 2),
        (MuscleGroup::Shoulders, 1),
        (MuscleGroup::Biceps, 1),
    ],
};

const LOWER: DayTemplate = DayTemplate {
    label: "lower",
    buckets: &[(MuscleGroup::Legs, 4), (MuscleGroup::Core, 2)],
};

const PUSH: DayTemplate = DayTemplate {
    label: "push",
    buckets: &[
        (MuscleGroup::Chest, 2),
        (MuscleGroup::Shoulders, 2),
        (MuscleGroup::Triceps, 2),
    ],
};

const PULL: DayTemplate = DayTemplate {
    label: "pull",
    buckets: &[
        (MuscleGroup::Back, 3),
        (MuscleGroup::Biceps, 2),
        (MuscleGroup::Core, 1),
    ],
};

const LEGS: DayTemplate = DayTemplate {
    label: "legs",
    buckets: &[(MuscleGroup::Legs, 4), (MuscleGroup::Core, 2)],
};

impl SplitArchetype {
    /// Day templates of the split, repeated to fill the training week.
    ///
    /// Rest days are not part of the rotation, so the rest day variant of
    /// push/pull/legs trains the same days as the plain one.
    #[must_use]
    pub fn rotation(self) -> &'static [DayTemplate] {
        match self {
            SplitArchetype::FullBody => &[FULL_BODY],
            SplitArchetype::UpperLower => &[UPPER, LOWER],
            SplitArchetype::PushPullLegs | SplitArchetype::PushPullLegsRest => &[PUSH, PULL, LEGS],
            SplitArchetype::PushPullLegsLegs => &[PUSH, PULL, LEGS, LEGS],
        }
    }

    /// Labeled days of one training week.
    ///
    /// The rotation is repeated until `training_days` days are filled. A
    /// label that occurs more than once in the week is numbered by
    /// occurrence (`push_1`, `push_2`).
    #[must_use]
    pub fn week(self, training_days: u8) -> Vec<(String, &'static DayTemplate)> {
        let week = self
            .rotation()
            .iter()
            .cycle()
            .take(usize::from(training_days))
            .collect::<Vec<_>>();

        let mut totals: BTreeMap<&str, usize> = BTreeMap::new();
        for day in &week {
            *totals.entry(day.label).or_default() += 1;
        }

        let mut seen: BTreeMap<&str, usize> = BTreeMap::new();
        week.into_iter()
            .map(|day| {
                let occurrence = seen.entry(day.label).or_default();
                *occurrence += 1;
                let label = if totals.get(day.label).copied().unwrap_or_default() > 1 {
                    format!("{}_{occurrence}", day.label)
                } else {
                    day.label.to_string()
                };
                (label, day)
            })
            .collect()
    }

    #[must_use]
    pub fn muscle_groups(self) -> BTreeSet<MuscleGroup> {
        self.rotation()
            .iter()
            .flat_map(|day| day.buckets.iter().map(|(group, _)| *group))
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Split {
    pub archetype: SplitArchetype,
    pub training_days: u8,
}

impl Split {
    #[must_use]
    pub fn days(&self) -> Vec<(String, &'static DayTemplate)> {
        self.archetype.week(self.training_days)
    }
}

/// Split archetypes by fitness level and training days per week.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitTable(BTreeMap<FitnessLevel, BTreeMap<u8, SplitArchetype>>);

impl SplitTable {
    pub const FALLBACK_TRAINING_DAYS: u8 = 3;

    #[must_use]
    pub fn new(table: BTreeMap<FitnessLevel, BTreeMap<u8, SplitArchetype>>) -> Self {
        Self(table)
    }

    pub fn insert(&mut self, fitness_level: FitnessLevel, days: u8, archetype: SplitArchetype) {
        self.0
            .entry(fitness_level)
            .or_default()
            .insert(days, archetype);
    }

    /// Select the split for a client. Never fails.
    ///
    /// Missing entries are resolved in this order:
    ///
    ///  1. the entry of the same level with the nearest number of days,
    ///     preferring fewer days on a tie,
    ///  2. a full body split for the requested days if the level has no
    ///     entries,
    ///  3. a full body split with three days if the requested days are
    ///     outside of 1 to 7.
    #[must_use]
    pub fn select(&self, fitness_level: FitnessLevel, days_per_week: u8) -> Split {
        if !(1..=7).contains(&days_per_week) {
            debug!("invalid number of training days ({days_per_week}), using full body split");
            return Split {
                archetype: SplitArchetype::FullBody,
                training_days: Self::FALLBACK_TRAINING_DAYS,
            };
        }

        let Some(by_days) = self.0.get(&fitness_level) else {
            debug!(
                "no splits defined for {}, using full body split",
                fitness_level.name()
            );
            return Split {
                archetype: SplitArchetype::FullBody,
                training_days: days_per_week,
            };
        };

        if let Some(archetype) = by_days.get(&days_per_week) {
            return Split {
                archetype: *archetype,
                training_days: days_per_week,
            };
        }

        match by_days
            .iter()
            .min_by_key(|(days, _)| days.abs_diff(days_per_week))
        {
            Some((days, archetype)) => {
                debug!(
                    "no split defined for {} with {days_per_week} days, using {days} days",
                    fitness_level.name()
                );
                Split {
                    archetype: *archetype,
                    training_days: days_per_week,
                }
            }
            None => Split {
                archetype: SplitArchetype::FullBody,
                training_days: days_per_week,
            },
        }
    }
}

impl Default for SplitTable {
    fn default() -> Self {
        Self(BTreeMap::from([
            (
                FitnessLevel::Beginner,
                BTreeMap::from([
                    (2, SplitArchetype::FullBody),
                    (3, SplitArchetype::FullBody),
                    (4, SplitArchetype::UpperLower),
                ]),
            ),
            (
                FitnessLevel::Intermediate,
                BTreeMap::from([
                    (3, SplitArchetype::PushPullLegs),
                    (4, SplitArchetype::PushPullLegs),
                    (5, SplitArchetype::PushPullLegsRest),
                    (6, SplitArchetype::PushPullLegsLegs),
                ]),
            ),
            (
                FitnessLevel::Advanced,
                BTreeMap::from([
                    (4, SplitArchetype::PushPullLegs),
                    (5, SplitArchetype::PushPullLegsLegs),
                    (6, SplitArchetype::PushPullLegsLegs),
                ]),
            ),
        ]))
    }
}
