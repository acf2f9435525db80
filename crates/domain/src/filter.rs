use std::collections::{BTreeMap, BTreeSet};

use log::debug;

use crate::{
    ClientProfile, Equipment, ExerciseRecord, Injury, MovementPattern, MuscleGroup, Property,
};

/// Maps injury tags to the movement patterns that are unsafe for them.
#[derive(Debug, Clone, PartialEq)]
pub struct Contraindications(BTreeMap<Injury, BTreeSet<MovementPattern>>);

impl Contraindications {
    #[must_use]
    pub fn new(map: BTreeMap<Injury, BTreeSet<MovementPattern>>) -> Self {
        Self(map)
    }

    /// Union of the patterns contraindicated by any of `injuries`.
    #[must_use]
    pub fn unsafe_patterns(&self, injuries: &BTreeSet<Injury>) -> BTreeSet<MovementPattern> {
        let mut patterns = BTreeSet::new();
        for injury in injuries {
            match self.0.get(injury) {
                Some(p) => patterns.extend(p.iter().copied()),
                None => debug!("no contraindications defined for injury \"{injury}\""),
            }
        }
        patterns
    }

    pub fn insert(&mut self, injury: Injury, patterns: BTreeSet<MovementPattern>) {
        self.0.insert(injury, patterns);
    }
}

impl Default for Contraindications {
    fn default() -> Self {
        let entry = |tag: &str, patterns: &[MovementPattern]| {
            Injury::new(tag)
                .ok()
                .map(|injury| (injury, patterns.iter().copied().collect::<BTreeSet<_>>()))
        };
        Self(
            [
                entry(
                    "shoulder",
                    &[MovementPattern::OverheadPress, MovementPattern::LateralRaise],
                ),
                entry(
                    "knee",
                    &[
                        MovementPattern::SquatPattern,
                        MovementPattern::LungePattern,
                        MovementPattern::Jump,
                    ],
                ),
                entry("elbow", &[MovementPattern::TricepsExtension]),
                entry("back", &[MovementPattern::HipHinge, MovementPattern::Row]),
            ]
            .into_iter()
            .flatten()
            .collect(),
        )
    }
}

/// Equipment and injury constraints of a single client.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ExerciseFilter {
    pub equipment: BTreeSet<Equipment>,
    pub unsafe_patterns: BTreeSet<MovementPattern>,
}

impl ExerciseFilter {
    #[must_use]
    pub fn new(profile: &ClientProfile, contraindications: &Contraindications) -> Self {
        Self {
            equipment: profile.equipment_access.clone(),
            unsafe_patterns: contraindications.unsafe_patterns(&profile.injuries),
        }
    }

    #[must_use]
    pub fn accepts(&self, exercise: &ExerciseRecord) -> bool {
        exercise.is_performable_with(&self.equipment)
            && !exercise.involves_any(&self.unsafe_patterns)
    }

    /// Keeps the acceptable exercises in their original order.
    #[must_use]
    pub fn exercises<'a>(
        &self,
        exercises: impl Iterator<Item = &'a ExerciseRecord>,
    ) -> Vec<&'a ExerciseRecord> {
        exercises
            .filter(|e| {
                let accepted = self.accepts(e);
                if !accepted {
                    self.log_exclusion(e);
                }
                accepted
            })
            .collect()
    }

    fn log_exclusion(&self, exercise: &ExerciseRecord) {
        let missing = exercise
            .required_equipment
            .iter()
            .filter(|e| **e != Equipment::Bodyweight && !self.equipment.contains(*e))
            .map(|e| e.name())
            .collect::<Vec<_>>();
        if !missing.is_empty() {
            debug!("excluding {}, missing {}", exercise.name, missing.join(", "));
        }
        let patterns = exercise
            .patterns
            .intersection(&self.unsafe_patterns)
            .map(|p| p.name())
            .collect::<Vec<_>>();
        if !patterns.is_empty() {
            debug!("excluding {}, unsafe {}", exercise.name, patterns.join(", "));
        }
    }
}

#[must_use]
pub fn filter<'a>(
    candidates: &'a [ExerciseRecord],
    injuries: &BTreeSet<Injury>,
    equipment: &BTreeSet<Equipment>,
    contraindications: &Contraindications,
) -> Vec<&'a ExerciseRecord> {
    ExerciseFilter {
        equipment: equipment.clone(),
        unsafe_patterns: contraindications.unsafe_patterns(injuries),
    }
    .exercises(candidates.iter())
}

/// Buckets exercises by their muscle group, keeping the order within each
/// bucket.
#[must_use]
pub fn group_by_muscle<'a>(
    exercises: impl IntoIterator<Item = &'a ExerciseRecord>,
) -> BTreeMap<MuscleGroup, Vec<&'a ExerciseRecord>> {
    let mut groups: BTreeMap<MuscleGroup, Vec<&'a ExerciseRecord>> = BTreeMap::new();
    for exercise in exercises {
        groups.entry(exercise.muscle_group).or_default().push(exercise);
    }
    groups
}
