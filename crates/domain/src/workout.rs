use std::collections::{BTreeMap, BTreeSet};

use chrono::Duration;
use log::debug;
use rand::{Rng, seq::SliceRandom};

use crate::{
    ExerciseID, ExerciseRecord, MuscleGroup, Name, Property, Reps, SplitArchetype, VolumeConfig,
};

/// Assumed time under tension per repetition.
pub const SECONDS_PER_REP: u32 = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkoutPlan {
    pub split_type: SplitArchetype,
    pub weeks: u8,
    pub workouts: Vec<WorkoutDay>,
}

impl WorkoutPlan {
    #[must_use]
    pub fn day(&self, label: &str) -> Option<&WorkoutDay> {
        self.workouts.iter().find(|d| d.label == label)
    }

    #[must_use]
    pub fn labels(&self) -> Vec<&str> {
        self.workouts.iter().map(|d| d.label.as_str()).collect()
    }

    #[must_use]
    pub fn exercises(&self) -> BTreeSet<ExerciseID> {
        self.workouts
            .iter()
            .flat_map(|d| d.exercises.iter().map(|e| e.exercise_id))
            .collect()
    }

    #[must_use]
    pub fn num_sets(&self) -> u32 {
        self.workouts.iter().map(WorkoutDay::num_sets).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkoutDay {
    pub label: String,
    pub exercises: Vec<ExerciseAssignment>,
    /// Buckets that could not be filled.
    pub notes: Vec<String>,
}

impl WorkoutDay {
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.exercises
            .iter()
            .map(ExerciseAssignment::duration)
            .fold(Duration::zero(), |total, duration| {
                total.checked_add(&duration).unwrap_or(Duration::MAX)
            })
    }

    #[must_use]
    pub fn num_sets(&self) -> u32 {
        self.exercises.iter().map(|e| e.sets).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseAssignment {
    pub exercise_id: ExerciseID,
    pub name: Name,
    pub muscle_group: MuscleGroup,
    pub sets: u32,
    pub reps: Reps,
    pub rest_seconds: u32,
    pub notes: String,
}

impl ExerciseAssignment {
    fn new(exercise: &ExerciseRecord, volume: VolumeConfig) -> Self {
        Self {
            exercise_id: exercise.id,
            name: exercise.name.clone(),
            muscle_group: exercise.muscle_group,
            sets: volume.sets,
            reps: volume.reps,
            rest_seconds: volume.rest_seconds,
            notes: format!("Targets {}", exercise.muscle_group.name().to_lowercase()),
        }
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        let set = i64::from(self.reps.max()) * i64::from(SECONDS_PER_REP)
            + i64::from(self.rest_seconds);
        Duration::try_seconds(i64::from(self.sets).saturating_mul(set)).unwrap_or(Duration::MAX)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssembleOptions {
    pub max_exercises_per_day: usize,
    pub weeks: u8,
}

impl Default for AssembleOptions {
    fn default() -> Self {
        Self {
            max_exercises_per_day: 6,
            weeks: 4,
        }
    }
}

/// Populate the days of a split with exercises.
///
/// `candidates` must already be filtered for the client. Exercises of a
/// bucket are drawn at random without replacement and an exercise is used at
/// most once per day. Every bucket that ends up without exercises leaves a
/// note on the day.
pub fn assemble<R: Rng + ?Sized>(
    archetype: SplitArchetype,
    candidates: &BTreeMap<MuscleGroup, Vec<&ExerciseRecord>>,
    volume: VolumeConfig,
    num_training_days: u8,
    rng: &mut R,
    options: &AssembleOptions,
) -> WorkoutPlan {
    let workouts = archetype
        .week(num_training_days)
        .into_iter()
        .map(|(label, template)| {
            let mut exercises: Vec<ExerciseAssignment> = vec![];
            let mut notes = vec![];
            let mut used: BTreeSet<Name> = BTreeSet::new();

            for (group, count) in template.buckets {
                let group_name = group.name().to_lowercase();
                let available = candidates.get(group).map_or(&[][..], Vec::as_slice);

                if available.is_empty() {
                    notes.push(format!(
                        "No {group_name} exercises available for the declared injuries and equipment"
                    ));
                    continue;
                }

                let remaining = options
                    .max_exercises_per_day
                    .saturating_sub(exercises.len());
                if remaining == 0 {
                    debug!(
                        "{label}: skipping {group_name}, day already has {} exercises",
                        exercises.len()
                    );
                    notes.push(format!(
                        "No {group_name} exercises, limit of {} exercises per day reached",
                        options.max_exercises_per_day
                    ));
                    continue;
                }
                let wanted = (*count).min(remaining);

                let mut pool = available.to_vec();
                pool.shuffle(rng);

                let mut selected = 0;
                for exercise in pool {
                    if selected == wanted {
                        break;
                    }
                    if used.contains(&exercise.name) {
                        continue;
                    }
                    used.insert(exercise.name.clone());
                    exercises.push(ExerciseAssignment::new(exercise, volume));
                    selected += 1;
                }

                if selected == 0 {
                    notes.push(format!(
                        "No {group_name} exercises left that are not already part of the day"
                    ));
                } else if selected < wanted {
                    debug!("{label}: only {selected} of {wanted} {group_name} exercises available");
                }
            }

            WorkoutDay {
                label,
                exercises,
                notes,
            }
        })
        .collect();

    WorkoutPlan {
        split_type: archetype,
        weeks: options.weeks,
        workouts,
    }
}
