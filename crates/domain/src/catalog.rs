use std::collections::BTreeSet;

use log::warn;

use crate::{
    CatalogRepository, Equipment, ExerciseID, ExerciseRecord, MovementPattern, MuscleGroup, Name,
    ReadError,
};

/// The built-in exercise catalog.
#[derive(Debug, Default, Clone, Copy)]
pub struct Catalog;

impl CatalogRepository for Catalog {
    async fn get_exercises(
        &self,
        muscle_groups: &BTreeSet<MuscleGroup>,
    ) -> Result<Vec<ExerciseRecord>, ReadError> {
        Ok(EXERCISES
            .iter()
            .filter(|e| muscle_groups.contains(&e.muscle_group))
            .cloned()
            .collect())
    }
}

#[derive(Clone)]
struct BaseExercise {
    pub name: &'static str,
    pub muscle_group: MuscleGroup,
    pub equipment: &'static [Equipment],
    pub patterns: &'static [MovementPattern],
    pub variants: &'static [ExerciseVariant],
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct ExerciseVariant {
    pub name: &'static str,
    pub equipment: Option<&'static [Equipment]>,
    pub patterns: Option<&'static [MovementPattern]>,
}

impl ExerciseVariant {
    const fn default() -> Self {
        Self {
            name: "",
            equipment: None,
            patterns: None,
        }
    }
}

/// All exercises including variants, sorted by name.
pub static EXERCISES: std::sync::LazyLock<Vec<ExerciseRecord>> = std::sync::LazyLock::new(|| {
    let mut exercises = EXERCISE_VARIANTS
        .iter()
        .map(|e| (e.name, e.muscle_group, e.equipment, e.patterns))
        .chain(EXERCISE_VARIANTS.iter().flat_map(|e| {
            e.variants.iter().map(|v| {
                (
                    v.name,
                    e.muscle_group,
                    v.equipment.unwrap_or(e.equipment),
                    v.patterns.unwrap_or(e.patterns),
                )
            })
        }))
        .collect::<Vec<_>>();
    exercises.sort_by(|a, b| a.0.cmp(b.0));
    exercises
        .into_iter()
        .zip(1_u128..)
        .filter_map(|((name, muscle_group, equipment, patterns), id)| {
            match Name::new(name) {
                Ok(name) => Some(ExerciseRecord {
                    id: ExerciseID::from(id),
                    name,
                    muscle_group,
                    required_equipment: equipment.iter().copied().collect(),
                    patterns: patterns.iter().copied().collect(),
                }),
                Err(err) => {
                    warn!("invalid exercise name \"{name}\": {err}");
                    None
                }
            }
        })
        .collect()
});

const EXERCISE_VARIANTS: [BaseExercise; 31] = [
    BaseExercise {
        name: "Band Pull Apart",
        muscle_group: MuscleGroup::Back,
        equipment: &[Equipment::ResistanceBand],
        patterns: &[],
        variants: &[],
    },
    BaseExercise {
        name: "Barbell Bench Press",
        muscle_group: MuscleGroup::Chest,
        equipment: &[Equipment::Barbell, Equipment::Bench],
        patterns: &[MovementPattern::BenchPress],
        variants: &[
            ExerciseVariant {
                name: "Cable Chest Press",
                equipment: Some(&[Equipment::Cable]),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Dumbbell Bench Press",
                equipment: Some(&[Equipment::Dumbbell, Equipment::Bench]),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Dumbbell Floor Press",
                equipment: Some(&[Equipment::Dumbbell]),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Machine Chest Press",
                equipment: Some(&[Equipment::Machine]),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Barbell Curl",
        muscle_group: MuscleGroup::Biceps,
        equipment: &[Equipment::Barbell],
        patterns: &[MovementPattern::Curl],
        variants: &[
            ExerciseVariant {
                name: "Band Curl",
                equipment: Some(&[Equipment::ResistanceBand]),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Cable Curl",
                equipment: Some(&[Equipment::Cable]),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Dumbbell Curl",
                equipment: Some(&[Equipment::Dumbbell]),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Hammer Curl",
                equipment: Some(&[Equipment::Dumbbell]),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Barbell Overhead Press",
        muscle_group: MuscleGroup::Shoulders,
        equipment: &[Equipment::Barbell],
        patterns: &[MovementPattern::OverheadPress],
        variants: &[
            ExerciseVariant {
                name: "Dumbbell Shoulder Press",
                equipment: Some(&[Equipment::Dumbbell]),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Kettlebell Press",
                equipment: Some(&[Equipment::Kettlebell]),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Machine Shoulder Press",
                equipment: Some(&[Equipment::Machine]),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Barbell Row",
        muscle_group: MuscleGroup::Back,
        equipment: &[Equipment::Barbell],
        patterns: &[MovementPattern::Row],
        variants: &[
            ExerciseVariant {
                name: "Band Row",
                equipment: Some(&[Equipment::ResistanceBand]),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Cable Row",
                equipment: Some(&[Equipment::Cable]),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Dumbbell Row",
                equipment: Some(&[Equipment::Dumbbell]),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Barbell Squat",
        muscle_group: MuscleGroup::Legs,
        equipment: &[Equipment::Barbell],
        patterns: &[MovementPattern::SquatPattern],
        variants: &[
            ExerciseVariant {
                name: "Bodyweight Squat",
                equipment: Some(&[]),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Goblet Squat",
                equipment: Some(&[Equipment::Dumbbell]),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Kettlebell Goblet Squat",
                equipment: Some(&[Equipment::Kettlebell]),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Leg Press",
                equipment: Some(&[Equipment::Machine]),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Bench Dip",
        muscle_group: MuscleGroup::Triceps,
        equipment: &[Equipment::Bench],
        patterns: &[MovementPattern::Dip],
        variants: &[],
    },
    BaseExercise {
        name: "Cable Triceps Pushdown",
        muscle_group: MuscleGroup::Triceps,
        equipment: &[Equipment::Cable],
        patterns: &[MovementPattern::TricepsExtension],
        variants: &[
            ExerciseVariant {
                name: "Band Triceps Pushdown",
                equipment: Some(&[Equipment::ResistanceBand]),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Calf Raise",
        muscle_group: MuscleGroup::Legs,
        equipment: &[],
        patterns: &[],
        variants: &[
            ExerciseVariant {
                name: "Dumbbell Calf Raise",
                equipment: Some(&[Equipment::Dumbbell]),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Machine Calf Raise",
                equipment: Some(&[Equipment::Machine]),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Close Grip Push Up",
        muscle_group: MuscleGroup::Triceps,
        equipment: &[],
        patterns: &[MovementPattern::BenchPress],
        variants: &[],
    },
    BaseExercise {
        name: "Crunch",
        muscle_group: MuscleGroup::Core,
        equipment: &[],
        patterns: &[MovementPattern::SpinalFlexion],
        variants: &[
            ExerciseVariant {
                name: "Cable Crunch",
                equipment: Some(&[Equipment::Cable]),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Dead Bug",
        muscle_group: MuscleGroup::Core,
        equipment: &[],
        patterns: &[],
        variants: &[],
    },
    BaseExercise {
        name: "Deadlift",
        muscle_group: MuscleGroup::Back,
        equipment: &[Equipment::Barbell],
        patterns: &[MovementPattern::HipHinge],
        variants: &[
            ExerciseVariant {
                name: "Trap Bar Deadlift",
                equipment: Some(&[Equipment::TrapBar]),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Dip",
        muscle_group: MuscleGroup::Chest,
        equipment: &[Equipment::ParallelBars],
        patterns: &[MovementPattern::Dip],
        variants: &[],
    },
    BaseExercise {
        name: "Dumbbell Fly",
        muscle_group: MuscleGroup::Chest,
        equipment: &[Equipment::Dumbbell, Equipment::Bench],
        patterns: &[],
        variants: &[
            ExerciseVariant {
                name: "Cable Fly",
                equipment: Some(&[Equipment::Cable]),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Dumbbell Lateral Raise",
        muscle_group: MuscleGroup::Shoulders,
        equipment: &[Equipment::Dumbbell],
        patterns: &[MovementPattern::LateralRaise],
        variants: &[
            ExerciseVariant {
                name: "Band Lateral Raise",
                equipment: Some(&[Equipment::ResistanceBand]),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Cable Lateral Raise",
                equipment: Some(&[Equipment::Cable]),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Dumbbell Rear Delt Fly",
        muscle_group: MuscleGroup::Shoulders,
        equipment: &[Equipment::Dumbbell],
        patterns: &[],
        variants: &[
            ExerciseVariant {
                name: "Face Pull",
                equipment: Some(&[Equipment::Cable]),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Glute Bridge",
        muscle_group: MuscleGroup::Legs,
        equipment: &[],
        patterns: &[],
        variants: &[
            ExerciseVariant {
                name: "Barbell Hip Thrust",
                equipment: Some(&[Equipment::Barbell, Equipment::Bench]),
                patterns: Some(&[MovementPattern::HipHinge]),
            },
            ExerciseVariant {
                name: "Single Leg Glute Bridge",
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Hanging Leg Raise",
        muscle_group: MuscleGroup::Core,
        equipment: &[Equipment::PullUpBar],
        patterns: &[MovementPattern::SpinalFlexion],
        variants: &[],
    },
    BaseExercise {
        name: "Jump Squat",
        muscle_group: MuscleGroup::Legs,
        equipment: &[],
        patterns: &[MovementPattern::SquatPattern, MovementPattern::Jump],
        variants: &[],
    },
    BaseExercise {
        name: "Leg Curl",
        muscle_group: MuscleGroup::Legs,
        equipment: &[Equipment::Machine],
        patterns: &[],
        variants: &[],
    },
    BaseExercise {
        name: "Overhead Triceps Extension",
        muscle_group: MuscleGroup::Triceps,
        equipment: &[Equipment::Dumbbell],
        patterns: &[MovementPattern::TricepsExtension],
        variants: &[
            ExerciseVariant {
                name: "Barbell Skull Crusher",
                equipment: Some(&[Equipment::Barbell, Equipment::Bench]),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Pallof Press",
        muscle_group: MuscleGroup::Core,
        equipment: &[Equipment::Cable],
        patterns: &[],
        variants: &[
            ExerciseVariant {
                name: "Band Pallof Press",
                equipment: Some(&[Equipment::ResistanceBand]),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Pike Push Up",
        muscle_group: MuscleGroup::Shoulders,
        equipment: &[],
        patterns: &[MovementPattern::OverheadPress],
        variants: &[],
    },
    BaseExercise {
        name: "Plank",
        muscle_group: MuscleGroup::Core,
        equipment: &[],
        patterns: &[],
        variants: &[
            ExerciseVariant {
                name: "Side Plank",
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Pull Up",
        muscle_group: MuscleGroup::Back,
        equipment: &[Equipment::PullUpBar],
        patterns: &[MovementPattern::PullUp],
        variants: &[
            ExerciseVariant {
                name: "Chin Up",
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Lat Pulldown",
                equipment: Some(&[Equipment::Cable]),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Push Up",
        muscle_group: MuscleGroup::Chest,
        equipment: &[],
        patterns: &[MovementPattern::BenchPress],
        variants: &[
            ExerciseVariant {
                name: "Decline Push Up",
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Incline Push Up",
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Romanian Deadlift",
        muscle_group: MuscleGroup::Legs,
        equipment: &[Equipment::Barbell],
        patterns: &[MovementPattern::HipHinge],
        variants: &[
            ExerciseVariant {
                name: "Dumbbell Romanian Deadlift",
                equipment: Some(&[Equipment::Dumbbell]),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Kettlebell Swing",
                equipment: Some(&[Equipment::Kettlebell]),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Russian Twist",
        muscle_group: MuscleGroup::Core,
        equipment: &[],
        patterns: &[MovementPattern::SpinalFlexion],
        variants: &[],
    },
    BaseExercise {
        name: "Superman",
        muscle_group: MuscleGroup::Back,
        equipment: &[],
        patterns: &[],
        variants: &[],
    },
    BaseExercise {
        name: "Walking Lunge",
        muscle_group: MuscleGroup::Legs,
        equipment: &[],
        patterns: &[MovementPattern::LungePattern],
        variants: &[
            ExerciseVariant {
                name: "Bulgarian Split Squat",
                equipment: Some(&[Equipment::Bench]),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Dumbbell Lunge",
                equipment: Some(&[Equipment::Dumbbell]),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Reverse Lunge",
                ..ExerciseVariant::default()
            },
        ],
    },
];
