use std::{collections::BTreeSet, sync::LazyLock};

use spotter_domain as domain;

pub static PROFILE: LazyLock<domain::ClientProfile> = LazyLock::new(|| domain::ClientProfile {
    age: domain::Age::new(29).unwrap(),
    sex: domain::Sex::FEMALE,
    height: domain::Height::new(168.0).unwrap(),
    weight: domain::Weight::new(62.5).unwrap(),
    fitness_level: domain::FitnessLevel::Intermediate,
    goal: domain::Goal::Hypertrophy,
    days_per_week: domain::DaysPerWeek::new(4).unwrap(),
    activity_level: domain::ActivityLevel::Moderate,
    injuries: BTreeSet::from([domain::Injury::new("knee").unwrap()]),
    equipment_access: BTreeSet::from([domain::Equipment::Dumbbell, domain::Equipment::Bench]),
    allergies: BTreeSet::from([String::from("lactose")]),
});

pub static EXERCISE: LazyLock<domain::ExerciseRecord> = LazyLock::new(|| domain::ExerciseRecord {
    id: 1.into(),
    name: domain::Name::new("Goblet Squat").unwrap(),
    muscle_group: domain::MuscleGroup::Legs,
    required_equipment: BTreeSet::from([domain::Equipment::Dumbbell]),
    patterns: BTreeSet::from([domain::MovementPattern::SquatPattern]),
});

pub static EXERCISES: LazyLock<Vec<domain::ExerciseRecord>> = LazyLock::new(|| {
    vec![
        EXERCISE.clone(),
        domain::ExerciseRecord {
            id: 2.into(),
            name: domain::Name::new("Romanian Deadlift").unwrap(),
            muscle_group: domain::MuscleGroup::Legs,
            required_equipment: BTreeSet::from([domain::Equipment::Dumbbell]),
            patterns: BTreeSet::from([domain::MovementPattern::HipHinge]),
        },
        domain::ExerciseRecord {
            id: 3.into(),
            name: domain::Name::new("Push Up").unwrap(),
            muscle_group: domain::MuscleGroup::Chest,
            required_equipment: BTreeSet::new(),
            patterns: BTreeSet::from([domain::MovementPattern::BenchPress]),
        },
        domain::ExerciseRecord {
            id: 4.into(),
            name: domain::Name::new("Dumbbell Row").unwrap(),
            muscle_group: domain::MuscleGroup::Back,
            required_equipment: BTreeSet::from([
                domain::Equipment::Bench,
                domain::Equipment::Dumbbell,
            ]),
            patterns: BTreeSet::from([domain::MovementPattern::Row]),
        },
        domain::ExerciseRecord {
            id: 5.into(),
            name: domain::Name::new("Barbell Overhead Press").unwrap(),
            muscle_group: domain::MuscleGroup::Shoulders,
            required_equipment: BTreeSet::from([domain::Equipment::Barbell]),
            patterns: BTreeSet::from([domain::MovementPattern::OverheadPress]),
        },
        domain::ExerciseRecord {
            id: 6.into(),
            name: domain::Name::new("Dead Bug").unwrap(),
            muscle_group: domain::MuscleGroup::Core,
            required_equipment: BTreeSet::new(),
            patterns: BTreeSet::new(),
        },
    ]
});

pub static WORKOUT_PLAN: LazyLock<domain::WorkoutPlan> = LazyLock::new(|| domain::WorkoutPlan {
    split_type: domain::SplitArchetype::FullBody,
    weeks: 4,
    workouts: vec![domain::WorkoutDay {
        label: String::from("full_body"),
        exercises: vec![
            domain::ExerciseAssignment {
                exercise_id: 1.into(),
                name: domain::Name::new("Goblet Squat").unwrap(),
                muscle_group: domain::MuscleGroup::Legs,
                sets: 4,
                reps: domain::Reps::Range(8, 12),
                rest_seconds: 120,
                notes: String::from("Targets legs"),
            },
            domain::ExerciseAssignment {
                exercise_id: 3.into(),
                name: domain::Name::new("Push Up").unwrap(),
                muscle_group: domain::MuscleGroup::Chest,
                sets: 4,
                reps: domain::Reps::Range(8, 12),
                rest_seconds: 120,
                notes: String::from("Targets chest"),
            },
        ],
        notes: vec![String::from(
            "No core exercises available for the declared injuries and equipment",
        )],
    }],
});
