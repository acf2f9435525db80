use std::{collections::BTreeSet, slice::Iter};

use derive_more::Deref;
use strum::{AsRefStr, EnumString};
use uuid::Uuid;

use crate::{Name, ReadError};

#[allow(async_fn_in_trait)]
pub trait CatalogRepository {
    /// Exercises of the given muscle groups in catalog order.
    async fn get_exercises(
        &self,
        muscle_groups: &BTreeSet<MuscleGroup>,
    ) -> Result<Vec<ExerciseRecord>, ReadError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseRecord {
    pub id: ExerciseID,
    pub name: Name,
    pub muscle_group: MuscleGroup,
    /// An empty set means the exercise needs no equipment.
    pub required_equipment: BTreeSet<Equipment>,
    /// Movement patterns used to exclude exercises for injuries.
    pub patterns: BTreeSet<MovementPattern>,
}

impl ExerciseRecord {
    #[must_use]
    pub fn is_bodyweight(&self) -> bool {
        self.required_equipment
            .iter()
            .all(|e| *e == Equipment::Bodyweight)
    }

    /// Whether the exercise can be performed with `available` equipment.
    /// Bodyweight is always available.
    #[must_use]
    pub fn is_performable_with(&self, available: &BTreeSet<Equipment>) -> bool {
        self.required_equipment
            .iter()
            .all(|e| *e == Equipment::Bodyweight || available.contains(e))
    }

    #[must_use]
    pub fn involves_any(&self, patterns: &BTreeSet<MovementPattern>) -> bool {
        !self.patterns.is_disjoint(patterns)
    }
}

#[derive(Deref, Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct ExerciseID(Uuid);

impl From<Uuid> for ExerciseID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for ExerciseID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

#[derive(
    AsRefStr, EnumString, Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum MuscleGroup {
    Chest,
    Back,
    Shoulders,
    Biceps,
    Triceps,
    Legs,
    Core,
}

impl Property for MuscleGroup {
    fn iter() -> Iter<'static, MuscleGroup> {
        static MUSCLE_GROUPS: [MuscleGroup; 7] = [
            MuscleGroup::Chest,
            MuscleGroup::Back,
            MuscleGroup::Shoulders,
            MuscleGroup::Biceps,
            MuscleGroup::Triceps,
            MuscleGroup::Legs,
            MuscleGroup::Core,
        ];
        MUSCLE_GROUPS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            MuscleGroup::Chest => "Chest",
            MuscleGroup::Back => "Back",
            MuscleGroup::Shoulders => "Shoulders",
            MuscleGroup::Biceps => "Biceps",
            MuscleGroup::Triceps => "Triceps",
            MuscleGroup::Legs => "Legs",
            MuscleGroup::Core => "Core",
        }
    }
}

#[derive(
    AsRefStr, EnumString, Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Equipment {
    Bodyweight,
    Barbell,
    Bench,
    Cable,
    Dumbbell,
    Kettlebell,
    Machine,
    ParallelBars,
    PullUpBar,
    ResistanceBand,
    TrapBar,
}

impl Property for Equipment {
    fn iter() -> Iter<'static, Equipment> {
        static EQUIPMENT: [Equipment; 11] = [
            Equipment::Bodyweight,
            Equipment::Barbell,
            Equipment::Bench,
            Equipment::Cable,
            Equipment::Dumbbell,
            Equipment::Kettlebell,
            Equipment::Machine,
            Equipment::ParallelBars,
            Equipment::PullUpBar,
            Equipment::ResistanceBand,
            Equipment::TrapBar,
        ];
        EQUIPMENT.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Equipment::Bodyweight => "Bodyweight",
            Equipment::Barbell => "Barbell",
            Equipment::Bench => "Bench",
            Equipment::Cable => "Cable",
            Equipment::Dumbbell => "Dumbbell",
            Equipment::Kettlebell => "Kettlebell",
            Equipment::Machine => "Machine",
            Equipment::ParallelBars => "Parallel Bars",
            Equipment::PullUpBar => "Pull Up Bar",
            Equipment::ResistanceBand => "Resistance Band",
            Equipment::TrapBar => "Trap Bar",
        }
    }
}

#[derive(
    AsRefStr, EnumString, Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum MovementPattern {
    OverheadPress,
    LateralRaise,
    BenchPress,
    Dip,
    SquatPattern,
    LungePattern,
    Jump,
    HipHinge,
    Row,
    PullUp,
    Curl,
    TricepsExtension,
    SpinalFlexion,
}

impl Property for MovementPattern {
    fn iter() -> Iter<'static, MovementPattern> {
        static PATTERNS: [MovementPattern; 13] = [
            MovementPattern::OverheadPress,
            MovementPattern::LateralRaise,
            MovementPattern::BenchPress,
            MovementPattern::Dip,
            MovementPattern::SquatPattern,
            MovementPattern::LungePattern,
            MovementPattern::Jump,
            MovementPattern::HipHinge,
            MovementPattern::Row,
            MovementPattern::PullUp,
            MovementPattern::Curl,
            MovementPattern::TricepsExtension,
            MovementPattern::SpinalFlexion,
        ];
        PATTERNS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            MovementPattern::OverheadPress => "Overhead Press",
            MovementPattern::LateralRaise => "Lateral Raise",
            MovementPattern::BenchPress => "Bench Press",
            MovementPattern::Dip => "Dip",
            MovementPattern::SquatPattern => "Squat",
            MovementPattern::LungePattern => "Lunge",
            MovementPattern::Jump => "Jump",
            MovementPattern::HipHinge => "Hip Hinge",
            MovementPattern::Row => "Row",
            MovementPattern::PullUp => "Pull Up",
            MovementPattern::Curl => "Curl",
            MovementPattern::TricepsExtension => "Triceps Extension",
            MovementPattern::SpinalFlexion => "Spinal Flexion",
        }
    }
}

pub trait Property: Clone + Copy + Sized {
    fn iter() -> Iter<'static, Self>;
    fn name(self) -> &'static str;
}
