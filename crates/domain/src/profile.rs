use std::{collections::BTreeSet, fmt, slice::Iter};

use derive_more::{AsRef, Deref, Display, Into};
use strum::{AsRefStr, EnumString};

use crate::{Equipment, Property};

/// Biometric and preference data a plan is generated from.
///
/// Profiles are built by the caller from already validated parts and are
/// never modified during generation.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientProfile {
    pub age: Age,
    pub sex: Sex,
    pub height: Height,
    pub weight: Weight,
    pub fitness_level: FitnessLevel,
    pub goal: Goal,
    pub days_per_week: DaysPerWeek,
    pub activity_level: ActivityLevel,
    pub injuries: BTreeSet<Injury>,
    pub equipment_access: BTreeSet<Equipment>,
    pub allergies: BTreeSet<String>,
}

#[derive(Debug, Display, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord)]
pub struct Age(u32);

impl Age {
    pub fn new(value: u32) -> Result<Self, ProfileError> {
        if !(10..=120).contains(&value) {
            return Err(ProfileError::AgeOutOfRange(value));
        }

        Ok(Self(value))
    }
}

/// Height in centimeters.
#[derive(Debug, Display, Clone, Copy, Into, PartialEq, PartialOrd)]
pub struct Height(f32);

impl Height {
    pub fn new(value: f32) -> Result<Self, ProfileError> {
        if !(value > 0.0 && value <= 300.0) {
            return Err(ProfileError::HeightOutOfRange(value));
        }

        Ok(Self(value))
    }
}

/// Body weight in kilograms.
#[derive(Debug, Display, Clone, Copy, Into, PartialEq, PartialOrd)]
pub struct Weight(f32);

impl Weight {
    pub fn new(value: f32) -> Result<Self, ProfileError> {
        if !(value > 0.0 && value <= 500.0) {
            return Err(ProfileError::WeightOutOfRange(value));
        }

        Ok(Self(value))
    }
}

#[derive(Deref, Debug, Display, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord)]
pub struct DaysPerWeek(u8);

impl DaysPerWeek {
    pub fn new(value: u8) -> Result<Self, ProfileError> {
        if !(1..=7).contains(&value) {
            return Err(ProfileError::DaysPerWeekOutOfRange(value));
        }

        Ok(Self(value))
    }
}

/// Free-text injury tag, stored trimmed and lowercase.
#[derive(AsRef, Debug, Display, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Injury(String);

impl Injury {
    pub fn new(tag: &str) -> Result<Self, ProfileError> {
        let normalized_tag = tag.trim().to_lowercase();

        if normalized_tag.is_empty() {
            return Err(ProfileError::EmptyTag);
        }

        Ok(Self(normalized_tag))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ProfileError {
    #[error("Age must be in the range 10 to 120 ({0})")]
    AgeOutOfRange(u32),
    #[error("Height must be greater than 0 and at most 300 cm ({0})")]
    HeightOutOfRange(f32),
    #[error("Weight must be greater than 0 and at most 500 kg ({0})")]
    WeightOutOfRange(f32),
    #[error("Days per week must be in the range 1 to 7 ({0})")]
    DaysPerWeekOutOfRange(u8),
    #[error("Tag must not be empty")]
    EmptyTag,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sex {
    FEMALE,
    MALE,
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Sex::FEMALE => "female",
                Sex::MALE => "male",
            }
        )
    }
}

#[derive(
    AsRefStr, EnumString, Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum FitnessLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl Property for FitnessLevel {
    fn iter() -> Iter<'static, FitnessLevel> {
        static LEVELS: [FitnessLevel; 4] = [
            FitnessLevel::Beginner,
            FitnessLevel::Intermediate,
            FitnessLevel::Advanced,
            FitnessLevel::Expert,
        ];
        LEVELS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            FitnessLevel::Beginner => "Beginner",
            FitnessLevel::Intermediate => "Intermediate",
            FitnessLevel::Advanced => "Advanced",
            FitnessLevel::Expert => "Expert",
        }
    }
}

#[derive(
    AsRefStr, EnumString, Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Goal {
    Strength,
    Hypertrophy,
    FatLoss,
    Maintenance,
    Endurance,
    Recomposition,
}

impl Property for Goal {
    fn iter() -> Iter<'static, Goal> {
        static GOALS: [Goal; 6] = [
            Goal::Strength,
            Goal::Hypertrophy,
            Goal::FatLoss,
            Goal::Maintenance,
            Goal::Endurance,
            Goal::Recomposition,
        ];
        GOALS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Goal::Strength => "Strength",
            Goal::Hypertrophy => "Hypertrophy",
            Goal::FatLoss => "Fat Loss",
            Goal::Maintenance => "Maintenance",
            Goal::Endurance => "Endurance",
            Goal::Recomposition => "Recomposition",
        }
    }
}

#[derive(
    AsRefStr, EnumString, Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
    VeryActive,
}

impl ActivityLevel {
    #[must_use]
    pub fn factor(self) -> f32 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.9,
        }
    }
}
