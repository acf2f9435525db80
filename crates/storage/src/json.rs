use std::{
    collections::{BTreeMap, BTreeSet},
    str::FromStr,
};

use log::debug;
use serde::{Deserialize, Serialize};
use spotter_domain as domain;
use uuid::Uuid;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Profile(#[from] domain::ProfileError),
    #[error(transparent)]
    Name(#[from] domain::NameError),
    #[error(transparent)]
    Reps(#[from] domain::RepsError),
    #[error("unknown {0} \"{1}\"")]
    UnknownTag(&'static str, String),
}

pub fn read_profile(json: &str) -> Result<domain::ClientProfile, Error> {
    domain::ClientProfile::try_from(serde_json::from_str::<ClientProfile>(json)?)
}

pub fn read_catalog(json: &str) -> Result<Vec<domain::ExerciseRecord>, Error> {
    let exercises = serde_json::from_str::<Vec<Exercise>>(json)?
        .into_iter()
        .map(domain::ExerciseRecord::try_from)
        .collect::<Result<Vec<_>, _>>()?;
    debug!("read {} exercises", exercises.len());
    Ok(exercises)
}

pub fn read_settings(json: &str) -> Result<domain::GeneratorConfig, Error> {
    domain::GeneratorConfig::try_from(serde_json::from_str::<Settings>(json)?)
}

pub fn read_workout_plan(json: &str) -> Result<domain::WorkoutPlan, Error> {
    domain::WorkoutPlan::try_from(serde_json::from_str::<WorkoutPlan>(json)?)
}

pub fn write_workout_plan(plan: &domain::WorkoutPlan) -> Result<String, Error> {
    Ok(serde_json::to_string(&WorkoutPlan::from(plan))?)
}

pub fn write_diet_plan(plan: &domain::DietPlan) -> Result<String, Error> {
    Ok(serde_json::to_string(&DietPlan::from(plan))?)
}

fn parse<T: FromStr>(kind: &'static str, value: &str) -> Result<T, Error> {
    value
        .parse::<T>()
        .map_err(|_| Error::UnknownTag(kind, value.to_string()))
}

fn parse_all<T: FromStr + Ord>(kind: &'static str, values: &[String]) -> Result<BTreeSet<T>, Error> {
    values.iter().map(|v| parse(kind, v)).collect()
}

fn tags<T: AsRef<str>>(values: &BTreeSet<T>) -> Vec<String> {
    values.iter().map(|v| v.as_ref().to_string()).collect()
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ClientProfile {
    pub age: u32,
    pub sex: String,
    pub height: f32,
    pub weight: f32,
    pub fitness_level: String,
    pub goal: String,
    pub days_per_week: u8,
    pub activity_level: String,
    #[serde(default)]
    pub injuries: Vec<String>,
    #[serde(default)]
    pub equipment_access: Vec<String>,
    #[serde(default)]
    pub allergies: Vec<String>,
}

impl From<domain::ClientProfile> for ClientProfile {
    fn from(value: domain::ClientProfile) -> Self {
        Self::from(&value)
    }
}

impl From<&domain::ClientProfile> for ClientProfile {
    fn from(value: &domain::ClientProfile) -> Self {
        Self {
            age: value.age.into(),
            sex: value.sex.to_string(),
            height: value.height.into(),
            weight: value.weight.into(),
            fitness_level: value.fitness_level.as_ref().to_string(),
            goal: value.goal.as_ref().to_string(),
            days_per_week: value.days_per_week.into(),
            activity_level: value.activity_level.as_ref().to_string(),
            injuries: value.injuries.iter().map(ToString::to_string).collect(),
            equipment_access: tags(&value.equipment_access),
            allergies: value.allergies.iter().cloned().collect(),
        }
    }
}

impl TryFrom<ClientProfile> for domain::ClientProfile {
    type Error = Error;

    fn try_from(value: ClientProfile) -> Result<Self, Self::Error> {
        let sex = match value.sex.to_lowercase().as_str() {
            "female" => domain::Sex::FEMALE,
            "male" => domain::Sex::MALE,
            _ => return Err(Error::UnknownTag("sex", value.sex)),
        };
        Ok(Self {
            age: domain::Age::new(value.age)?,
            sex,
            height: domain::Height::new(value.height)?,
            weight: domain::Weight::new(value.weight)?,
            fitness_level: parse("fitness level", &value.fitness_level)?,
            goal: parse("goal", &value.goal)?,
            days_per_week: domain::DaysPerWeek::new(value.days_per_week)?,
            activity_level: parse("activity level", &value.activity_level)?,
            injuries: value
                .injuries
                .iter()
                .map(|i| domain::Injury::new(i))
                .collect::<Result<_, _>>()?,
            equipment_access: parse_all("equipment", &value.equipment_access)?,
            allergies: value
                .allergies
                .iter()
                .map(|a| a.trim().to_lowercase())
                .filter(|a| !a.is_empty())
                .collect(),
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    pub id: Uuid,
    pub name: String,
    pub muscle_group: String,
    #[serde(default)]
    pub equipment: Vec<String>,
    #[serde(default)]
    pub patterns: Vec<String>,
}

impl From<domain::ExerciseRecord> for Exercise {
    fn from(value: domain::ExerciseRecord) -> Self {
        Self::from(&value)
    }
}

impl From<&domain::ExerciseRecord> for Exercise {
    fn from(value: &domain::ExerciseRecord) -> Self {
        Self {
            id: *value.id,
            name: value.name.to_string(),
            muscle_group: value.muscle_group.as_ref().to_string(),
            equipment: tags(&value.required_equipment),
            patterns: tags(&value.patterns),
        }
    }
}

impl TryFrom<Exercise> for domain::ExerciseRecord {
    type Error = Error;

    fn try_from(value: Exercise) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id.into(),
            name: domain::Name::new(&value.name)?,
            muscle_group: parse("muscle group", &value.muscle_group)?,
            required_equipment: parse_all("equipment", &value.equipment)?,
            patterns: parse_all("movement pattern", &value.patterns)?,
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct WorkoutPlan {
    pub split_type: String,
    pub weeks: u8,
    pub workouts: Vec<WorkoutDay>,
}

impl From<domain::WorkoutPlan> for WorkoutPlan {
    fn from(value: domain::WorkoutPlan) -> Self {
        Self::from(&value)
    }
}

impl From<&domain::WorkoutPlan> for WorkoutPlan {
    fn from(value: &domain::WorkoutPlan) -> Self {
        Self {
            split_type: value.split_type.to_string(),
            weeks: value.weeks,
            workouts: value.workouts.iter().map(WorkoutDay::from).collect(),
        }
    }
}

impl TryFrom<WorkoutPlan> for domain::WorkoutPlan {
    type Error = Error;

    fn try_from(value: WorkoutPlan) -> Result<Self, Self::Error> {
        Ok(Self {
            split_type: parse("split type", &value.split_type)?,
            weeks: value.weeks,
            workouts: value
                .workouts
                .into_iter()
                .map(domain::WorkoutDay::try_from)
                .collect::<Result<_, _>>()?,
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct WorkoutDay {
    pub label: String,
    pub exercises: Vec<ExerciseAssignment>,
    #[serde(default)]
    pub notes: Vec<String>,
}

impl From<&domain::WorkoutDay> for WorkoutDay {
    fn from(value: &domain::WorkoutDay) -> Self {
        Self {
            label: value.label.clone(),
            exercises: value
                .exercises
                .iter()
                .map(ExerciseAssignment::from)
                .collect(),
            notes: value.notes.clone(),
        }
    }
}

impl TryFrom<WorkoutDay> for domain::WorkoutDay {
    type Error = Error;

    fn try_from(value: WorkoutDay) -> Result<Self, Self::Error> {
        Ok(Self {
            label: value.label,
            exercises: value
                .exercises
                .into_iter()
                .map(domain::ExerciseAssignment::try_from)
                .collect::<Result<_, _>>()?,
            notes: value.notes,
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ExerciseAssignment {
    pub exercise_id: Uuid,
    pub name: String,
    pub muscle_group: String,
    pub sets: u32,
    pub reps: String,
    pub rest_seconds: u32,
    #[serde(default)]
    pub notes: String,
}

impl From<&domain::ExerciseAssignment> for ExerciseAssignment {
    fn from(value: &domain::ExerciseAssignment) -> Self {
        Self {
            exercise_id: *value.exercise_id,
            name: value.name.to_string(),
            muscle_group: value.muscle_group.as_ref().to_string(),
            sets: value.sets,
            reps: value.reps.to_string(),
            rest_seconds: value.rest_seconds,
            notes: value.notes.clone(),
        }
    }
}

impl TryFrom<ExerciseAssignment> for domain::ExerciseAssignment {
    type Error = Error;

    fn try_from(value: ExerciseAssignment) -> Result<Self, Self::Error> {
        Ok(Self {
            exercise_id: value.exercise_id.into(),
            name: domain::Name::new(&value.name)?,
            muscle_group: parse("muscle group", &value.muscle_group)?,
            sets: value.sets,
            reps: value.reps.parse()?,
            rest_seconds: value.rest_seconds,
            notes: value.notes,
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DietPlan {
    pub bmr: u32,
    pub tdee: u32,
    pub activity_factor: f32,
    pub target_calories: u32,
    pub calorie_adjustment: i32,
    pub macros: Macros,
    pub water_ml: u32,
    pub meals: Vec<Meal>,
    pub allergies: Vec<String>,
}

impl From<&domain::DietPlan> for DietPlan {
    fn from(value: &domain::DietPlan) -> Self {
        Self {
            bmr: value.bmr,
            tdee: value.tdee,
            activity_factor: value.activity_factor,
            target_calories: value.target_calories,
            calorie_adjustment: value.calorie_adjustment,
            macros: value.macros.into(),
            water_ml: value.water_ml,
            meals: value
                .meals
                .iter()
                .map(|m| Meal {
                    name: m.name.clone(),
                    calories: m.calories,
                    macros: m.macros.into(),
                })
                .collect(),
            allergies: value.allergies.iter().cloned().collect(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Macros {
    pub protein: u32,
    pub carbs: u32,
    pub fat: u32,
}

impl From<domain::Macros> for Macros {
    fn from(value: domain::Macros) -> Self {
        Self {
            protein: value.protein,
            carbs: value.carbs,
            fat: value.fat,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Meal {
    pub name: String,
    pub calories: u32,
    pub macros: Macros,
}

/// Overrides of the default generator configuration.
///
/// Table entries are merged into the default tables, other fields replace
/// the defaults if present.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub max_exercises_per_day: Option<usize>,
    pub program_weeks: Option<u8>,
    pub splits: BTreeMap<String, BTreeMap<u8, String>>,
    pub volume: BTreeMap<String, Volume>,
    pub contraindications: BTreeMap<String, Vec<String>>,
    pub meals: Option<Vec<MealShare>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Volume {
    pub sets: u32,
    pub reps: String,
    pub rest_seconds: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MealShare {
    pub name: String,
    pub share: f32,
}

impl TryFrom<Settings> for domain::GeneratorConfig {
    type Error = Error;

    fn try_from(value: Settings) -> Result<Self, Self::Error> {
        let mut config = domain::GeneratorConfig::default();

        if let Some(max_exercises_per_day) = value.max_exercises_per_day {
            config.max_exercises_per_day = max_exercises_per_day;
        }
        if let Some(program_weeks) = value.program_weeks {
            config.program_weeks = program_weeks;
        }
        for (fitness_level, splits) in value.splits {
            let fitness_level = parse("fitness level", &fitness_level)?;
            for (days, archetype) in splits {
                config
                    .splits
                    .insert(fitness_level, days, parse("split type", &archetype)?);
            }
        }
        for (goal, volume) in value.volume {
            config.volume.insert(
                parse("goal", &goal)?,
                domain::VolumeConfig {
                    sets: volume.sets,
                    reps: volume.reps.parse()?,
                    rest_seconds: volume.rest_seconds,
                },
            );
        }
        for (injury, patterns) in value.contraindications {
            config.contraindications.insert(
                domain::Injury::new(&injury)?,
                parse_all("movement pattern", &patterns)?,
            );
        }
        if let Some(meals) = value.meals {
            config.diet.meals = meals
                .into_iter()
                .map(|m| domain::MealShare {
                    name: m.name,
                    share: m.share,
                })
                .collect();
        }

        Ok(config)
    }
}
