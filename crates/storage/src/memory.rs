use std::collections::BTreeSet;

use log::debug;
use spotter_domain as domain;

use crate::json;

/// Exercise catalog held in memory, e.g. loaded from a JSON file.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct MemoryCatalog {
    exercises: Vec<domain::ExerciseRecord>,
}

impl MemoryCatalog {
    #[must_use]
    pub fn new(exercises: Vec<domain::ExerciseRecord>) -> Self {
        Self { exercises }
    }

    pub fn from_json(json: &str) -> Result<Self, json::Error> {
        Ok(Self::new(json::read_catalog(json)?))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }
}

impl domain::CatalogRepository for MemoryCatalog {
    async fn get_exercises(
        &self,
        muscle_groups: &BTreeSet<domain::MuscleGroup>,
    ) -> Result<Vec<domain::ExerciseRecord>, domain::ReadError> {
        let exercises = self
            .exercises
            .iter()
            .filter(|e| muscle_groups.contains(&e.muscle_group))
            .cloned()
            .collect::<Vec<_>>();
        debug!(
            "found {} of {} exercises in memory catalog",
            exercises.len(),
            self.exercises.len()
        );
        Ok(exercises)
    }
}
