use log::{debug, error};
use rand::Rng;

use crate::{
    CatalogRepository, ClientProfile, DietPlan, ExerciseFilter, ExerciseRecord, GeneratorConfig,
    ReadError, Split, WorkoutPlan, assemble, diet_plan, group_by_muscle,
};

pub struct Service<R> {
    repository: R,
    config: GeneratorConfig,
}

macro_rules! log_on_error {
    ($func: expr, $error: ident, $action: literal, $entity: literal) => {{
        let result = $func.await;
        match result {
            Ok(_) => {}
            Err(ref err) => match err {
                $error::Storage(crate::StorageError::NoConnection) => {
                    debug!("failed to {} {}: {err}", $action, $entity);
                }
                _ => {
                    error!("failed to {} {}: {err}", $action, $entity);
                }
            },
        }
        result
    }};
}

impl<R: CatalogRepository> Service<R> {
    pub fn new(repository: R) -> Self {
        Self::with_config(repository, GeneratorConfig::default())
    }

    pub fn with_config(repository: R, config: GeneratorConfig) -> Self {
        Self { repository, config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate a workout plan from the exercises of the repository.
    ///
    /// Only the muscle groups trained in the selected split are requested
    /// from the repository.
    pub async fn generate_workout_plan<G: Rng + ?Sized>(
        &self,
        profile: &ClientProfile,
        rng: &mut G,
    ) -> Result<WorkoutPlan, ReadError> {
        let split = self
            .config
            .splits
            .select(profile.fitness_level, *profile.days_per_week);
        let catalog = log_on_error!(
            self.repository
                .get_exercises(&split.archetype.muscle_groups()),
            ReadError,
            "get",
            "exercises"
        )?;
        Ok(workout_plan(profile, split, &catalog, &self.config, rng))
    }

    pub fn generate_diet_plan(&self, profile: &ClientProfile) -> DietPlan {
        diet_plan(profile, &self.config.diet)
    }
}

/// Generate a workout plan from an already loaded catalog.
pub fn generate_workout_plan<G: Rng + ?Sized>(
    profile: &ClientProfile,
    catalog: &[ExerciseRecord],
    config: &GeneratorConfig,
    rng: &mut G,
) -> WorkoutPlan {
    let split = config
        .splits
        .select(profile.fitness_level, *profile.days_per_week);
    workout_plan(profile, split, catalog, config, rng)
}

fn workout_plan<G: Rng + ?Sized>(
    profile: &ClientProfile,
    split: Split,
    catalog: &[ExerciseRecord],
    config: &GeneratorConfig,
    rng: &mut G,
) -> WorkoutPlan {
    let candidates = group_by_muscle(
        ExerciseFilter::new(profile, &config.contraindications).exercises(catalog.iter()),
    );
    assemble(
        split.archetype,
        &candidates,
        config.volume.volume_for(profile.goal),
        split.training_days,
        rng,
        &config.assemble_options(),
    )
}
