use crate::{AssembleOptions, Contraindications, DietConfig, SplitTable, VolumePolicy};

/// Lookup tables and limits used for plan generation.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    pub splits: SplitTable,
    pub volume: VolumePolicy,
    pub contraindications: Contraindications,
    pub max_exercises_per_day: usize,
    pub program_weeks: u8,
    pub diet: DietConfig,
}

impl GeneratorConfig {
    #[must_use]
    pub fn assemble_options(&self) -> AssembleOptions {
        AssembleOptions {
            max_exercises_per_day: self.max_exercises_per_day,
            weeks: self.program_weeks,
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        let options = AssembleOptions::default();
        Self {
            splits: SplitTable::default(),
            volume: VolumePolicy::default(),
            contraindications: Contraindications::default(),
            max_exercises_per_day: options.max_exercises_per_day,
            program_weeks: options.weeks,
            diet: DietConfig::default(),
        }
    }
}
