use std::collections::BTreeSet;

use log::debug;

use crate::{ActivityLevel, Age, ClientProfile, Goal, Height, Sex, Weight};

pub const MIN_CALORIES: f32 = 1200.0;
pub const FAT_LOSS_DEFICIT: i32 = -500;

#[derive(Debug, Clone, PartialEq)]
pub struct DietPlan {
    pub bmr: u32,
    pub tdee: u32,
    pub activity_factor: f32,
    pub target_calories: u32,
    /// Difference between target calories and TDEE.
    pub calorie_adjustment: i32,
    pub macros: Macros,
    pub water_ml: u32,
    pub meals: Vec<Meal>,
    pub allergies: BTreeSet<String>,
}

/// Macronutrients in grams.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Macros {
    pub protein: u32,
    pub carbs: u32,
    pub fat: u32,
}

impl Macros {
    #[must_use]
    pub fn calories(&self) -> u32 {
        self.protein * 4 + self.carbs * 4 + self.fat * 9
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Meal {
    pub name: String,
    pub calories: u32,
    pub macros: Macros,
}

/// Proportion of the daily intake eaten in one meal.
#[derive(Debug, Clone, PartialEq)]
pub struct MealShare {
    pub name: String,
    pub share: f32,
}

impl MealShare {
    #[must_use]
    pub fn new(name: &str, share: f32) -> Self {
        Self {
            name: name.to_string(),
            share,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DietConfig {
    pub meals: Vec<MealShare>,
}

impl Default for DietConfig {
    fn default() -> Self {
        Self {
            meals: vec![
                MealShare::new("breakfast", 0.25),
                MealShare::new("lunch", 0.35),
                MealShare::new("snack", 0.10),
                MealShare::new("dinner", 0.30),
            ],
        }
    }
}

#[must_use]
pub fn diet_plan(profile: &ClientProfile, config: &DietConfig) -> DietPlan {
    let bmr = bmr(profile.sex, profile.weight, profile.height, profile.age);
    let activity_factor = activity_factor(
        profile.activity_level,
        *profile.days_per_week,
        profile.goal,
    );
    let tdee = tdee(bmr, activity_factor);
    let (target_calories, calorie_adjustment) = target_calories(tdee, profile.goal);
    let macros = macros(profile.weight, target_calories, profile.goal);

    DietPlan {
        bmr,
        tdee,
        activity_factor,
        target_calories,
        calorie_adjustment,
        macros,
        water_ml: water_intake(profile.weight, profile.activity_level.factor()),
        meals: meals(target_calories, macros, &config.meals),
        allergies: profile.allergies.clone(),
    }
}

/// Basal metabolic rate in kcal per day.
///
/// Weighted average of the Mifflin-St Jeor (60 %) and the revised
/// Harris-Benedict (40 %) equations.
#[must_use]
pub fn bmr(sex: Sex, weight: Weight, height: Height, age: Age) -> u32 {
    let w = f32::from(weight);
    let h = f32::from(height);
    #[allow(clippy::cast_precision_loss)]
    let a = u32::from(age) as f32;

    let mifflin_st_jeor = 10.0 * w + 6.25 * h - 5.0 * a
        + match sex {
            Sex::FEMALE => -161.0,
            Sex::MALE => 5.0,
        };
    let harris_benedict = match sex {
        Sex::FEMALE => 447.593 + 9.247 * w + 3.098 * h - 4.330 * a,
        Sex::MALE => 88.362 + 13.397 * w + 4.799 * h - 5.677 * a,
    };

    round(0.6 * mifflin_st_jeor + 0.4 * harris_benedict)
}

/// Activity factor raised to the minimum implied by the number of training
/// days and scaled for the goal.
///
/// Fat loss lowers the factor by 8 %, recomposition by 3 % and hypertrophy
/// raises it by 10 %. The result is kept within 1.2 and 2.5.
#[must_use]
pub fn activity_factor(activity_level: ActivityLevel, training_days: u8, goal: Goal) -> f32 {
    let minimum = match training_days {
        6.. => 1.725,
        4..=5 => 1.55,
        2..=3 => 1.375,
        _ => 1.2,
    };
    let factor = activity_level.factor().max(minimum);
    let factor = match goal {
        Goal::FatLoss => factor * 0.92,
        Goal::Hypertrophy => factor * 1.10,
        Goal::Recomposition => factor * 0.97,
        Goal::Strength | Goal::Maintenance | Goal::Endurance => factor,
    };
    factor.clamp(1.2, 2.5)
}

#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn tdee(bmr: u32, activity_factor: f32) -> u32 {
    round(bmr as f32 * activity_factor)
}

/// Daily calorie target and the applied adjustment relative to `tdee`.
#[must_use]
pub fn target_calories(tdee: u32, goal: Goal) -> (u32, i32) {
    #[allow(clippy::cast_possible_wrap)]
    let tdee_signed = tdee as i32;
    let target = match goal {
        Goal::FatLoss => {
            #[allow(clippy::cast_precision_loss)]
            let floor = round(MIN_CALORIES.max(0.8 * tdee as f32));
            #[allow(clippy::cast_sign_loss)]
            let target = (tdee_signed + FAT_LOSS_DEFICIT).max(0) as u32;
            if target < floor {
                debug!("calorie deficit limited by minimum intake of {floor} kcal");
            }
            target.max(floor)
        }
        Goal::Hypertrophy => tdee + 300,
        Goal::Strength | Goal::Maintenance | Goal::Endurance | Goal::Recomposition => tdee,
    };
    #[allow(clippy::cast_possible_wrap)]
    let adjustment = target as i32 - tdee_signed;
    (target, adjustment)
}

/// Protein in grams per kilogram of body weight.
#[must_use]
pub fn protein_per_kg(goal: Goal) -> f32 {
    match goal {
        Goal::Hypertrophy => 2.4,
        Goal::FatLoss => 2.0,
        Goal::Strength | Goal::Maintenance | Goal::Endurance | Goal::Recomposition => 1.8,
    }
}

/// Fat covers 25 % of the calories and carbohydrates the remainder after
/// protein. If protein alone exceeds the remainder, carbohydrates are set to
/// 40 % of the calories and protein is reduced instead.
#[must_use]
pub fn macros(weight: Weight, calories: u32, goal: Goal) -> Macros {
    #[allow(clippy::cast_precision_loss)]
    let calories = calories as f32;
    let mut protein = (f32::from(weight) * protein_per_kg(goal)).round();
    let fat = (calories * 0.25 / 9.0).round();
    let mut carbs = ((calories - protein * 4.0 - fat * 9.0) / 4.0).round();

    if carbs < 0.0 {
        debug!("protein target exceeds available calories, reducing protein");
        carbs = (calories * 0.4 / 4.0).round();
        protein = ((calories - carbs * 4.0 - fat * 9.0) / 4.0).round();
    }

    Macros {
        protein: round(protein),
        carbs: round(carbs),
        fat: round(fat),
    }
}

/// Daily water intake in milliliters, rounded to the nearest 100 ml.
///
/// 30 ml per kilogram of body weight, increased by up to 30 % depending on
/// the activity factor.
#[must_use]
pub fn water_intake(weight: Weight, activity_factor: f32) -> u32 {
    let multiplier = if activity_factor >= 1.725 {
        1.3
    } else if activity_factor >= 1.55 {
        1.2
    } else if activity_factor >= 1.375 {
        1.1
    } else {
        1.0
    };
    round(f32::from(weight) * 30.0 * multiplier / 100.0) * 100
}

/// Split the daily targets across meals in proportion to their shares.
///
/// The last meal receives the rounding remainder, so that the meals always
/// add up to the daily targets.
#[must_use]
pub fn meals(calories: u32, macros: Macros, shares: &[MealShare]) -> Vec<Meal> {
    let weights = shares.iter().map(|m| m.share.max(0.0)).collect::<Vec<_>>();
    let calories = distribute(calories, &weights);
    let protein = distribute(macros.protein, &weights);
    let carbs = distribute(macros.carbs, &weights);
    let fat = distribute(macros.fat, &weights);

    shares
        .iter()
        .enumerate()
        .map(|(i, share)| Meal {
            name: share.name.clone(),
            calories: calories[i],
            macros: Macros {
                protein: protein[i],
                carbs: carbs[i],
                fat: fat[i],
            },
        })
        .collect()
}

fn distribute(total: u32, weights: &[f32]) -> Vec<u32> {
    let sum = weights.iter().sum::<f32>();
    let mut remaining = total;
    let mut result = weights
        .iter()
        .map(|w| {
            #[allow(clippy::cast_precision_loss)]
            let part = (if sum > 0.0 {
                round(total as f32 * w / sum)
            } else {
                0
            })
            .min(remaining);
            remaining -= part;
            part
        })
        .collect::<Vec<_>>();
    if let Some(last) = result.last_mut() {
        *last += remaining;
    }
    result
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn round(value: f32) -> u32 {
    value.round().max(0.0) as u32
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use crate::{DaysPerWeek, FitnessLevel};

    use super::*;

    fn profile(goal: Goal) -> ClientProfile {
        ClientProfile {
            age: Age::new(30).unwrap(),
            sex: Sex::MALE,
            height: Height::new(180.0).unwrap(),
            weight: Weight::new(80.0).unwrap(),
            fitness_level: FitnessLevel::Intermediate,
            goal,
            days_per_week: DaysPerWeek::new(4).unwrap(),
            activity_level: ActivityLevel::Moderate,
            injuries: BTreeSet::new(),
            equipment_access: BTreeSet::new(),
            allergies: BTreeSet::from(["peanuts".to_string()]),
        }
    }

    #[rstest]
    #[case(Sex::MALE, 80.0, 180.0, 30, 1809)]
    #[case(Sex::FEMALE, 60.0, 165.0, 25, 1369)]
    fn test_bmr(
        #[case] sex: Sex,
        #[case] weight: f32,
        #[case] height: f32,
        #[case] age: u32,
        #[case] expected: u32,
    ) {
        assert_eq!(
            bmr(
                sex,
                Weight::new(weight).unwrap(),
                Height::new(height).unwrap(),
                Age::new(age).unwrap()
            ),
            expected
        );
    }

    #[rstest]
    #[case(ActivityLevel::Sedentary, 1, Goal::Maintenance, 1.2)]
    #[case(ActivityLevel::Sedentary, 3, Goal::Maintenance, 1.375)]
    #[case(ActivityLevel::Sedentary, 6, Goal::Maintenance, 1.725)]
    #[case(ActivityLevel::Light, 4, Goal::Maintenance, 1.55)]
    #[case(ActivityLevel::Moderate, 2, Goal::Maintenance, 1.55)]
    #[case(ActivityLevel::VeryActive, 1, Goal::Maintenance, 1.9)]
    #[case(ActivityLevel::Moderate, 4, Goal::Strength, 1.55)]
    #[case(ActivityLevel::Moderate, 4, Goal::Endurance, 1.55)]
    #[case(ActivityLevel::Moderate, 4, Goal::FatLoss, 1.426)]
    #[case(ActivityLevel::Moderate, 4, Goal::Hypertrophy, 1.705)]
    #[case(ActivityLevel::Moderate, 4, Goal::Recomposition, 1.5035)]
    #[case::fat_loss_minimum(ActivityLevel::Sedentary, 1, Goal::FatLoss, 1.2)]
    #[case(ActivityLevel::VeryActive, 6, Goal::Hypertrophy, 2.09)]
    fn test_activity_factor(
        #[case] activity_level: ActivityLevel,
        #[case] training_days: u8,
        #[case] goal: Goal,
        #[case] expected: f32,
    ) {
        assert_approx_eq!(activity_factor(activity_level, training_days, goal), expected);
    }

    #[test]
    fn test_tdee() {
        assert_eq!(tdee(1809, 1.55), 2804);
        assert_eq!(tdee(0, 1.55), 0);
    }

    #[rstest]
    #[case(2804, Goal::FatLoss, (2304, -500))]
    #[case(2000, Goal::FatLoss, (1600, -400))]
    #[case(1400, Goal::FatLoss, (1200, -200))]
    #[case(2804, Goal::Hypertrophy, (3104, 300))]
    #[case(2804, Goal::Strength, (2804, 0))]
    #[case(2804, Goal::Maintenance, (2804, 0))]
    #[case(2804, Goal::Endurance, (2804, 0))]
    fn test_target_calories(#[case] tdee: u32, #[case] goal: Goal, #[case] expected: (u32, i32)) {
        assert_eq!(target_calories(tdee, goal), expected);
    }

    #[rstest]
    #[case(80.0, 3104, Goal::Hypertrophy, Macros { protein: 192, carbs: 391, fat: 86 })]
    #[case(80.0, 2804, Goal::Maintenance, Macros { protein: 144, carbs: 382, fat: 78 })]
    #[case(80.0, 2804, Goal::Strength, Macros { protein: 144, carbs: 382, fat: 78 })]
    #[case(200.0, 1200, Goal::Hypertrophy, Macros { protein: 106, carbs: 120, fat: 33 })]
    fn test_macros(
        #[case] weight: f32,
        #[case] calories: u32,
        #[case] goal: Goal,
        #[case] expected: Macros,
    ) {
        assert_eq!(macros(Weight::new(weight).unwrap(), calories, goal), expected);
    }

    #[rstest]
    #[case(80.0, ActivityLevel::Sedentary, 2400)]
    #[case(80.0, ActivityLevel::Light, 2600)]
    #[case(80.0, ActivityLevel::Moderate, 2900)]
    #[case(80.0, ActivityLevel::Active, 3100)]
    #[case(80.0, ActivityLevel::VeryActive, 3100)]
    #[case(62.5, ActivityLevel::Sedentary, 1900)]
    fn test_water_intake(
        #[case] weight: f32,
        #[case] activity_level: ActivityLevel,
        #[case] expected: u32,
    ) {
        assert_eq!(
            water_intake(Weight::new(weight).unwrap(), activity_level.factor()),
            expected
        );
    }

    #[test]
    fn test_meals() {
        let macros = Macros {
            protein: 192,
            carbs: 391,
            fat: 86,
        };
        let meals = meals(3104, macros, &DietConfig::default().meals);

        assert_eq!(
            meals.iter().map(|m| m.name.as_str()).collect::<Vec<_>>(),
            vec!["breakfast", "lunch", "snack", "dinner"]
        );
        assert_eq!(
            meals.iter().map(|m| m.calories).collect::<Vec<_>>(),
            vec![776, 1086, 310, 932]
        );
        assert_eq!(meals.iter().map(|m| m.calories).sum::<u32>(), 3104);
        assert_eq!(meals.iter().map(|m| m.macros.protein).sum::<u32>(), 192);
        assert_eq!(meals.iter().map(|m| m.macros.carbs).sum::<u32>(), 391);
        assert_eq!(meals.iter().map(|m| m.macros.fat).sum::<u32>(), 86);
    }

    #[test]
    fn test_meals_unnormalized_shares() {
        let meals = meals(
            1000,
            Macros::default(),
            &[MealShare::new("a", 1.0), MealShare::new("b", 3.0)],
        );
        assert_eq!(
            meals.iter().map(|m| m.calories).collect::<Vec<_>>(),
            vec![250, 750]
        );
        assert!(super::meals(1000, Macros::default(), &[]).is_empty());
    }

    #[test]
    fn test_diet_plan() {
        let plan = diet_plan(&profile(Goal::Hypertrophy), &DietConfig::default());

        assert_eq!(plan.bmr, 1809);
        assert_approx_eq!(plan.activity_factor, 1.705);
        assert_eq!(plan.tdee, 3084);
        assert_eq!(plan.target_calories, 3384);
        assert_eq!(plan.calorie_adjustment, 300);
        assert_eq!(
            plan.macros,
            Macros {
                protein: 192,
                carbs: 443,
                fat: 94
            }
        );
        assert_eq!(plan.water_ml, 2900);
        assert_eq!(plan.meals.len(), 4);
        assert_eq!(
            plan.meals.iter().map(|m| m.calories).sum::<u32>(),
            plan.target_calories
        );
        assert_eq!(plan.allergies, BTreeSet::from(["peanuts".to_string()]));
    }

    #[test]
    fn test_macros_calories() {
        assert_eq!(
            Macros {
                protein: 192,
                carbs: 391,
                fat: 86
            }
            .calories(),
            3106
        );
    }
}
