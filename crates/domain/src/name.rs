use derive_more::{AsRef, Display};

/// Exercise name with surrounding whitespace removed and inner runs of
/// whitespace collapsed to a single space.
#[derive(AsRef, Debug, Display, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Name(String);

impl Name {
    pub fn new(name: &str) -> Result<Self, NameError> {
        let normalized_name = name.split_whitespace().collect::<Vec<_>>().join(" ");

        if normalized_name.is_empty() {
            return Err(NameError::Empty);
        }

        let len = normalized_name.chars().count();

        if len > 80 {
            return Err(NameError::TooLong(len));
        }

        Ok(Name(normalized_name))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum NameError {
    #[error("Name must not be empty")]
    Empty,
    #[error("Name must be 80 characters or fewer ({0} > 80)")]
    TooLong(usize),
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("Goblet Squat", Ok(Name("Goblet Squat".to_string())))]
    #[case("  Push Up  ", Ok(Name("Push Up".to_string())))]
    #[case("Dumbbell \t Bench   Press", Ok(Name("Dumbbell Bench Press".to_string())))]
    #[case("", Err(NameError::Empty))]
    #[case(" \n ", Err(NameError::Empty))]
    #[case(&"A".repeat(81), Err(NameError::TooLong(81)))]
    fn test_name_new(#[case] name: &str, #[case] expected: Result<Name, NameError>) {
        assert_eq!(Name::new(name), expected);
    }

    #[test]
    fn test_name_display() {
        assert_eq!(Name::new(" Plank ").unwrap().to_string(), "Plank");
    }
}
