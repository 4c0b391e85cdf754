use crate::config::settings::ValidationSettings;
use crate::database::PlayerId;
use crate::errors::ValidationError;

/// Trims the name and checks it against the configured limits.
pub fn normalize_name<'a>(
    name: &'a str,
    settings: &ValidationSettings,
) -> Result<&'a str, ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyName);
    }

    let length = trimmed.chars().count();
    if length > settings.max_name_length {
        return Err(ValidationError::NameTooLong {
            max: settings.max_name_length,
            actual: length,
        });
    }

    Ok(trimmed)
}

pub fn check_opponents(winner: PlayerId, loser: PlayerId) -> Result<(), ValidationError> {
    if winner == loser {
        return Err(ValidationError::SelfMatch(winner));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_is_trimmed() {
        let settings = ValidationSettings::default();
        assert_eq!(normalize_name("  Alice \n", &settings), Ok("Alice"));
    }

    #[test]
    fn test_blank_name_rejected() {
        let settings = ValidationSettings::default();
        assert_eq!(normalize_name("", &settings), Err(ValidationError::EmptyName));
        assert_eq!(normalize_name(" \t ", &settings), Err(ValidationError::EmptyName));
    }

    #[test]
    fn test_long_name_counts_characters() {
        let settings = ValidationSettings { max_name_length: 3 };

        assert_eq!(normalize_name("Zoë", &settings), Ok("Zoë"));
        assert_eq!(
            normalize_name("Zoey", &settings),
            Err(ValidationError::NameTooLong { max: 3, actual: 4 })
        );
    }

    #[test]
    fn test_self_match_rejected() {
        assert_eq!(check_opponents(4, 4), Err(ValidationError::SelfMatch(4)));
        assert!(check_opponents(4, 5).is_ok());
    }
}
