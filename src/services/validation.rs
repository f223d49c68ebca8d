//! Form input checks run before anything touches the store.

use thiserror::Error;

use crate::models::movie::MovieInput;

pub const MAX_TITLE_LEN: usize = 60;
pub const MIN_YEAR_LEN: usize = 4;
pub const MAX_NAME_LEN: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Title is required")]
    EmptyTitle,

    #[error("Title must be {MAX_TITLE_LEN} characters or less")]
    TitleTooLong,

    #[error("Year is required")]
    EmptyYear,

    #[error("Year must be at least {MIN_YEAR_LEN} characters")]
    YearTooShort,

    #[error("Name is required")]
    EmptyName,

    #[error("Name must be {MAX_NAME_LEN} characters or less")]
    NameTooLong,

    #[error("Username and password are required")]
    MissingCredentials,
}

/// Lengths are counted in characters, not bytes.
fn char_len(value: &str) -> usize {
    value.chars().count()
}

/// Accepts any year of four or more characters; only shorter ones fail.
pub fn validate_movie(input: &MovieInput) -> Result<(), ValidationError> {
    if input.title.is_empty() {
        return Err(ValidationError::EmptyTitle);
    }
    if input.year.is_empty() {
        return Err(ValidationError::EmptyYear);
    }
    if char_len(&input.year) < MIN_YEAR_LEN {
        return Err(ValidationError::YearTooShort);
    }
    if char_len(&input.title) > MAX_TITLE_LEN {
        return Err(ValidationError::TitleTooLong);
    }
    Ok(())
}

pub fn validate_display_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    if char_len(name) > MAX_NAME_LEN {
        return Err(ValidationError::NameTooLong);
    }
    Ok(())
}

pub fn validate_credentials(username: &str, password: &str) -> Result<(), ValidationError> {
    if username.is_empty() || password.is_empty() {
        return Err(ValidationError::MissingCredentials);
    }
    Ok(())
}
