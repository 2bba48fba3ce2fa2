//! Input validation shared by every entity.
//!
//! Form fields arrive as free text. These helpers reject empty or
//! whitespace-only values and enforce the column widths of the schema.

use crate::error::CoreError;

/// Maximum length of a username.
pub const MAX_USERNAME_LEN: usize = 30;

/// Maximum length of an email address.
pub const MAX_EMAIL_LEN: usize = 50;

/// Maximum length of a category or post-it title.
pub const MAX_TITLE_LEN: usize = 50;

/// Maximum length of a category or post-it description.
pub const MAX_DESCRIPTION_LEN: usize = 50;

/// Maximum length of an icon URL.
pub const MAX_ICON_LEN: usize = 400;

/// Minimum password length accepted at registration.
pub const MIN_PASSWORD_LEN: usize = 4;

/// Icon assigned to new accounts and to updates that leave the icon blank.
pub const DEFAULT_ICON_URL: &str =
    "https://icon-library.com/images/default-user-icon/default-user-icon-8.jpg";

/// Reject empty or whitespace-only values.
pub fn validate_required(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    Ok(())
}

/// Reject empty values and values longer than `max` characters.
pub fn validate_text(field: &str, value: &str, max: usize) -> Result<(), CoreError> {
    validate_required(field, value)?;
    if value.chars().count() > max {
        return Err(CoreError::Validation(format!(
            "{field} must be at most {max} characters"
        )));
    }
    Ok(())
}

/// Loose email shape check: one `@` with text on both sides and a dot in
/// the domain part.
pub fn validate_email(email: &str) -> Result<(), CoreError> {
    validate_text("Email", email, MAX_EMAIL_LEN)?;
    let valid = match email.trim().split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && !domain.contains('@') && domain.contains('.')
        }
        None => false,
    };
    if !valid {
        return Err(CoreError::Validation(format!(
            "'{email}' is not a valid email address"
        )));
    }
    Ok(())
}

pub fn validate_username(username: &str) -> Result<(), CoreError> {
    validate_text("Username", username, MAX_USERNAME_LEN)
}

pub fn validate_password(password: &str) -> Result<(), CoreError> {
    validate_required("Password", password)?;
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(CoreError::Validation(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters long"
        )));
    }
    Ok(())
}

pub fn validate_title(title: &str) -> Result<(), CoreError> {
    validate_text("Title", title, MAX_TITLE_LEN)
}

pub fn validate_description(description: &str) -> Result<(), CoreError> {
    validate_text("Description", description, MAX_DESCRIPTION_LEN)
}

/// Resolve the icon to store: blank input falls back to [`DEFAULT_ICON_URL`].
pub fn resolve_icon(icon: Option<&str>) -> Result<String, CoreError> {
    match icon.map(str::trim) {
        Some(url) if !url.is_empty() => {
            validate_text("Icon", url, MAX_ICON_LEN)?;
            Ok(url.to_string())
        }
        _ => Ok(DEFAULT_ICON_URL.to_string()),
    }
}
