//! Client-side checks for the new-password form.

use crate::PasswordError;

/// Symbols accepted (and one of which is required) by the password policy.
pub const PASSWORD_SYMBOLS: &str = "@$!%*?&";

/// Minimum password length.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Hint rendered under the new-password fields.
pub const PASSWORD_CRITERIA_HINT: &str = "Must contain at least 8 characters, one uppercase, one lowercase, one number, and one special character";

/// Returns `true` when `password` satisfies the policy.
///
/// The password must be at least [`MIN_PASSWORD_LEN`] characters drawn only from
/// ASCII letters, ASCII digits and [`PASSWORD_SYMBOLS`], and contain at least one
/// lowercase letter, one uppercase letter, one digit and one symbol.
pub fn meets_policy(password: &str) -> bool {
    let is_symbol = |c: char| PASSWORD_SYMBOLS.contains(c);

    let allowed = password
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || is_symbol(c));

    allowed
        && password.chars().count() >= MIN_PASSWORD_LEN
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(is_symbol)
}

/// Validates the new-password form: both fields must match, then the policy must hold.
pub fn validate_new_password(password: &str, retype: &str) -> Result<(), PasswordError> {
    if password != retype {
        return Err(PasswordError::Mismatch);
    }
    if !meets_policy(password) {
        return Err(PasswordError::Criteria);
    }
    Ok(())
}
