//! Client-side form validation for the auth and subscribe forms

/// First rule a form field failed. `Display` is the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter your name")]
    NameRequired,

    #[error("Please enter your email address")]
    EmailRequired,

    #[error("Please enter a valid email address")]
    EmailInvalid,

    #[error("Password must be at least {min} characters")]
    PasswordTooShort { min: usize },

    #[error("Passwords do not match")]
    PasswordMismatch,
}

pub type ValidationResult = Result<(), ValidationError>;

pub fn validate_name(name: &str) -> ValidationResult {
    if name.trim().is_empty() {
        return Err(ValidationError::NameRequired);
    }
    Ok(())
}

/// Accepts `local@domain.tld`: one `@`, no whitespace, and a dotted domain
/// whose labels are all non-empty.
pub fn validate_email(email: &str) -> ValidationResult {
    let email = email.trim();
    if email.is_empty() {
        return Err(ValidationError::EmailRequired);
    }
    if email.chars().any(char::is_whitespace) {
        return Err(ValidationError::EmailInvalid);
    }

    let (local, domain) = email.split_once('@').ok_or(ValidationError::EmailInvalid)?;
    if local.is_empty() || domain.contains('@') || !domain.contains('.') {
        return Err(ValidationError::EmailInvalid);
    }
    if domain.split('.').any(str::is_empty) {
        return Err(ValidationError::EmailInvalid);
    }

    Ok(())
}

pub fn validate_password(password: &str, min_len: usize) -> ValidationResult {
    if password.chars().count() < min_len {
        return Err(ValidationError::PasswordTooShort { min: min_len });
    }
    Ok(())
}

pub fn validate_password_confirmation(password: &str, confirmation: &str) -> ValidationResult {
    if password != confirmation {
        return Err(ValidationError::PasswordMismatch);
    }
    Ok(())
}

/// Login form: email, then password.
pub fn validate_login(email: &str, password: &str, min_password_len: usize) -> ValidationResult {
    validate_email(email)?;
    validate_password(password, min_password_len)
}

/// Sign-up form: name, email, then password.
pub fn validate_signup(
    name: &str,
    email: &str,
    password: &str,
    min_password_len: usize,
) -> ValidationResult {
    validate_name(name)?;
    validate_email(email)?;
    validate_password(password, min_password_len)
}

/// Reset form: new password, then confirmation.
pub fn validate_reset(password: &str, confirmation: &str, min_password_len: usize) -> ValidationResult {
    validate_password(password, min_password_len)?;
    validate_password_confirmation(password, confirmation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("student@university.edu")]
    #[case("first.last+ta@cs.example.ac.uk")]
    #[case("  padded@example.com  ")]
    fn test_valid_emails(#[case] email: &str) {
        assert_eq!(validate_email(email), Ok(()));
    }

    #[rstest]
    #[case("no-at-sign.com")]
    #[case("@example.com")]
    #[case("user@localhost")]
    #[case("user@example.")]
    #[case("user@.com")]
    #[case("user@@example.com")]
    #[case("us er@example.com")]
    fn test_invalid_emails(#[case] email: &str) {
        assert_eq!(validate_email(email), Err(ValidationError::EmailInvalid));
    }

    #[test]
    fn test_empty_email_is_required_error() {
        assert_eq!(validate_email("   "), Err(ValidationError::EmailRequired));
    }

    #[test]
    fn test_password_length_counts_characters() {
        assert_eq!(validate_password("1234567", 8), Err(ValidationError::PasswordTooShort { min: 8 }));
        assert_eq!(validate_password("12345678", 8), Ok(()));
        assert_eq!(validate_password("ééééééé", 8), Err(ValidationError::PasswordTooShort { min: 8 }));
    }

    #[test]
    fn test_login_reports_first_failure() {
        assert_eq!(validate_login("", "short", 8), Err(ValidationError::EmailRequired));
        assert_eq!(
            validate_login("a@b.co", "short", 8),
            Err(ValidationError::PasswordTooShort { min: 8 })
        );
        assert_eq!(validate_login("a@b.co", "long enough", 8), Ok(()));
    }

    #[test]
    fn test_signup_requires_name_first() {
        assert_eq!(validate_signup(" ", "bad", "x", 8), Err(ValidationError::NameRequired));
        assert_eq!(validate_signup("Ada", "ada@example.com", "analytical", 8), Ok(()));
    }

    #[test]
    fn test_reset_checks_length_then_match() {
        assert_eq!(
            validate_reset("short", "other", 8),
            Err(ValidationError::PasswordTooShort { min: 8 })
        );
        assert_eq!(
            validate_reset("password1", "password2", 8),
            Err(ValidationError::PasswordMismatch)
        );
        assert_eq!(validate_reset("password1", "password1", 8), Ok(()));
    }

    #[test]
    fn test_messages_are_user_facing() {
        assert_eq!(
            ValidationError::PasswordTooShort { min: 8 }.to_string(),
            "Password must be at least 8 characters"
        );
    }
}
