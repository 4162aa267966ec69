use std::fmt;

use super::field_read::{text_or_empty, FieldRead};
use super::request::CredentialChangeRequest;

/// Raw reads of the four inputs of the change password form.
#[derive(Debug, Clone)]
pub struct CredentialFields {
    pub email: FieldRead,
    pub old_password: FieldRead,
    pub new_password: FieldRead,
    pub confirm_password: FieldRead,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    EmailRequired,
    CurrentPasswordRequired,
    PasswordRequired,
    ConfirmationRequired,
    PasswordMismatch,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            ValidationError::EmailRequired => "Email is required.",
            ValidationError::CurrentPasswordRequired => {
                "Current password is required."
            }
            ValidationError::PasswordRequired => "Password is required.",
            ValidationError::ConfirmationRequired => {
                "Re-typed password is required."
            }
            ValidationError::PasswordMismatch => "Password entries must match.",
        };
        write!(f, "{}", message)
    }
}

impl std::error::Error for ValidationError {}

/// Check the fields in form order and stop at the first rule that fails.
pub fn validate_submission(
    fields: &CredentialFields,
) -> Result<CredentialChangeRequest, ValidationError> {
    let email = text_or_empty("email", &fields.email).trim().to_string();
    let old_password = text_or_empty("old password", &fields.old_password);
    let new_password = text_or_empty("new password", &fields.new_password);
    let confirm_password =
        text_or_empty("password confirmation", &fields.confirm_password);

    if email.is_empty() {
        return Err(ValidationError::EmailRequired);
    }
    if old_password.is_empty() {
        return Err(ValidationError::CurrentPasswordRequired);
    }
    if new_password.is_empty() {
        return Err(ValidationError::PasswordRequired);
    }
    if confirm_password.is_empty() {
        return Err(ValidationError::ConfirmationRequired);
    }
    if new_password != confirm_password {
        return Err(ValidationError::PasswordMismatch);
    }

    Ok(CredentialChangeRequest {
        email,
        old_password,
        new_password,
        confirm_password,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FieldReadError;

    fn text(value: &str) -> FieldRead {
        Ok(Some(value.to_string()))
    }

    fn fields(
        email: &str,
        old_password: &str,
        new_password: &str,
        confirm_password: &str,
    ) -> CredentialFields {
        CredentialFields {
            email: text(email),
            old_password: text(old_password),
            new_password: text(new_password),
            confirm_password: text(confirm_password),
        }
    }

    #[test]
    fn test_rules_apply_in_order() {
        let cases = vec![
            (fields("", "", "", ""), ValidationError::EmailRequired),
            (fields("   ", "a", "b", "b"), ValidationError::EmailRequired),
            (
                fields("a@b.org", "", "", ""),
                ValidationError::CurrentPasswordRequired,
            ),
            (
                fields("a@b.org", "old", "", "x"),
                ValidationError::PasswordRequired,
            ),
            (
                fields("a@b.org", "old", "new", ""),
                ValidationError::ConfirmationRequired,
            ),
            (
                fields("a@b.org", "old", "new", "New"),
                ValidationError::PasswordMismatch,
            ),
        ];
        for (input, expected) in cases {
            assert_eq!(validate_submission(&input).unwrap_err(), expected);
        }
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            ValidationError::ConfirmationRequired.to_string(),
            "Re-typed password is required."
        );
        assert_eq!(
            ValidationError::PasswordMismatch.to_string(),
            "Password entries must match."
        );
    }

    #[test]
    fn test_passwords_compared_by_content() {
        // two separately allocated strings with the same content
        let new_password = String::from("s3cret-pass");
        let confirm_password: String = "s3cret-".to_string() + "pass";
        let input = CredentialFields {
            email: text(" user@example.org "),
            old_password: text("old"),
            new_password: Ok(Some(new_password)),
            confirm_password: Ok(Some(confirm_password)),
        };
        let request = validate_submission(&input).unwrap();
        assert_eq!(request.email, "user@example.org");
        assert_eq!(request.new_password, "s3cret-pass");
    }

    #[test]
    fn test_absent_and_failed_reads_count_as_empty() {
        let mut input = fields("a@b.org", "old", "new", "new");
        input.old_password = Ok(None);
        assert_eq!(
            validate_submission(&input).unwrap_err(),
            ValidationError::CurrentPasswordRequired
        );

        input.old_password = text("old");
        input.email =
            Err(FieldReadError::NotAnInput("email".to_string()));
        assert_eq!(
            validate_submission(&input).unwrap_err(),
            ValidationError::EmailRequired
        );
    }
}
