use crate::domain::Notice;
use crate::forms::{FieldError, Form, MIN_PASSWORD_LENGTH, require, require_email};

#[derive(Debug, Clone, Default)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub agree_terms: bool,
}

impl Form for SignupForm {
    const NAME: &'static str = "signup";

    fn validate(&self) -> Vec<(&'static str, FieldError)> {
        let mut errors = Vec::new();
        require(&mut errors, "name", &self.name);
        require_email(&mut errors, "email", &self.email);

        // A mismatch is reported first, the length only once both entries agree.
        if self.password != self.confirm_password {
            errors.push(("confirm_password", FieldError::PasswordMismatch));
        } else if self.password.chars().count() < MIN_PASSWORD_LENGTH {
            errors.push(("password", FieldError::PasswordTooShort));
        }

        if !self.agree_terms {
            errors.push(("agree_terms", FieldError::NotAccepted));
        }
        errors
    }

    fn success_notice(&self) -> Notice {
        Notice::info("Account Created", "Your account has been created successfully.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn valid_form() -> SignupForm {
        SignupForm {
            name: "Jordan Doe".to_string(),
            email: "jordan@example.com".to_string(),
            password: "correct horse".to_string(),
            confirm_password: "correct horse".to_string(),
            agree_terms: true,
        }
    }

    #[test]
    fn accepts_a_valid_form() {
        assert_eq!(valid_form().submit().map(|notice| notice.title), Ok("Account Created".to_string()));
    }

    #[test]
    fn reports_a_mismatch_before_the_length() {
        let form = SignupForm {
            password: "short".to_string(),
            confirm_password: "shorter".to_string(),
            ..valid_form()
        };

        let errors = form.submit().unwrap_err();
        assert_eq!(errors.errors, vec![("confirm_password", FieldError::PasswordMismatch)]);
    }

    #[test]
    fn rejects_a_short_password() {
        let form = SignupForm {
            password: "1234567".to_string(),
            confirm_password: "1234567".to_string(),
            ..valid_form()
        };

        let errors = form.submit().unwrap_err();
        assert_eq!(errors.get("password"), Some(&FieldError::PasswordTooShort));
        assert_eq!(errors.to_string(), "1 field(s) need attention");
    }

    #[test]
    fn accepts_exactly_eight_characters() {
        let form = SignupForm {
            password: "12345678".to_string(),
            confirm_password: "12345678".to_string(),
            ..valid_form()
        };

        assert!(form.submit().is_ok());
    }

    #[test]
    fn collects_every_invalid_field() {
        let errors = SignupForm::default().submit().unwrap_err();

        assert_eq!(
            errors.errors,
            vec![
                ("name", FieldError::Required),
                ("email", FieldError::Required),
                ("password", FieldError::PasswordTooShort),
                ("agree_terms", FieldError::NotAccepted),
            ]
        );
    }
}
