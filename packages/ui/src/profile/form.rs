//! Plain validators and form state for the profile editor.
//!
//! Validators map a field value to `Some(message)` or `None`; they know
//! nothing about rendering. An empty field is always valid — the form only
//! submits the fields the user actually filled in.

use api::UserUpdate;

/// A name, if provided, needs at least 2 characters.
pub fn validate_name(value: &str) -> Option<&'static str> {
    if value.is_empty() || value.chars().count() >= 2 {
        None
    } else {
        Some("Name must be at least 2 characters")
    }
}

/// An email, if provided, must look like `user@host`: no whitespace, with an
/// `@` that is neither the first nor the last character.
pub fn validate_email(value: &str) -> Option<&'static str> {
    if value.is_empty() {
        return None;
    }
    let chars: Vec<char> = value.chars().collect();
    let shape_ok = !chars.iter().any(|c| c.is_whitespace())
        && chars.len() >= 3
        && chars[1..chars.len() - 1].contains(&'@');
    if shape_ok {
        None
    } else {
        Some("The email you entered is not valid")
    }
}

/// A password, if provided, needs at least 8 characters.
pub fn validate_password(value: &str) -> Option<&'static str> {
    if value.is_empty() || value.chars().count() >= 8 {
        None
    } else {
        Some("Password must be at least 8 characters")
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldErrors {
    pub name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub password: Option<&'static str>,
}

impl FieldErrors {
    pub fn is_clear(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.password.is_none()
    }
}

/// Transient form state for the edit-profile view. Fields start empty and are
/// re-validated on every keystroke through the `set_*` methods.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProfileForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub errors: FieldErrors,
}

impl ProfileForm {
    pub fn set_name(&mut self, value: String) {
        self.errors.name = validate_name(&value);
        self.name = value;
    }

    pub fn set_email(&mut self, value: String) {
        self.errors.email = validate_email(&value);
        self.email = value;
    }

    pub fn set_password(&mut self, value: String) {
        self.errors.password = validate_password(&value);
        self.password = value;
    }

    /// Re-validate every field; true when all of them pass.
    pub fn validate_all(&mut self) -> bool {
        self.errors = FieldErrors {
            name: validate_name(&self.name),
            email: validate_email(&self.email),
            password: validate_password(&self.password),
        };
        self.errors.is_clear()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Build the partial update payload. Empty fields are omitted so the
    /// server keeps its stored values.
    pub fn to_update(&self, user_id: &str) -> UserUpdate {
        fn non_empty(value: &str) -> Option<String> {
            (!value.is_empty()).then(|| value.to_string())
        }

        UserUpdate {
            id: user_id.to_string(),
            name: non_empty(&self.name),
            email: non_empty(&self.email),
            password: non_empty(&self.password),
            avatar: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_accepts_empty_or_two_plus_characters() {
        assert_eq!(validate_name(""), None);
        assert_eq!(validate_name("Jo"), None);
        assert_eq!(validate_name("Johanna"), None);
        assert!(validate_name("J").is_some());
    }

    #[test]
    fn email_accepts_empty_and_user_at_host() {
        assert_eq!(validate_email(""), None);
        assert_eq!(validate_email("a@x.com"), None);
        assert_eq!(validate_email("a@b"), None);

        assert!(validate_email("plainaddress").is_some());
        assert!(validate_email("@host").is_some());
        assert!(validate_email("user@").is_some());
        assert!(validate_email("user name@host").is_some());
        assert!(validate_email("user@ho st").is_some());
    }

    #[test]
    fn password_accepts_empty_or_eight_plus_characters() {
        assert_eq!(validate_password(""), None);
        assert_eq!(validate_password("12345678"), None);
        assert!(validate_password("1234567").is_some());
    }

    #[test]
    fn keystroke_validation_tracks_the_field() {
        let mut form = ProfileForm::default();
        form.set_name("J".to_string());
        assert!(form.errors.name.is_some());
        form.set_name("Jo".to_string());
        assert!(form.errors.name.is_none());

        form.set_password("short".to_string());
        assert!(form.errors.password.is_some());
        form.set_password(String::new());
        assert!(form.errors.password.is_none());
    }

    #[test]
    fn payload_omits_empty_fields() {
        let form = ProfileForm {
            name: String::new(),
            email: String::new(),
            password: "x".to_string(),
            errors: FieldErrors::default(),
        };
        let update = form.to_update("42");
        assert_eq!(update.name, None);
        assert_eq!(update.email, None);
        assert_eq!(update.password.as_deref(), Some("x"));

        let form = ProfileForm {
            password: String::new(),
            ..ProfileForm::default()
        };
        let update = form.to_update("42");
        assert_eq!(update.password, None);
    }

    #[test]
    fn reset_clears_values_and_errors() {
        let mut form = ProfileForm::default();
        form.set_name("J".to_string());
        form.set_email("nope".to_string());
        assert!(!form.validate_all());

        form.reset();
        assert_eq!(form, ProfileForm::default());
        assert!(form.validate_all());
    }
}
