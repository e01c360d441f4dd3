use serde::{Deserialize, Serialize};

use super::validation::{check_field, FieldId, Validity};

/// What the dialog would send upstream once every field validates
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RegisterPayload {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegisterState {
    pub is_open: bool,
    pub username: String,
    pub email: String,
    pub password: String,
    /// Reveal-while-pressed state of the password field
    pub password_visible: bool,
    username_error: Option<Validity>,
    email_error: Option<Validity>,
    password_error: Option<Validity>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RegisterAction {
    Open,
    /// Close from any path: close button, cross icon, backdrop click, or a
    /// valid submit. Resets fields and clears every error display.
    Close,
    SetField(FieldId, String),
    Blur(FieldId),
    SetPasswordVisible(bool),
}

/// Result of submit-time validation
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// All fields valid; the dialog logs the payload and closes
    Accepted(RegisterPayload),
    /// At least one field invalid; focus goes to the named field
    Rejected { first_invalid: FieldId },
}

impl RegisterState {
    pub fn reduce_in_place(&mut self, action: RegisterAction) {
        match action {
            RegisterAction::Open => {
                self.is_open = true;
            }
            RegisterAction::Close => {
                *self = RegisterState::default();
            }
            RegisterAction::SetField(field, value) => {
                *self.value_mut(field) = value;
                // A field already marked invalid revalidates on every
                // keystroke until it turns valid again
                if self.error_slot(field).is_some() {
                    self.validate_field(field);
                }
            }
            RegisterAction::Blur(field) => {
                self.validate_field(field);
            }
            RegisterAction::SetPasswordVisible(visible) => {
                self.password_visible = visible;
            }
        }
    }

    /// Validates all fields. On any failure every per-field message is set
    /// and the first invalid field (in focus order) is reported.
    pub fn submit(&mut self) -> SubmitOutcome {
        let mut first_invalid = None;
        for field in FieldId::ALL {
            let validity = self.validate_field(field);
            if !validity.is_valid() && first_invalid.is_none() {
                first_invalid = Some(field);
            }
        }

        match first_invalid {
            Some(field) => SubmitOutcome::Rejected {
                first_invalid: field,
            },
            None => SubmitOutcome::Accepted(RegisterPayload {
                username: self.username.trim().to_string(),
                email: self.email.trim().to_string(),
                password: self.password.clone(),
            }),
        }
    }

    pub fn value(&self, field: FieldId) -> &str {
        match field {
            FieldId::Username => &self.username,
            FieldId::Email => &self.email,
            FieldId::Password => &self.password,
        }
    }

    /// The field's current visible invalidity, if any
    pub fn error(&self, field: FieldId) -> Option<Validity> {
        *match field {
            FieldId::Username => &self.username_error,
            FieldId::Email => &self.email_error,
            FieldId::Password => &self.password_error,
        }
    }

    pub fn has_visible_errors(&self) -> bool {
        FieldId::ALL.iter().any(|f| self.error(*f).is_some())
    }

    fn value_mut(&mut self, field: FieldId) -> &mut String {
        match field {
            FieldId::Username => &mut self.username,
            FieldId::Email => &mut self.email,
            FieldId::Password => &mut self.password,
        }
    }

    fn error_slot(&mut self, field: FieldId) -> &mut Option<Validity> {
        match field {
            FieldId::Username => &mut self.username_error,
            FieldId::Email => &mut self.email_error,
            FieldId::Password => &mut self.password_error,
        }
    }

    fn validate_field(&mut self, field: FieldId) -> Validity {
        let validity = check_field(self.value(field), &field.constraints());
        *self.error_slot(field) = if validity.is_valid() {
            None
        } else {
            Some(validity)
        };
        validity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_state() -> RegisterState {
        let mut state = RegisterState {
            is_open: true,
            ..Default::default()
        };
        state.reduce_in_place(RegisterAction::SetField(
            FieldId::Username,
            "ada".to_string(),
        ));
        state.reduce_in_place(RegisterAction::SetField(
            FieldId::Email,
            "ada@example.com".to_string(),
        ));
        state.reduce_in_place(RegisterAction::SetField(
            FieldId::Password,
            "lovelace1842".to_string(),
        ));
        state
    }

    #[test]
    fn test_blank_required_field_blocks_submit_and_reports_first_invalid() {
        let mut state = filled_state();
        state.reduce_in_place(RegisterAction::SetField(FieldId::Username, String::new()));

        let outcome = state.submit();

        assert_eq!(
            outcome,
            SubmitOutcome::Rejected {
                first_invalid: FieldId::Username
            }
        );
        assert_eq!(state.error(FieldId::Username), Some(Validity::Missing));
        assert_eq!(state.error(FieldId::Email), None);
    }

    #[test]
    fn test_valid_submit_yields_trimmed_payload() {
        let mut state = filled_state();
        state.reduce_in_place(RegisterAction::SetField(
            FieldId::Username,
            "  ada  ".to_string(),
        ));

        match state.submit() {
            SubmitOutcome::Accepted(payload) => {
                assert_eq!(payload.username, "ada");
                assert_eq!(payload.email, "ada@example.com");
                assert_eq!(payload.password, "lovelace1842");
            }
            other => panic!("expected Accepted, got {:?}", other),
        }
        assert!(!state.has_visible_errors());
    }

    #[test]
    fn test_blur_validates_and_input_revalidates_until_valid() {
        let mut state = RegisterState {
            is_open: true,
            ..Default::default()
        };

        // Untouched field shows nothing
        assert_eq!(state.error(FieldId::Password), None);

        state.reduce_in_place(RegisterAction::Blur(FieldId::Password));
        assert_eq!(state.error(FieldId::Password), Some(Validity::Missing));

        // Marked invalid, so every input event revalidates
        state.reduce_in_place(RegisterAction::SetField(
            FieldId::Password,
            "short".to_string(),
        ));
        assert_eq!(
            state.error(FieldId::Password),
            Some(Validity::TooShort { min: 8 })
        );

        state.reduce_in_place(RegisterAction::SetField(
            FieldId::Password,
            "long enough now".to_string(),
        ));
        assert_eq!(state.error(FieldId::Password), None);
    }

    #[test]
    fn test_input_before_blur_does_not_validate() {
        let mut state = RegisterState {
            is_open: true,
            ..Default::default()
        };
        state.reduce_in_place(RegisterAction::SetField(
            FieldId::Email,
            "incomplete@".to_string(),
        ));
        assert_eq!(state.error(FieldId::Email), None);
    }

    #[test]
    fn test_close_resets_fields_and_clears_all_errors() {
        let mut state = filled_state();
        state.reduce_in_place(RegisterAction::SetField(FieldId::Email, "bad".to_string()));
        state.reduce_in_place(RegisterAction::Blur(FieldId::Email));
        state.reduce_in_place(RegisterAction::Blur(FieldId::Username));
        assert!(state.has_visible_errors());

        state.reduce_in_place(RegisterAction::Close);

        assert!(!state.is_open);
        assert!(!state.has_visible_errors());
        assert!(state.username.is_empty());
        assert!(state.email.is_empty());
        assert!(state.password.is_empty());
        assert!(!state.password_visible);
    }

    #[test]
    fn test_password_visible_only_while_pressed() {
        let mut state = RegisterState::default();
        state.reduce_in_place(RegisterAction::SetPasswordVisible(true));
        assert!(state.password_visible);
        state.reduce_in_place(RegisterAction::SetPasswordVisible(false));
        assert!(!state.password_visible);
    }
}
