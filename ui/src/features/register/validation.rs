//! Field constraint checks for the registration dialog.
//!
//! Mirrors the browser's constraint-validation categories: a field is either
//! valid, missing, too short, or the wrong format for its kind.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    Username,
    Email,
    Password,
}

impl FieldId {
    /// Declaration order doubles as focus order for submit-time validation
    pub const ALL: [FieldId; 3] = [FieldId::Username, FieldId::Email, FieldId::Password];

    pub fn label(&self) -> &'static str {
        match self {
            FieldId::Username => "Username",
            FieldId::Email => "Email",
            FieldId::Password => "Password",
        }
    }

    pub fn constraints(&self) -> FieldConstraints {
        match self {
            FieldId::Username => FieldConstraints {
                required: true,
                min_len: Some(3),
                kind: FieldKind::Text,
            },
            FieldId::Email => FieldConstraints {
                required: true,
                min_len: None,
                kind: FieldKind::Email,
            },
            FieldId::Password => FieldConstraints {
                required: true,
                min_len: Some(8),
                kind: FieldKind::Password,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Password,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldConstraints {
    pub required: bool,
    pub min_len: Option<usize>,
    pub kind: FieldKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validity {
    Valid,
    Missing,
    TooShort { min: usize },
    TypeMismatch,
}

impl Validity {
    pub fn is_valid(&self) -> bool {
        matches!(self, Validity::Valid)
    }
}

/// Checks `value` against `constraints`. Checks are ordered the way the
/// browser reports them: missing first, then length, then format.
pub fn check_field(value: &str, constraints: &FieldConstraints) -> Validity {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        if constraints.required {
            return Validity::Missing;
        }
        return Validity::Valid;
    }

    if let Some(min) = constraints.min_len {
        if trimmed.chars().count() < min {
            return Validity::TooShort { min };
        }
    }

    if constraints.kind == FieldKind::Email && !is_plausible_email(trimmed) {
        return Validity::TypeMismatch;
    }

    Validity::Valid
}

/// Per-field message shown in the inline error span, `None` when valid
pub fn validation_message(field: FieldId, validity: &Validity) -> Option<String> {
    match validity {
        Validity::Valid => None,
        Validity::Missing => Some(format!("{} is required", field.label())),
        Validity::TooShort { min } => Some(format!(
            "{} must be at least {} characters",
            field.label(),
            min
        )),
        Validity::TypeMismatch => Some("Please enter a valid email address".to_string()),
    }
}

// Basic email validation: exactly one @ and at least one . in the domain
fn is_plausible_email(email: &str) -> bool {
    let parts: Vec<&str> = email.split('@').collect();
    if parts.len() != 2 {
        return false;
    }

    let local_part = parts[0];
    let domain_part = parts[1];

    !local_part.is_empty() && domain_part.contains('.') && domain_part.len() > 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_blank_is_missing() {
        for field in FieldId::ALL {
            assert_eq!(check_field("", &field.constraints()), Validity::Missing);
            assert_eq!(check_field("   ", &field.constraints()), Validity::Missing);
        }
    }

    #[test]
    fn test_min_length_boundaries() {
        let c = FieldId::Password.constraints();
        assert_eq!(check_field("short", &c), Validity::TooShort { min: 8 });
        assert_eq!(check_field("exactly8", &c), Validity::Valid);
    }

    #[test]
    fn test_email_format() {
        let c = FieldId::Email.constraints();
        assert_eq!(check_field("ada@example.com", &c), Validity::Valid);
        assert_eq!(check_field("not-an-email", &c), Validity::TypeMismatch);
        assert_eq!(check_field("two@@example.com", &c), Validity::TypeMismatch);
        assert_eq!(check_field("@example.com", &c), Validity::TypeMismatch);
        assert_eq!(check_field("ada@nodot", &c), Validity::TypeMismatch);
    }

    #[test]
    fn test_messages_distinguish_failure_kinds() {
        assert_eq!(
            validation_message(FieldId::Username, &Validity::Missing).unwrap(),
            "Username is required"
        );
        assert_eq!(
            validation_message(FieldId::Password, &Validity::TooShort { min: 8 }).unwrap(),
            "Password must be at least 8 characters"
        );
        assert_eq!(
            validation_message(FieldId::Email, &Validity::TypeMismatch).unwrap(),
            "Please enter a valid email address"
        );
        assert!(validation_message(FieldId::Username, &Validity::Valid).is_none());
    }
}
