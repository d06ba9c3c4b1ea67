//! Error types reported by [`EmailValidation`](super::EmailValidation)

use std::{
    error::Error as StdError,
    fmt::{self, Display, Formatter},
    slice::Iter,
    vec::IntoIter,
};

pub(super) const DEFAULT_INVALID_EMAIL: &str = "is an invalid email";
pub(super) const DEFAULT_TOO_SHORT: &str = "is too short (minimum is %d characters)";
pub(super) const DEFAULT_TOO_LONG: &str = "is too long (maximum is %d characters)";
pub(super) const DEFAULT_WRONG_LENGTH: &str = "is the wrong length (should be %d characters)";

/// The rule a value broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ValidationErrorKind {
    /// Not an RFC 822 address
    InvalidEmail,
    /// Fewer characters than allowed
    TooShort {
        /// Inclusive lower bound
        minimum: usize,
    },
    /// More characters than allowed
    TooLong {
        /// Inclusive upper bound
        maximum: usize,
    },
    /// Not exactly the required number of characters
    WrongLength {
        /// Required length
        expected: usize,
    },
}

impl ValidationErrorKind {
    /// Stable identifier of the rule, suitable for message lookups.
    pub fn code(&self) -> &'static str {
        match self {
            ValidationErrorKind::InvalidEmail => "invalid_email",
            ValidationErrorKind::TooShort { .. } => "too_short",
            ValidationErrorKind::TooLong { .. } => "too_long",
            ValidationErrorKind::WrongLength { .. } => "wrong_length",
        }
    }

    fn bound(&self) -> Option<usize> {
        match *self {
            ValidationErrorKind::InvalidEmail => None,
            ValidationErrorKind::TooShort { minimum } => Some(minimum),
            ValidationErrorKind::TooLong { maximum } => Some(maximum),
            ValidationErrorKind::WrongLength { expected } => Some(expected),
        }
    }

    pub(super) fn default_message(&self) -> &'static str {
        match self {
            ValidationErrorKind::InvalidEmail => DEFAULT_INVALID_EMAIL,
            ValidationErrorKind::TooShort { .. } => DEFAULT_TOO_SHORT,
            ValidationErrorKind::TooLong { .. } => DEFAULT_TOO_LONG,
            ValidationErrorKind::WrongLength { .. } => DEFAULT_WRONG_LENGTH,
        }
    }
}

/// A single broken rule together with its rendered message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    kind: ValidationErrorKind,
    message: String,
}

impl ValidationError {
    /// Renders `template`, replacing `%d` with the bound of `kind`.
    pub(super) fn new(kind: ValidationErrorKind, template: &str) -> Self {
        let message = match kind.bound() {
            Some(bound) => template.replace("%d", &bound.to_string()),
            None => template.to_owned(),
        };
        Self { kind, message }
    }

    /// The rule that was broken
    pub fn kind(&self) -> ValidationErrorKind {
        self.kind
    }

    /// Shorthand for `self.kind().code()`
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// The rendered message, e.g. `is too short (minimum is 3 characters)`
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl StdError for ValidationError {}

/// Every rule a value broke, in the order they were checked.
///
/// Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    pub(super) fn from_vec(errors: Vec<ValidationError>) -> Option<Self> {
        if errors.is_empty() {
            None
        } else {
            Some(Self(errors))
        }
    }

    /// Iterates over the broken rules
    pub fn iter(&self) -> Iter<'_, ValidationError> {
        self.0.iter()
    }

    /// Number of broken rules
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`, present for symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The codes of the broken rules
    pub fn codes(&self) -> Vec<&'static str> {
        self.0.iter().map(ValidationError::code).collect()
    }

    /// Whether a rule of the given code was broken
    pub fn contains(&self, code: &str) -> bool {
        self.0.iter().any(|error| error.code() == code)
    }
}

impl Display for ValidationErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            Display::fmt(error, f)?;
        }
        Ok(())
    }
}

impl StdError for ValidationErrors {}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn render_bound() {
        let error = ValidationError::new(
            ValidationErrorKind::TooShort { minimum: 3 },
            DEFAULT_TOO_SHORT,
        );
        assert_eq!(error.message(), "is too short (minimum is 3 characters)");
        assert_eq!(error.code(), "too_short");

        let error = ValidationError::new(
            ValidationErrorKind::WrongLength { expected: 12 },
            "needs %d, got something else",
        );
        assert_eq!(error.to_string(), "needs 12, got something else");
    }

    #[test]
    fn invalid_email_keeps_template() {
        let error = ValidationError::new(ValidationErrorKind::InvalidEmail, "100%d wrong");
        assert_eq!(error.message(), "100%d wrong");
    }

    #[test]
    fn display_joins_messages() {
        let errors = ValidationErrors::from_vec(vec![
            ValidationError::new(ValidationErrorKind::InvalidEmail, DEFAULT_INVALID_EMAIL),
            ValidationError::new(ValidationErrorKind::TooLong { maximum: 5 }, DEFAULT_TOO_LONG),
        ])
        .unwrap();
        assert_eq!(
            errors.to_string(),
            "is an invalid email, is too long (maximum is 5 characters)"
        );
        assert_eq!(errors.codes(), vec!["invalid_email", "too_long"]);
        assert!(errors.contains("too_long"));
        assert!(!errors.contains("too_short"));
    }

    #[test]
    fn never_empty() {
        assert_eq!(ValidationErrors::from_vec(Vec::new()), None);
    }
}
