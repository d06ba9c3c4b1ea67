//! Attribute-level email validation for host model-validation frameworks.
//!
//! [`EmailValidation`] bundles the options a host passes when it declares an
//! attribute as an email: the length constraint, custom messages, whether an
//! absent value is acceptable, the lifecycle event the check runs on and an
//! optional activation condition. The host calls
//! [`validate`](EmailValidation::validate) at the right point of its own
//! lifecycle and turns the returned [`ValidationErrors`] into user-facing
//! errors.
//!
//! ```rust
//! use email_syntax::{EmailValidation, ValidationTrigger};
//!
//! struct User {
//!     signup_step: u8,
//! }
//!
//! let validation = EmailValidation::new()
//!     .maximum(64)
//!     .message("doesn't look like an email")
//!     .on(ValidationTrigger::Create)
//!     .condition(|user: &User| user.signup_step > 2);
//!
//! let user = User { signup_step: 3 };
//! let errors = validation
//!     .validate(&user, Some("nope"), ValidationTrigger::Create)
//!     .unwrap_err();
//! assert_eq!(errors.to_string(), "doesn't look like an email");
//!
//! // not checked on update
//! assert!(validation
//!     .validate(&user, Some("nope"), ValidationTrigger::Update)
//!     .is_ok());
//! ```

use std::{
    fmt::{self, Debug, Formatter},
    ops::RangeInclusive,
};

pub use self::error::{ValidationError, ValidationErrorKind, ValidationErrors};
use crate::pattern::{is_valid_email_syntax, DEFAULT_LENGTH_RANGE};

mod error;

/// Point of a record's lifecycle at which a validation runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum ValidationTrigger {
    /// Every save, whether it creates or updates the record
    #[default]
    Save,
    /// Only when the record is created
    Create,
    /// Only when an existing record is updated
    Update,
}

impl ValidationTrigger {
    /// Whether a validation declared for `self` runs on `event`.
    pub fn applies_to(self, event: ValidationTrigger) -> bool {
        self == ValidationTrigger::Save || self == event
    }
}

/// Bounds on the number of characters of a value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum LengthConstraint {
    /// Inclusive lower and upper bound
    #[cfg_attr(feature = "serde", serde(alias = "in"))]
    Within(RangeInclusive<usize>),
    /// Inclusive lower bound
    Minimum(usize),
    /// Inclusive upper bound
    Maximum(usize),
    /// Exact length
    Is(usize),
}

impl LengthConstraint {
    /// Returns the rule broken by a value of `len` characters, if any.
    pub fn check(&self, len: usize) -> Option<ValidationErrorKind> {
        match self {
            LengthConstraint::Within(range) if len < *range.start() => {
                Some(ValidationErrorKind::TooShort {
                    minimum: *range.start(),
                })
            }
            LengthConstraint::Within(range) if len > *range.end() => {
                Some(ValidationErrorKind::TooLong {
                    maximum: *range.end(),
                })
            }
            LengthConstraint::Minimum(minimum) if len < *minimum => {
                Some(ValidationErrorKind::TooShort { minimum: *minimum })
            }
            LengthConstraint::Maximum(maximum) if len > *maximum => {
                Some(ValidationErrorKind::TooLong { maximum: *maximum })
            }
            LengthConstraint::Is(expected) if len != *expected => {
                Some(ValidationErrorKind::WrongLength {
                    expected: *expected,
                })
            }
            _ => None,
        }
    }
}

impl Default for LengthConstraint {
    fn default() -> Self {
        LengthConstraint::Within(DEFAULT_LENGTH_RANGE)
    }
}

/// Options of an email attribute validation.
///
/// `R` is the record type handed to the activation condition; it defaults
/// to `()` for hosts that validate bare values.
///
/// **NOTE**: Enable feature "serde" to be able to serialize/deserialize it
/// using [serde](https://serde.rs/). The activation condition is never
/// serialized.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(bound = "", default, deny_unknown_fields)
)]
pub struct EmailValidation<R = ()> {
    length: LengthConstraint,
    message: Option<String>,
    too_short: Option<String>,
    too_long: Option<String>,
    wrong_length: Option<String>,
    allow_nil: bool,
    on: ValidationTrigger,
    #[cfg_attr(feature = "serde", serde(skip))]
    condition: Option<fn(&R) -> bool>,
}

impl EmailValidation {
    /// Creates a validation with the default options: length within
    /// `3..=384`, default messages, absent values rejected, run on every
    /// save, no condition.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<R> EmailValidation<R> {
    /// Replaces the length constraint
    pub fn length(mut self, length: LengthConstraint) -> Self {
        self.length = length;
        self
    }

    /// Requires a length within `range`
    pub fn within(self, range: RangeInclusive<usize>) -> Self {
        self.length(LengthConstraint::Within(range))
    }

    /// Requires at least `minimum` characters, with no upper bound
    pub fn minimum(self, minimum: usize) -> Self {
        self.length(LengthConstraint::Minimum(minimum))
    }

    /// Requires at most `maximum` characters, with no lower bound
    pub fn maximum(self, maximum: usize) -> Self {
        self.length(LengthConstraint::Maximum(maximum))
    }

    /// Requires exactly `len` characters
    pub fn exactly(self, len: usize) -> Self {
        self.length(LengthConstraint::Is(len))
    }

    /// Message for an invalid address.
    ///
    /// Also used for length errors when the constraint is a single
    /// minimum, maximum or exact length.
    pub fn message<S: Into<String>>(mut self, message: S) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Message when the value is too short, `%d` stands for the minimum
    pub fn too_short<S: Into<String>>(mut self, message: S) -> Self {
        self.too_short = Some(message.into());
        self
    }

    /// Message when the value is too long, `%d` stands for the maximum
    pub fn too_long<S: Into<String>>(mut self, message: S) -> Self {
        self.too_long = Some(message.into());
        self
    }

    /// Message when the value is not of the exact length, `%d` stands for
    /// the required length
    pub fn wrong_length<S: Into<String>>(mut self, message: S) -> Self {
        self.wrong_length = Some(message.into());
        self
    }

    /// Skips the validation when the value is absent
    pub fn allow_nil(mut self, allow_nil: bool) -> Self {
        self.allow_nil = allow_nil;
        self
    }

    /// Runs the validation only on `trigger`
    pub fn on(mut self, trigger: ValidationTrigger) -> Self {
        self.on = trigger;
        self
    }

    /// Runs the validation only when `condition` holds for the record.
    ///
    /// The record type of the validation becomes the argument type of
    /// `condition`.
    pub fn condition<T>(self, condition: fn(&T) -> bool) -> EmailValidation<T> {
        EmailValidation {
            length: self.length,
            message: self.message,
            too_short: self.too_short,
            too_long: self.too_long,
            wrong_length: self.wrong_length,
            allow_nil: self.allow_nil,
            on: self.on,
            condition: Some(condition),
        }
    }

    /// The configured length constraint
    pub fn length_constraint(&self) -> &LengthConstraint {
        &self.length
    }

    /// Validates `value`, an attribute of `record`, for the lifecycle `event`.
    ///
    /// The syntax and the length are checked independently: an invalid
    /// address and a length error are both reported, in that order.
    pub fn validate(
        &self,
        record: &R,
        value: Option<&str>,
        event: ValidationTrigger,
    ) -> Result<(), ValidationErrors> {
        if !self.on.applies_to(event) {
            return Ok(());
        }
        if let Some(condition) = self.condition {
            if !condition(record) {
                return Ok(());
            }
        }

        let value = match value {
            Some(value) => value,
            None if self.allow_nil => return Ok(()),
            None => "",
        };

        let length_error = self.length.check(value.chars().count());
        let mut errors = Vec::with_capacity(2);
        if !is_valid_email_syntax(value) {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidEmail,
                self.message
                    .as_deref()
                    .unwrap_or(ValidationErrorKind::InvalidEmail.default_message()),
            ));
        }
        if let Some(kind) = length_error {
            errors.push(ValidationError::new(kind, self.length_message(kind)));
        }

        match ValidationErrors::from_vec(errors) {
            None => Ok(()),
            Some(errors) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(codes = ?errors.codes(), "email validation failed");
                Err(errors)
            }
        }
    }

    fn length_message(&self, kind: ValidationErrorKind) -> &str {
        let specific = match kind {
            ValidationErrorKind::TooShort { .. } => self.too_short.as_deref(),
            ValidationErrorKind::TooLong { .. } => self.too_long.as_deref(),
            ValidationErrorKind::WrongLength { .. } => self.wrong_length.as_deref(),
            ValidationErrorKind::InvalidEmail => None,
        };
        let custom = match self.length {
            LengthConstraint::Within(_) => specific,
            _ => self.message.as_deref().or(specific),
        };
        custom.unwrap_or(kind.default_message())
    }
}

impl EmailValidation {
    /// Validates a bare value, for hosts without a record to pass to the
    /// condition.
    pub fn validate_value(
        &self,
        value: Option<&str>,
        event: ValidationTrigger,
    ) -> Result<(), ValidationErrors> {
        self.validate(&(), value, event)
    }
}

impl<R> Default for EmailValidation<R> {
    fn default() -> Self {
        Self {
            length: LengthConstraint::default(),
            message: None,
            too_short: None,
            too_long: None,
            wrong_length: None,
            allow_nil: false,
            on: ValidationTrigger::default(),
            condition: None,
        }
    }
}

impl<R> Clone for EmailValidation<R> {
    fn clone(&self) -> Self {
        Self {
            length: self.length.clone(),
            message: self.message.clone(),
            too_short: self.too_short.clone(),
            too_long: self.too_long.clone(),
            wrong_length: self.wrong_length.clone(),
            allow_nil: self.allow_nil,
            on: self.on,
            condition: self.condition,
        }
    }
}

impl<R> Debug for EmailValidation<R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmailValidation")
            .field("length", &self.length)
            .field("message", &self.message)
            .field("too_short", &self.too_short)
            .field("too_long", &self.too_long)
            .field("wrong_length", &self.wrong_length)
            .field("allow_nil", &self.allow_nil)
            .field("on", &self.on)
            .field("condition", &self.condition.is_some())
            .finish()
    }
}
