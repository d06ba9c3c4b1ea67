//! Email address syntax validation following the [RFC 822] address grammar.
//!
//! The grammar is compiled once into a single anchored pattern
//! ([`address_pattern`]) and exposed through two pure checks:
//!
//! * [`is_valid_email_syntax`] tells whether a string is an RFC 822 `addr-spec`
//! * [`is_valid_email_length`] tells whether its length is within inclusive bounds
//!
//! On top of these the crate provides a validated [`Address`] type and an
//! [`EmailValidation`] configuration meant to be driven by a host's own
//! model-validation machinery.
//!
//! ## Usage
//!
//! ```rust
//! use email_syntax::{is_valid_email_length, is_valid_email_syntax};
//!
//! assert!(is_valid_email_syntax("\"quoted user\"@example.com"));
//! assert!(is_valid_email_syntax("user@[127.0.0.1]"));
//! assert!(!is_valid_email_syntax("user@@example.com"));
//!
//! assert!(is_valid_email_length("a@b.c", 3, 384));
//! assert!(!is_valid_email_length("ab", 3, 384));
//! ```
//!
//! The typed API:
//!
//! ```rust
//! use email_syntax::{Address, EmailValidation, ValidationTrigger};
//!
//! # use std::error::Error;
//! # fn main() -> Result<(), Box<dyn Error>> {
//! let address: Address = "john.doe@example.com".parse()?;
//! assert_eq!(address.local_part(), "john.doe");
//! assert_eq!(address.domain(), "example.com");
//!
//! let validation = EmailValidation::new();
//! let errors = validation
//!     .validate_value(Some("not an address"), ValidationTrigger::Create)
//!     .unwrap_err();
//! assert_eq!(errors.codes(), vec!["invalid_email"]);
//! # Ok(())
//! # }
//! ```
//!
//! ## Features
//!
//! * **serde**: `Serialize`/`Deserialize` for [`Address`] and [`EmailValidation`]
//! * **tracing**: debug logging of pattern construction and rejected values
//!
//! The grammar is the one of RFC 822 only: no folding whitespace, no comments
//! and no internationalized domains or local parts.
//!
//! [RFC 822]: https://datatracker.ietf.org/doc/html/rfc822

#![doc(html_root_url = "https://docs.rs/crate/email-syntax/0.1.0")]
#![forbid(unsafe_code)]
#![deny(
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications,
    missing_debug_implementations,
    missing_docs,
    rustdoc::broken_intra_doc_links
)]

pub mod address;
mod pattern;
pub mod validation;

pub use crate::{
    address::{Address, AddressError},
    pattern::{
        address_pattern, is_valid_email, is_valid_email_length, is_valid_email_syntax,
        DEFAULT_LENGTH_RANGE, DEFAULT_MAX_LENGTH, DEFAULT_MIN_LENGTH,
    },
    validation::{
        EmailValidation, LengthConstraint, ValidationError, ValidationErrorKind,
        ValidationErrors, ValidationTrigger,
    },
};
