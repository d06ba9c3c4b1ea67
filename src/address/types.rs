//! Representation of an email address

use std::{
    error::Error,
    ffi::OsStr,
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use crate::pattern::{address_pattern, DEFAULT_MAX_LENGTH, DEFAULT_MIN_LENGTH};

/// Represents a syntactically valid RFC 822 email address.
///
/// The address is kept exactly as given: the local part is neither unquoted
/// nor lowercased and domain literals keep their brackets.
///
/// **NOTE**: Enable feature "serde" to be able to serialize/deserialize it using [serde](https://serde.rs/).
///
/// # Examples
///
/// ```
/// use email_syntax::Address;
///
/// # use std::error::Error;
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let address = "\"john doe\"@[192.168.0.1]".parse::<Address>()?;
/// assert_eq!(address.local_part(), "\"john doe\"");
/// assert_eq!(address.domain(), "[192.168.0.1]");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialOrd, Ord, PartialEq, Eq, Hash)]
pub struct Address {
    /// Complete address
    serialized: String,
    /// Index of the '@' separating local part and domain
    at: usize,
}

impl Address {
    /// Gets the local part of the `Address`, the text before the separating `@`.
    ///
    /// # Examples
    ///
    /// ```
    /// use email_syntax::Address;
    ///
    /// # use std::error::Error;
    /// # fn main() -> Result<(), Box<dyn Error>> {
    /// let address = "\"a@b\"@example.com".parse::<Address>()?;
    /// assert_eq!(address.local_part(), "\"a@b\"");
    /// # Ok(())
    /// # }
    /// ```
    pub fn local_part(&self) -> &str {
        &self.serialized[..self.at]
    }

    /// Gets the domain of the `Address`, the text after the separating `@`.
    pub fn domain(&self) -> &str {
        &self.serialized[self.at + 1..]
    }

    /// Gets the whole address.
    pub fn as_str(&self) -> &str {
        &self.serialized
    }

    /// Consumes the `Address`, returning the underlying string.
    pub fn into_inner(self) -> String {
        self.serialized
    }
}

impl Display for Address {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.serialized)
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(val: &str) -> Result<Self, AddressError> {
        let at = check_address(val)?;
        Ok(Address {
            serialized: val.into(),
            at,
        })
    }
}

impl TryFrom<String> for Address {
    type Error = AddressError;

    fn try_from(serialized: String) -> Result<Self, AddressError> {
        let at = check_address(&serialized)?;
        Ok(Address { serialized, at })
    }
}

impl TryFrom<&str> for Address {
    type Error = AddressError;

    fn try_from(val: &str) -> Result<Self, AddressError> {
        val.parse()
    }
}

impl From<Address> for String {
    fn from(address: Address) -> String {
        address.serialized
    }
}

impl AsRef<str> for Address {
    fn as_ref(&self) -> &str {
        &self.serialized
    }
}

impl AsRef<OsStr> for Address {
    fn as_ref(&self) -> &OsStr {
        self.serialized.as_ref()
    }
}

/// Returns the index of the separating `@`.
fn check_address(val: &str) -> Result<usize, AddressError> {
    let len = val.chars().count();
    if len < DEFAULT_MIN_LENGTH {
        return Err(AddressError::TooShort);
    }
    if len > DEFAULT_MAX_LENGTH {
        return Err(AddressError::TooLong);
    }

    // A match only spans 7-bit bytes, so the group offsets are char boundaries.
    let Some(local_part) = address_pattern()
        .captures(val.as_bytes())
        .and_then(|captures| captures.get(1))
    else {
        #[cfg(feature = "tracing")]
        tracing::trace!(len, "address rejected by address grammar");
        return Err(AddressError::InvalidSyntax);
    };
    Ok(local_part.end())
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[non_exhaustive]
/// Errors in email addresses parsing
pub enum AddressError {
    /// Shorter than the minimum address length
    TooShort,
    /// Longer than the maximum address length
    TooLong,
    /// Not an RFC 822 address
    InvalidSyntax,
}

impl Error for AddressError {}

impl Display for AddressError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            AddressError::TooShort => write!(
                f,
                "Email address is too short (minimum is {DEFAULT_MIN_LENGTH} characters)"
            ),
            AddressError::TooLong => write!(
                f,
                "Email address is too long (maximum is {DEFAULT_MAX_LENGTH} characters)"
            ),
            AddressError::InvalidSyntax => f.write_str("Invalid email address syntax"),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn ascii_address() {
        let addr = Address::from_str("something@example.com").unwrap();
        assert_eq!(addr.local_part(), "something");
        assert_eq!(addr.domain(), "example.com");
        assert_eq!(addr.to_string(), "something@example.com");
    }

    #[test]
    fn domain_literal_address() {
        let addr = Address::from_str("something@[127.0.0.1]").unwrap();
        assert_eq!(addr.local_part(), "something");
        assert_eq!(addr.domain(), "[127.0.0.1]");
    }

    #[test]
    fn quoted_local_part_with_at() {
        let addr = Address::from_str("\"a@b\"@example.com").unwrap();
        assert_eq!(addr.local_part(), "\"a@b\"");
        assert_eq!(addr.domain(), "example.com");
    }

    #[test]
    fn at_inside_domain_literal() {
        let addr = Address::from_str("user@[a@b]").unwrap();
        assert_eq!(addr.local_part(), "user");
        assert_eq!(addr.domain(), "[a@b]");
    }

    #[test]
    fn try_from_string() {
        let addr = Address::try_from("first.last@sub.example.com".to_owned()).unwrap();
        assert_eq!(addr.local_part(), "first.last");
        assert_eq!(addr.domain(), "sub.example.com");
        assert_eq!(String::from(addr), "first.last@sub.example.com");
    }

    #[test]
    fn equal_addresses() {
        let addr = Address::try_from("user@example.com").unwrap();
        let addr2: Address = "user@example.com".parse().unwrap();
        assert_eq!(addr, addr2);
        assert_ne!(addr, "User@example.com".parse::<Address>().unwrap());
    }

    #[test]
    fn errors() {
        assert_eq!(Address::from_str(""), Err(AddressError::TooShort));
        assert_eq!(Address::from_str("a@"), Err(AddressError::TooShort));
        assert_eq!(
            Address::from_str(&format!("{}@example.com", "a".repeat(DEFAULT_MAX_LENGTH))),
            Err(AddressError::TooLong)
        );
        assert_eq!(
            Address::from_str("user@@example.com"),
            Err(AddressError::InvalidSyntax)
        );
        assert_eq!(
            Address::from_str("üser@example.com"),
            Err(AddressError::InvalidSyntax)
        );
    }

    #[test]
    fn error_display() {
        assert_eq!(
            AddressError::TooShort.to_string(),
            "Email address is too short (minimum is 3 characters)"
        );
        assert_eq!(
            AddressError::TooLong.to_string(),
            "Email address is too long (maximum is 384 characters)"
        );
        assert_eq!(
            AddressError::InvalidSyntax.to_string(),
            "Invalid email address syntax"
        );
    }
}
