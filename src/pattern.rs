//! The [RFC 822] `addr-spec` grammar compiled into a single pattern.
//!
//! Each production is a small regular expression over byte values, composed
//! in dependency order: the leaves (`qtext`, `dtext`, `quoted-pair`, `atom`)
//! feed `quoted-string` and `domain-literal`, which feed `word` and
//! `sub-domain`, which feed `local-part` and `domain`.
//!
//! The pattern is compiled with Unicode mode disabled so that `\x80-\xff`
//! denote raw bytes: any byte of a multi-byte UTF-8 sequence falls in that
//! range and is rejected.
//!
//! [RFC 822]: https://datatracker.ietf.org/doc/html/rfc822#section-6

use std::{ops::RangeInclusive, sync::OnceLock};

use regex::bytes::Regex;

/// Default inclusive lower bound on the length of an address.
pub const DEFAULT_MIN_LENGTH: usize = 3;

/// Default inclusive upper bound on the length of an address.
pub const DEFAULT_MAX_LENGTH: usize = 384;

/// Default inclusive length bounds (`3..=384`).
pub const DEFAULT_LENGTH_RANGE: RangeInclusive<usize> = DEFAULT_MIN_LENGTH..=DEFAULT_MAX_LENGTH;

// 3.3. Lexical tokens
// https://datatracker.ietf.org/doc/html/rfc822#section-3.3

// qtext       =  <any CHAR excepting <">,     ; => may be folded
//                 "\" & CR, and including
//                 linear-white-space>
const QTEXT: &str = r"[^\x0d\x22\x5c\x80-\xff]";

// dtext       =  <any CHAR excluding "[",     ; => may be folded
//                 "]", "\" & CR, & including
//                 linear-white-space>
const DTEXT: &str = r"[^\x0d\x5b-\x5d\x80-\xff]";

// atom        =  1*<any CHAR except specials, SPACE and CTLs>
//
// specials    =  "(" / ")" / "<" / ">" / "@"  ; Must be in quoted-
//             /  "," / ";" / ":" / "\" / <">  ;  string, to use
//             /  "." / "[" / "]"              ;  within a word.
const ATOM: &str = r"[^\x00-\x20\x22\x28\x29\x2c\x2e\x3a-\x3c\x3e\x40\x5b-\x5d\x7f-\xff]+";

// quoted-pair =  "\" CHAR                     ; may quote any char
const QUOTED_PAIR: &str = r"\x5c[\x00-\x7f]";

// domain-literal =  "[" *(dtext / quoted-pair) "]"
fn domain_literal() -> String {
    format!(r"\x5b(?:{DTEXT}|{QUOTED_PAIR})*\x5d")
}

// quoted-string = <"> *(qtext/quoted-pair) <">; Regular qtext or
//                                             ;   quoted chars.
fn quoted_string() -> String {
    format!(r"\x22(?:{QTEXT}|{QUOTED_PAIR})*\x22")
}

// 6.1. Address specification
// https://datatracker.ietf.org/doc/html/rfc822#section-6.1

// domain-ref  =  atom                         ; symbolic reference
fn domain_ref() -> &'static str {
    ATOM
}

// sub-domain  =  domain-ref / domain-literal
fn sub_domain() -> String {
    format!("(?:{}|{})", domain_ref(), domain_literal())
}

// word        =  atom / quoted-string
fn word() -> String {
    format!("(?:{ATOM}|{})", quoted_string())
}

// domain      =  sub-domain *("." sub-domain)
fn domain() -> String {
    let sub_domain = sub_domain();
    format!(r"{sub_domain}(?:\x2e{sub_domain})*")
}

// local-part  =  word *("." word)             ; uninterpreted
//                                             ; case-preserved
fn local_part() -> String {
    let word = word();
    format!(r"{word}(?:\x2e{word})*")
}

// addr-spec   =  local-part "@" domain        ; global address
//
// Anchored at both ends: the whole input has to be an address. Group 1
// captures the local part and group 2 the domain.
fn addr_spec() -> String {
    format!(r"(?-u)\A({})\x40({})\z", local_part(), domain())
}

/// Returns the compiled `addr-spec` pattern.
///
/// The pattern is built on first use and shared for the lifetime of the
/// process. Calling this during startup forces the construction early.
///
/// # Panics
///
/// Panics if the assembled grammar does not compile, which can only be a
/// bug in this crate.
pub fn address_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();

    PATTERN.get_or_init(|| {
        let source = addr_spec();
        #[cfg(feature = "tracing")]
        tracing::debug!(len = source.len(), "compiling RFC 822 address pattern");
        Regex::new(&source).expect("RFC 822 address grammar must compile")
    })
}

/// Checks whether `candidate` is, in its entirety, a syntactically valid
/// RFC 822 address.
///
/// ```
/// use email_syntax::is_valid_email_syntax;
///
/// assert!(is_valid_email_syntax("user@sub.example.com"));
/// assert!(!is_valid_email_syntax("user@example.com "));
/// ```
pub fn is_valid_email_syntax(candidate: &str) -> bool {
    let matched = address_pattern().is_match(candidate.as_bytes());
    #[cfg(feature = "tracing")]
    if !matched {
        tracing::trace!(
            len = candidate.chars().count(),
            "email rejected by address grammar"
        );
    }
    matched
}

/// Checks whether the length of `candidate`, counted in characters, lies
/// within `min..=max`.
pub fn is_valid_email_length(candidate: &str, min: usize, max: usize) -> bool {
    (min..=max).contains(&candidate.chars().count())
}

/// Checks the default length bounds first, then the address syntax.
pub fn is_valid_email(candidate: &str) -> bool {
    if !is_valid_email_length(candidate, DEFAULT_MIN_LENGTH, DEFAULT_MAX_LENGTH) {
        #[cfg(feature = "tracing")]
        tracing::trace!(
            len = candidate.chars().count(),
            "email rejected by length bounds"
        );
        return false;
    }
    is_valid_email_syntax(candidate)
}
