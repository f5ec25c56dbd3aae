use super::Name;
use regex::Regex;
use std::borrow::Cow;
use std::sync::OnceLock;
use thiserror::Error;
use unicode_normalization::{is_nfc_quick, IsNormalized, UnicodeNormalization};

/// Why a submitted name was rejected. The `Display` text is meant to be
/// shown to the person filling in the form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum ValidationError {
    #[error("Illegal characters in first or last name")]
    IllegalCharacters,
    #[error("First and last names are required.")]
    MissingRequiredParts,
}

/// Anything outside the letter category other than space, hyphen, period and
/// the straight or typographic (U+2019) apostrophe.
static ILLEGAL_CHARS: OnceLock<Regex> = OnceLock::new();

fn illegal_chars() -> &'static Regex {
    ILLEGAL_CHARS.get_or_init(|| {
        Regex::new(r"[^\p{L} .'\x{2019}-]").expect("Invalid name character regex")
    })
}

// Undoes backslash escaping added to form input before it reaches us: every
// backslash is dropped and the character after it kept as is, except that
// `\0` stands for NUL.
fn strip_slashes(text: &str) -> Cow<'_, str> {
    if !text.contains('\\') {
        return Cow::Borrowed(text);
    }

    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some('0') => result.push('\0'),
                Some(escaped) => result.push(escaped),
                None => {}
            }
        } else {
            result.push(c);
        }
    }
    Cow::Owned(result)
}

// Decomposed input ("e" + U+0308) would otherwise fail the letter check.
fn compose(text: &str) -> Cow<'_, str> {
    if is_nfc_quick(text.chars()) == IsNormalized::Yes {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(text.nfc().collect())
    }
}

fn has_illegal_chars(text: &str) -> bool {
    let unescaped = strip_slashes(text);
    illegal_chars().is_match(&compose(&unescaped))
}

#[inline]
fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

impl Name {
    /// Checks a submitted name before it is saved.
    ///
    /// First and last names may only contain letters, spaces, hyphens,
    /// periods and apostrophes (straight or typographic). When `required`,
    /// both must also be non-blank. Illegal characters are reported ahead of
    /// missing parts.
    ///
    /// ```
    /// use full_name::{Name, ValidationError};
    ///
    /// assert_eq!(Ok(()), Name::new("Mr", "Seán", "O’Brien").validate(true));
    /// assert_eq!(
    ///     Err(ValidationError::IllegalCharacters),
    ///     Name::new("Mr", "Jane1", "Doe").validate(false)
    /// );
    /// assert_eq!(
    ///     Err(ValidationError::MissingRequiredParts),
    ///     Name::new("Mr", "", "Doe").validate(true)
    /// );
    /// ```
    pub fn validate(&self, required: bool) -> Result<(), ValidationError> {
        if has_illegal_chars(&self.first) || has_illegal_chars(&self.last) {
            tracing::trace!(error = "illegal_characters", "rejected name");
            return Err(ValidationError::IllegalCharacters);
        }

        if required && (is_blank(&self.first) || is_blank(&self.last)) {
            tracing::trace!(error = "missing_required_parts", "rejected name");
            return Err(ValidationError::MissingRequiredParts);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    fn validate(first: &str, last: &str, required: bool) -> Result<(), ValidationError> {
        Name::new("-", first, last).validate(required)
    }

    #[test]
    fn valid() {
        assert_eq!(Ok(()), validate("Jane", "Doe", true));
        assert_eq!(Ok(()), validate("Anne-Marie", "O'Brien", true));
        assert_eq!(Ok(()), validate("J. R.", "de la Cruz", true));
        assert_eq!(Ok(()), validate("Seán", "Ó Súilleabháin", true));
        assert_eq!(Ok(()), validate("太郎", "鈴木", true));
    }

    #[test]
    fn typographic_apostrophe() {
        assert_eq!(Ok(()), validate("Jane", "O’Brien", true));
    }

    #[test]
    fn digits() {
        assert_eq!(Err(ValidationError::IllegalCharacters), validate("Jane1", "Doe", false));
        assert_eq!(Err(ValidationError::IllegalCharacters), validate("Jane", "Doe 3rd", false));
    }

    #[test]
    fn letterlike_symbols() {
        // Alphabetic, but not in the letter category
        for bad in ["\u{216B}", "\u{24D0}nne", "Jo\u{0345}"] {
            assert_eq!(
                Err(ValidationError::IllegalCharacters),
                validate(bad, "Doe", false),
                "{:?} should be illegal",
                bad
            );
        }
    }

    #[test]
    fn punctuation() {
        for bad in ["Doe|Jane", "Doe, Jane", "<b>Jane</b>", "Jane\tDoe", "Jane_Doe", "Jane\"", "\u{201C}Jane"] {
            assert_eq!(
                Err(ValidationError::IllegalCharacters),
                validate(bad, "Doe", false),
                "{:?} should be illegal",
                bad
            );
        }
    }

    #[test]
    fn escaped_input() {
        assert_eq!(Ok(()), validate("Jane", "O\\'Brien", true));
        assert_eq!(Ok(()), validate("Jane\\", "Doe", true));
        assert_eq!(Ok(()), validate("Ja\\ne", "Doe", true));
    }

    #[test]
    fn escaped_backslash_is_illegal() {
        assert_eq!(Err(ValidationError::IllegalCharacters), validate("Jane\\\\", "Doe", false));
    }

    #[test]
    fn escaped_nul_is_illegal() {
        assert_eq!(Err(ValidationError::IllegalCharacters), validate("Jane\\0", "Doe", false));
    }

    #[test]
    fn decomposed() {
        assert_eq!(Ok(()), validate("Zoe\u{0308}", "Doe", true));
    }

    #[test]
    fn missing() {
        assert_eq!(Err(ValidationError::MissingRequiredParts), validate("", "Doe", true));
        assert_eq!(Err(ValidationError::MissingRequiredParts), validate("Jane", "", true));
        assert_eq!(Err(ValidationError::MissingRequiredParts), validate("", "", true));
    }

    #[test]
    fn blank_counts_as_missing() {
        assert_eq!(Err(ValidationError::MissingRequiredParts), validate("  ", "Doe", true));
    }

    #[test]
    fn optional() {
        assert_eq!(Ok(()), validate("", "", false));
        assert_eq!(Ok(()), validate("Jane", "", false));
    }

    #[test]
    fn illegal_reported_first() {
        assert_eq!(Err(ValidationError::IllegalCharacters), validate("", "D0e", true));
    }

    #[test]
    #[traced_test]
    fn rejections_log_the_reason_only() {
        let _ = validate("Jane1", "Whitfield", false);
        let _ = validate("", "Ashcombe", true);
        assert!(logs_contain("illegal_characters"));
        assert!(logs_contain("missing_required_parts"));
        assert!(!logs_contain("Jane1"));
        assert!(!logs_contain("Whitfield"));
        assert!(!logs_contain("Ashcombe"));
    }

    #[test]
    fn messages() {
        assert_eq!(
            "Illegal characters in first or last name",
            ValidationError::IllegalCharacters.to_string()
        );
        assert_eq!(
            "First and last names are required.",
            ValidationError::MissingRequiredParts.to_string()
        );
    }

    #[test]
    fn strip() {
        assert_eq!("O'Brien", strip_slashes("O\\'Brien"));
        assert_eq!("a\\b", strip_slashes("a\\\\b"));
        assert_eq!("ab", strip_slashes("ab\\"));
        assert_eq!("a\0b", strip_slashes("a\\0b"));
        assert_eq!("a\\0", strip_slashes("a\\\\0"));
        assert!(matches!(strip_slashes("plain"), Cow::Borrowed(_)));
    }
}
