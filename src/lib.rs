//! Storage, display and validation rules for a "full name" form field made
//! of an honorific prefix, a first name and a last name.
//!
//! A [`Name`] is persisted as a single pipe-delimited string
//! (`last|first|prefix`), loaded back with [`Name::parse`], rendered for
//! display with [`Name::format`] and checked before saving with
//! [`Name::validate`].
//!
//! ```
//! use full_name::{Name, ReturnFormat};
//!
//! let name = Name::new("Mrs", "Jane", "Doe");
//! let stored = name.serialize();
//! assert_eq!("Doe|Jane|Mrs", stored);
//!
//! let loaded = Name::parse(&stored);
//! assert_eq!(name, loaded);
//! assert_eq!(Some("Mrs. Jane Doe"), loaded.format(ReturnFormat::PrefixFirstLast).as_text());
//! assert!(loaded.validate(true).is_ok());
//! ```

#![doc(html_root_url = "https://docs.rs/full_name/2.0.0")]

mod field;
mod format;
mod prefix;
mod storage;
mod validate;

#[cfg(feature = "serialization")]
mod serialization;

#[cfg(feature = "ffi")]
pub mod external;

use compact_str::CompactString;

pub use field::FieldSettings;
pub use format::{format_value, Formatted, ReturnFormat};
pub use prefix::{is_known_prefix, normalize_prefix, prefix_label, prefixes, DEFAULT_PREFIX};
pub use storage::{Layout, DELIMITER};
pub use validate::ValidationError;

/// A structured full name.
///
/// The prefix is a key into the prefix table (see [`prefixes`]), not a
/// display label. Names built with [`Name::new`] always carry a known key;
/// names loaded with [`Name::parse`] keep whatever key was stored, and an
/// unknown key simply renders with an empty label.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize))]
pub struct Name {
    prefix: CompactString,
    first: CompactString,
    last: CompactString,
}

impl Name {
    /// Builds a name from submitted form input.
    ///
    /// Unrecognized prefix keys are replaced by [`DEFAULT_PREFIX`]. First and
    /// last names are kept exactly as given; trimming happens on storage.
    ///
    /// ```
    /// use full_name::{Name, DEFAULT_PREFIX};
    ///
    /// assert_eq!("Mx", Name::new("Mx", "Sam", "Lee").prefix());
    /// assert_eq!(DEFAULT_PREFIX, Name::new("Baroness", "Sam", "Lee").prefix());
    /// ```
    pub fn new(prefix: &str, first: &str, last: &str) -> Name {
        Name::from_parts(normalize_prefix(prefix), first, last)
    }

    #[inline]
    pub(crate) fn from_parts(prefix: &str, first: &str, last: &str) -> Name {
        Name {
            prefix: CompactString::from(prefix),
            first: CompactString::from(first),
            last: CompactString::from(last),
        }
    }

    #[inline]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    #[inline]
    pub fn first(&self) -> &str {
        &self.first
    }

    #[inline]
    pub fn last(&self) -> &str {
        &self.last
    }

    /// The display label for this name's prefix; empty for the default or an
    /// unknown key.
    #[inline]
    pub fn prefix_label(&self) -> &'static str {
        prefix_label(&self.prefix)
    }

    /// True for a name with no first or last name and no prefix, such as the
    /// value loaded from a missing or malformed stored string.
    pub fn is_empty(&self) -> bool {
        self.first.is_empty()
            && self.last.is_empty()
            && (self.prefix.is_empty() || self.prefix == DEFAULT_PREFIX)
    }
}

impl Default for Name {
    fn default() -> Name {
        Name::from_parts(DEFAULT_PREFIX, "", "")
    }
}
