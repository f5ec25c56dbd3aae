use super::Name;
use smallvec::SmallVec;

/// Separates the segments of a stored name.
pub const DELIMITER: char = '|';

/// How a name is laid out in its stored string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serialization", serde(rename_all = "snake_case"))]
pub enum Layout {
    /// `last|first|prefix`
    #[default]
    Prefixed,
    /// `last|first`, written by fields without a prefix picker
    Legacy,
}

impl Layout {
    #[inline]
    pub fn segments(self) -> usize {
        match self {
            Layout::Prefixed => 3,
            Layout::Legacy => 2,
        }
    }

    #[inline]
    pub fn supports_prefix(self) -> bool {
        self == Layout::Prefixed
    }
}

impl Name {
    /// Loads a name stored as `last|first|prefix`.
    ///
    /// Never fails: a value without exactly three segments (including the
    /// empty string) loads as the empty [`Name::default`]. First and last
    /// names are trimmed; the prefix is taken verbatim.
    ///
    /// ```
    /// use full_name::Name;
    ///
    /// let name = Name::parse("O'Brien | Anne-Marie|Mx");
    /// assert_eq!("O'Brien", name.last());
    /// assert_eq!("Anne-Marie", name.first());
    /// assert_eq!("Mx", name.prefix());
    ///
    /// assert!(Name::parse("Doe|Jane").is_empty());
    /// ```
    #[inline]
    pub fn parse(stored: &str) -> Name {
        Name::parse_with(stored, Layout::Prefixed)
    }

    /// Loads a name stored in the given layout. Legacy values carry no
    /// prefix, so the default one is filled in.
    pub fn parse_with(stored: &str, layout: Layout) -> Name {
        let expected = layout.segments();
        let parts: SmallVec<[&str; 4]> = stored.splitn(expected + 1, DELIMITER).collect();

        if parts.len() != expected {
            if !stored.is_empty() {
                tracing::debug!(
                    segments = parts.len(),
                    expected,
                    "malformed stored name, loading an empty one"
                );
            }
            return Name::default();
        }

        let prefix = match layout {
            Layout::Prefixed => parts[2],
            Layout::Legacy => super::DEFAULT_PREFIX,
        };

        Name::from_parts(prefix, parts[1].trim(), parts[0].trim())
    }

    /// The string to persist for this name, `last|first|prefix`.
    ///
    /// First and last names are trimmed; the prefix is written as is.
    #[inline]
    pub fn serialize(&self) -> String {
        self.serialize_with(Layout::Prefixed)
    }

    pub fn serialize_with(&self, layout: Layout) -> String {
        let last = self.last.trim();
        let first = self.first.trim();

        let mut result = String::with_capacity(last.len() + first.len() + self.prefix.len() + 2);
        result.push_str(last);
        result.push(DELIMITER);
        result.push_str(first);
        if layout.supports_prefix() {
            result.push(DELIMITER);
            result.push_str(&self.prefix);
        }
        result
    }
}
