use super::{Layout, Name};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// How a name is rendered for templates, chosen per field by the site author.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serialization", serde(rename_all = "snake_case"))]
pub enum ReturnFormat {
    /// "Jane Doe"
    FirstLast,
    /// "Doe, Jane"
    #[default]
    LastFirst,
    /// "Mrs. Jane Doe"
    PrefixFirstLast,
    /// The structured name itself.
    Array,
}

static CHOICES: [(ReturnFormat, &str, &str); 4] = [
    (ReturnFormat::FirstLast, "first_last", "First Last"),
    (ReturnFormat::LastFirst, "last_first", "Last, First"),
    (ReturnFormat::PrefixFirstLast, "prefix_first_last", "Prefix First Last"),
    (ReturnFormat::Array, "array", "Values (array)"),
];

impl ReturnFormat {
    #[inline]
    fn choice(self) -> &'static (ReturnFormat, &'static str, &'static str) {
        // CHOICES is in declaration order
        &CHOICES[self as usize]
    }

    /// The selector as stored in field settings, e.g. `"last_first"`.
    #[inline]
    pub fn as_str(self) -> &'static str {
        self.choice().1
    }

    /// The label shown in the field settings picker.
    #[inline]
    pub fn label(self) -> &'static str {
        self.choice().2
    }

    /// Parses a stored selector. Unrecognized selectors fall back to
    /// [`ReturnFormat::Array`].
    pub fn from_selector(selector: &str) -> ReturnFormat {
        match CHOICES.iter().find(|(_, key, _)| *key == selector) {
            Some((format, _, _)) => *format,
            None => {
                tracing::debug!(selector, "unknown return format, returning the array");
                ReturnFormat::Array
            }
        }
    }

    /// Whether a field with the given layout offers this format.
    #[inline]
    pub fn is_supported(self, layout: Layout) -> bool {
        self != ReturnFormat::PrefixFirstLast || layout.supports_prefix()
    }

    /// This format as a field with the given layout understands it:
    /// unsupported formats are treated like an unknown selector.
    #[inline]
    pub fn for_layout(self, layout: Layout) -> ReturnFormat {
        if self.is_supported(layout) {
            self
        } else {
            ReturnFormat::Array
        }
    }

    /// `(selector, label)` pairs offered for the given layout, in display order.
    ///
    /// ```
    /// use full_name::{Layout, ReturnFormat};
    ///
    /// let legacy: Vec<_> = ReturnFormat::choices(Layout::Legacy).map(|(k, _)| k).collect();
    /// assert_eq!(vec!["first_last", "last_first", "array"], legacy);
    /// ```
    pub fn choices(layout: Layout) -> impl Iterator<Item = (&'static str, &'static str)> {
        CHOICES
            .iter()
            .filter(move |(format, _, _)| format.is_supported(layout))
            .map(|&(_, key, label)| (key, label))
    }
}

impl FromStr for ReturnFormat {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ReturnFormat::from_selector(s))
    }
}

impl fmt::Display for ReturnFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A name rendered for display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Formatted {
    Text(String),
    Value(Name),
}

impl Formatted {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Formatted::Text(text) => Some(text.as_str()),
            Formatted::Value(_) => None,
        }
    }

    pub fn as_name(&self) -> Option<&Name> {
        match self {
            Formatted::Text(_) => None,
            Formatted::Value(name) => Some(name),
        }
    }
}

impl Name {
    /// Renders this name for display.
    ///
    /// An empty name comes back unchanged as [`Formatted::Value`] whatever the
    /// format, so templates can tell "no name" apart from a blank string.
    ///
    /// ```
    /// use full_name::{Name, ReturnFormat};
    ///
    /// let name = Name::new("Mrs", "Jane", "Doe");
    /// assert_eq!(Some("Jane Doe"), name.format(ReturnFormat::FirstLast).as_text());
    /// assert_eq!(Some("Doe, Jane"), name.format(ReturnFormat::LastFirst).as_text());
    /// assert_eq!(Some("Mrs. Jane Doe"), name.format(ReturnFormat::PrefixFirstLast).as_text());
    /// assert_eq!(Some(&name), name.format(ReturnFormat::Array).as_name());
    /// ```
    pub fn format(&self, format: ReturnFormat) -> Formatted {
        if self.is_empty() {
            return Formatted::Value(self.clone());
        }

        match format {
            ReturnFormat::FirstLast => Formatted::Text(format!("{} {}", self.first, self.last)),
            ReturnFormat::LastFirst => Formatted::Text(format!("{}, {}", self.last, self.first)),
            ReturnFormat::PrefixFirstLast => {
                let text = format!("{} {} {}", self.prefix_label(), self.first, self.last);
                let trimmed = text.trim();
                if trimmed.len() == text.len() {
                    Formatted::Text(text)
                } else {
                    Formatted::Text(trimmed.to_string())
                }
            }
            ReturnFormat::Array => Formatted::Value(self.clone()),
        }
    }
}

/// Renders a possibly-absent value; absence is passed through.
pub fn format_value(value: Option<&Name>, format: ReturnFormat) -> Option<Formatted> {
    value.map(|name| name.format(format))
}
