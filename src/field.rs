use super::{Formatted, Layout, Name, ReturnFormat, ValidationError};

/// Per-field settings chosen by the site author, and the hooks a host calls
/// when loading, saving, rendering and validating a value of that field.
///
/// ```
/// use full_name::{FieldSettings, Name, ReturnFormat};
///
/// let field = FieldSettings {
///     return_format: ReturnFormat::FirstLast,
///     required: true,
///     ..FieldSettings::default()
/// };
///
/// let submitted = Name::new("Ms", "Ada", "Lovelace");
/// assert!(field.validate_value(&submitted).is_ok());
///
/// let stored = field.update_value(&submitted);
/// let loaded = field.load_value(Some(&stored));
/// let shown = field.format_value(Some(&loaded));
/// assert_eq!(Some("Ada Lovelace"), shown.as_ref().and_then(|f| f.as_text()));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize))]
pub struct FieldSettings {
    pub return_format: ReturnFormat,
    pub required: bool,
    pub layout: Layout,
}

impl FieldSettings {
    /// A missing stored value loads as the empty name.
    pub fn load_value(&self, stored: Option<&str>) -> Name {
        stored
            .map(|s| Name::parse_with(s, self.layout))
            .unwrap_or_default()
    }

    pub fn update_value(&self, name: &Name) -> String {
        name.serialize_with(self.layout)
    }

    pub fn format_value(&self, value: Option<&Name>) -> Option<Formatted> {
        super::format_value(value, self.return_format.for_layout(self.layout))
    }

    #[inline]
    pub fn validate_value(&self, name: &Name) -> Result<(), ValidationError> {
        name.validate(self.required)
    }

    /// `(selector, label)` pairs for this field's return format picker.
    pub fn return_format_choices(&self) -> impl Iterator<Item = (&'static str, &'static str)> {
        ReturnFormat::choices(self.layout)
    }
}
