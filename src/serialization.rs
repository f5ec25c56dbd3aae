use super::{FieldSettings, Formatted, Layout, Name, ReturnFormat};
use compact_str::CompactString;
use serde::de::{self, Deserializer, Unexpected};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::fmt;

// Submitted input, so it goes through the same prefix normalization as
// `Name::new`; missing keys are empty.
#[derive(Deserialize)]
struct RawName {
    #[serde(default)]
    prefix: CompactString,
    #[serde(default)]
    first: CompactString,
    #[serde(default)]
    last: CompactString,
}

impl<'de> Deserialize<'de> for Name {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawName::deserialize(deserializer)?;
        Ok(Name::new(&raw.prefix, &raw.first, &raw.last))
    }
}

/// Text formats serialize as a plain string, the `array` format as an object
/// with `prefix`, `first` and `last` keys.
impl Serialize for Formatted {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Formatted::Text(text) => serializer.serialize_str(text),
            Formatted::Value(name) => Serialize::serialize(name, serializer),
        }
    }
}

// Mirrors the settings array a host stores for a field; every key is optional.
#[derive(Deserialize)]
struct RawFieldSettings {
    #[serde(default)]
    return_format: Option<String>,
    #[serde(default, deserialize_with = "flag")]
    required: bool,
    #[serde(default)]
    layout: Layout,
}

impl<'de> Deserialize<'de> for FieldSettings {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawFieldSettings::deserialize(deserializer)?;
        Ok(FieldSettings {
            return_format: raw
                .return_format
                .as_deref()
                .map(ReturnFormat::from_selector)
                .unwrap_or_default(),
            required: raw.required,
            layout: raw.layout,
        })
    }
}

impl FieldSettings {
    /// Reads settings from the host's JSON field definition.
    ///
    /// ```
    /// use full_name::{FieldSettings, ReturnFormat};
    ///
    /// let field = FieldSettings::from_json(r#"{"return_format": "first_last", "required": 1}"#).unwrap();
    /// assert_eq!(ReturnFormat::FirstLast, field.return_format);
    /// assert!(field.required);
    /// ```
    pub fn from_json(json: &str) -> serde_json::Result<FieldSettings> {
        serde_json::from_str(json)
    }
}

struct FlagVisitor;

impl<'de> de::Visitor<'de> for FlagVisitor {
    type Value = bool;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a boolean, 0 or 1")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<bool, E> {
        Ok(v)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<bool, E> {
        match v {
            0 => Ok(false),
            1 => Ok(true),
            _ => Err(E::invalid_value(Unexpected::Unsigned(v), &self)),
        }
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<bool, E> {
        match v {
            0 => Ok(false),
            1 => Ok(true),
            _ => Err(E::invalid_value(Unexpected::Signed(v), &self)),
        }
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<bool, E> {
        match v {
            "" | "0" => Ok(false),
            "1" => Ok(true),
            _ => Err(E::invalid_value(Unexpected::Str(v), &self)),
        }
    }

    fn visit_unit<E: de::Error>(self) -> Result<bool, E> {
        Ok(false)
    }
}

fn flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    deserializer.deserialize_any(FlagVisitor)
}
