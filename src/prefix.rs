//! The honorific prefixes a name field offers, in the order they are shown.

static PREFIX_LABELS: phf::OrderedMap<&'static str, &'static str> =
    include!(concat!(env!("OUT_DIR"), "/prefix_labels.rs"));

/// Key of the "no prefix" entry, whose label is empty.
pub const DEFAULT_PREFIX: &str = "-";

/// Display label for a prefix key, or the empty string if the key is unknown.
///
/// # Examples
///
/// ```
/// use full_name::prefix_label;
///
/// assert_eq!("Mrs.", prefix_label("Mrs"));
/// assert_eq!("", prefix_label("-"));
/// assert_eq!("", prefix_label("Sir"));
/// ```
#[inline]
pub fn prefix_label(key: &str) -> &'static str {
    PREFIX_LABELS.get(key).copied().unwrap_or("")
}

#[inline]
pub fn is_known_prefix(key: &str) -> bool {
    PREFIX_LABELS.contains_key(key)
}

/// Maps an unrecognized (or empty) key onto the default key.
pub fn normalize_prefix(key: &str) -> &str {
    if is_known_prefix(key) {
        key
    } else {
        if !key.is_empty() {
            tracing::debug!(prefix = key, "unknown prefix, using the default");
        }
        DEFAULT_PREFIX
    }
}

/// All `(key, label)` pairs, default first, for rendering a prefix picker.
pub fn prefixes() -> impl ExactSizeIterator<Item = (&'static str, &'static str)> {
    PREFIX_LABELS.entries().map(|(k, v)| (*k, *v))
}
