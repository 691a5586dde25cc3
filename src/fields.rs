//! Raw metadata fields collected by the extraction strategies.
//!
//! The key set is closed: a strategy can only ever record one of the
//! [`MetaField`] variants, so raw output never carries unexpected keys.

use std::fmt;

/// One of the metadata keys a strategy may collect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetaField {
    /// Text of the `<title>` element.
    Title,
    /// `<meta name="description">`.
    Description,
    /// `<meta name="keywords">`.
    Keywords,
    /// `<meta name="author">`.
    Author,
    /// `<meta property="og:title">`.
    OgTitle,
    /// `<meta property="og:description">`.
    OgDescription,
    /// `<meta property="og:site_name">`.
    OgSiteName,
    /// `<meta property="og:image">`.
    OgImage,
}

/// Fields recognised through a `<meta name=...>` attribute.
pub const NAME_FIELDS: [MetaField; 3] = [MetaField::Description, MetaField::Keywords, MetaField::Author];

/// Fields recognised through a `<meta property=...>` attribute.
pub const PROPERTY_FIELDS: [MetaField; 4] = [
    MetaField::OgTitle,
    MetaField::OgSiteName,
    MetaField::OgDescription,
    MetaField::OgImage,
];

impl MetaField {
    /// The attribute value naming this field in markup (`"og:title"`, ...).
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            MetaField::Title => "title",
            MetaField::Description => "description",
            MetaField::Keywords => "keywords",
            MetaField::Author => "author",
            MetaField::OgTitle => "og:title",
            MetaField::OgDescription => "og:description",
            MetaField::OgSiteName => "og:site_name",
            MetaField::OgImage => "og:image",
        }
    }

    /// Looks up a `<meta name>` value. Matching is exact and case-sensitive.
    #[must_use]
    pub fn from_meta_name(name: &str) -> Option<Self> {
        NAME_FIELDS.into_iter().find(|f| f.key() == name)
    }

    /// Looks up a `<meta property>` value. Matching is exact and case-sensitive.
    #[must_use]
    pub fn from_meta_property(property: &str) -> Option<Self> {
        PROPERTY_FIELDS.into_iter().find(|f| f.key() == property)
    }

    /// Resolves a `<meta>` element's attributes to the field it sets.
    ///
    /// Only elements carrying `content` count. When `name` is present it
    /// alone decides the field, even if it is not a recognised name;
    /// `property` is consulted only when `name` is absent.
    #[must_use]
    pub fn from_meta_attrs(name: Option<&str>, property: Option<&str>) -> Option<Self> {
        match (name, property) {
            (Some(name), _) => Self::from_meta_name(name),
            (None, Some(property)) => Self::from_meta_property(property),
            (None, None) => None,
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for MetaField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Per-strategy field values, at most one per [`MetaField`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawFields {
    values: [Option<String>; 8],
}

impl RawFields {
    /// Creates an empty field set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a value, replacing any earlier one for the same field.
    pub fn set(&mut self, field: MetaField, value: impl Into<String>) {
        self.values[field.index()] = Some(value.into());
    }

    /// Returns the stored value for `field`, if any.
    #[must_use]
    pub fn get(&self, field: MetaField) -> Option<&str> {
        self.values[field.index()].as_deref()
    }

    /// Whether no field has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.iter().all(Option::is_none)
    }

    /// Number of recorded fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.iter().filter(|v| v.is_some()).count()
    }
}

impl<S: Into<String>> FromIterator<(MetaField, S)> for RawFields {
    fn from_iter<I: IntoIterator<Item = (MetaField, S)>>(iter: I) -> Self {
        let mut fields = RawFields::new();
        for (field, value) in iter {
            fields.set(field, value);
        }
        fields
    }
}

/// Output of one extraction strategy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawExtraction {
    /// Metadata values found in the document.
    pub fields: RawFields,

    /// Image references in source order. Duplicates and relative paths
    /// are kept as found.
    pub images: Vec<String>,
}

impl RawExtraction {
    /// Whether nothing at all was collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.images.is_empty()
    }
}
