//! Shared types read from the configuration document.
//!
//! Poster records are deserialized leniently: set-valued fields accept both
//! the object form (`{"Ada": 1}`, keys are the values) and the array form
//! (`["Ada"]`), and a poster number may be written as a JSON number.

use serde::de::{self, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A set-valued poster field that can be filtered through a checkbox group
/// or a dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SetDimension {
    Categories,
    Authors,
}

impl SetDimension {
    pub fn as_str(self) -> &'static str {
        match self {
            SetDimension::Categories => "categories",
            SetDimension::Authors => "authors",
        }
    }
}

impl fmt::Display for SetDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SetDimension {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "categories" => Ok(SetDimension::Categories),
            "authors" => Ok(SetDimension::Authors),
            other => Err(format!("unknown filter dimension '{other}'")),
        }
    }
}

/// A string poster field searched by a free-text box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDimension {
    Title,
    Keywords,
    Number,
}

impl TextDimension {
    pub fn as_str(self) -> &'static str {
        match self {
            TextDimension::Title => "title",
            TextDimension::Keywords => "keywords",
            TextDimension::Number => "number",
        }
    }
}

impl fmt::Display for TextDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TextDimension {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "title" => Ok(TextDimension::Title),
            "keywords" => Ok(TextDimension::Keywords),
            "number" => Ok(TextDimension::Number),
            other => Err(format!("unknown text filter dimension '{other}'")),
        }
    }
}

/// Ordered set of unique strings.
///
/// Order is the order of first appearance in the document, which is also the
/// order the values are rendered in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct KeySet(Vec<String>);

impl KeySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `value` unless it is already present.
    pub fn insert(&mut self, value: impl Into<String>) -> bool {
        let value = value.into();
        if self.0.contains(&value) {
            return false;
        }
        self.0.push(value);
        true
    }

    pub fn contains(&self, value: &str) -> bool {
        self.0.iter().any(|v| v == value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Values that are not the empty string.
    pub fn non_empty(&self) -> impl Iterator<Item = &str> {
        self.iter().filter(|v| !v.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.non_empty().next().is_none()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl<S: Into<String>> FromIterator<S> for KeySet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = KeySet::new();
        for value in iter {
            set.insert(value);
        }
        set
    }
}

impl<'de> Deserialize<'de> for KeySet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct KeySetVisitor;

        impl<'de> Visitor<'de> for KeySetVisitor {
            type Value = KeySet;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object whose keys are the values, or an array of strings")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<KeySet, A::Error> {
                let mut set = KeySet::new();
                while let Some((key, _)) = map.next_entry::<String, IgnoredAny>()? {
                    set.insert(key);
                }
                Ok(set)
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<KeySet, A::Error> {
                let mut set = KeySet::new();
                while let Some(value) = seq.next_element::<String>()? {
                    set.insert(value);
                }
                Ok(set)
            }

            fn visit_unit<E: de::Error>(self) -> Result<KeySet, E> {
                Ok(KeySet::new())
            }

            fn visit_none<E: de::Error>(self) -> Result<KeySet, E> {
                Ok(KeySet::new())
            }
        }

        deserializer.deserialize_any(KeySetVisitor)
    }
}

/// One poster, as supplied by the configuration document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PosterRecord {
    #[serde(default, deserialize_with = "string_or_number")]
    pub number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub authors: KeySet,
    #[serde(default)]
    pub categories: KeySet,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room: Option<String>,
    #[serde(
        default,
        rename = "poster",
        alias = "poster_file",
        skip_serializing_if = "Option::is_none"
    )]
    pub poster_file: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    /// Whether the poster may ever be shown. Absent means hidden.
    #[serde(default)]
    pub display: bool,
}

impl PosterRecord {
    /// The set-valued field backing a filter dimension.
    pub fn set_field(&self, dimension: SetDimension) -> &KeySet {
        match dimension {
            SetDimension::Categories => &self.categories,
            SetDimension::Authors => &self.authors,
        }
    }

    /// The string field searched by a text filter; absent fields read as "".
    pub fn text_field(&self, dimension: TextDimension) -> &str {
        match dimension {
            TextDimension::Title => self.title.as_deref().unwrap_or_default(),
            TextDimension::Keywords => self.keywords.as_deref().unwrap_or_default(),
            TextDimension::Number => &self.number,
        }
    }
}

/// `Some(s)` only when the option holds a non-empty string.
pub fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

fn string_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    struct NumberVisitor;

    impl Visitor<'_> for NumberVisitor {
        type Value = String;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a poster number as string or integer")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_string<E: de::Error>(self, v: String) -> Result<String, E> {
            Ok(v)
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_unit<E: de::Error>(self) -> Result<String, E> {
            Ok(String::new())
        }
    }

    deserializer.deserialize_any(NumberVisitor)
}
