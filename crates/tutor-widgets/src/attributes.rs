//! Watched attributes and the display state derived from them

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;

use crate::WidgetError;

/// One of the eight attributes a tutor card watches
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Attribute {
    Name,
    Subject,
    Level,
    Rating,
    Price,
    City,
    Image,
    Id,
}

impl Attribute {
    /// The watched attribute list, in declaration order
    pub const ALL: [Attribute; 8] = [
        Attribute::Name,
        Attribute::Subject,
        Attribute::Level,
        Attribute::Rating,
        Attribute::Price,
        Attribute::City,
        Attribute::Image,
        Attribute::Id,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Attribute::Name => "name",
            Attribute::Subject => "subject",
            Attribute::Level => "level",
            Attribute::Rating => "rating",
            Attribute::Price => "price",
            Attribute::City => "city",
            Attribute::Image => "image",
            Attribute::Id => "id",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Attribute {
    type Err = WidgetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Attribute::ALL
            .iter()
            .copied()
            .find(|attr| attr.as_str() == s)
            .ok_or_else(|| WidgetError::UnknownAttribute(s.to_string()))
    }
}

/// Text values currently set on a card, keyed by attribute
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AttributeSet {
    values: BTreeMap<Attribute, String>,
}

impl AttributeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`AttributeSet::set`]
    pub fn with(mut self, attr: Attribute, value: impl Into<String>) -> Self {
        self.set(attr, value);
        self
    }

    pub fn get(&self, attr: Attribute) -> Option<&str> {
        self.values.get(&attr).map(String::as_str)
    }

    /// Store a value. Returns true when the stored value actually changed.
    pub fn set(&mut self, attr: Attribute, value: impl Into<String>) -> bool {
        let value = value.into();
        if self.values.get(&attr) == Some(&value) {
            return false;
        }
        self.values.insert(attr, value);
        true
    }

    /// Drop a value. Returns true when something was removed.
    pub fn remove(&mut self, attr: Attribute) -> bool {
        self.values.remove(&attr).is_some()
    }

    fn text(&self, attr: Attribute) -> String {
        self.get(attr).unwrap_or_default().to_string()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawValue {
    Text(String),
    Number(serde_json::Number),
    Bool(bool),
}

impl<'de> Deserialize<'de> for AttributeSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: HashMap<String, Option<RawValue>> = HashMap::deserialize(deserializer)?;
        let mut set = AttributeSet::new();
        for (key, value) in raw {
            let Ok(attr) = key.parse::<Attribute>() else {
                tracing::debug!(attribute = %key, "Ignoring unwatched attribute");
                continue;
            };
            // null behaves like an absent attribute
            let text = match value {
                Some(RawValue::Text(s)) => s,
                Some(RawValue::Number(n)) => n.to_string(),
                Some(RawValue::Bool(b)) => b.to_string(),
                None => continue,
            };
            set.set(attr, text);
        }
        Ok(set)
    }
}

/// Display state of one tutor, with defaults applied
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TutorProfile {
    pub name: String,
    pub subject: String,
    /// Raw `level` text, shown verbatim under the subject
    pub level: String,
    pub skills: Vec<String>,
    pub rating: f64,
    pub price: String,
    pub city: String,
    pub image: String,
    pub id: String,
}

impl TutorProfile {
    pub fn from_attributes(attrs: &AttributeSet) -> Self {
        let level = attrs.text(Attribute::Level);
        Self {
            name: attrs.text(Attribute::Name),
            subject: attrs.text(Attribute::Subject),
            skills: parse_skills(&level),
            level,
            rating: parse_rating(attrs.get(Attribute::Rating)),
            price: attrs.text(Attribute::Price),
            city: attrs.text(Attribute::City),
            image: attrs.text(Attribute::Image),
            id: attrs.text(Attribute::Id),
        }
    }

    /// Rating in its shortest decimal form (`4`, `4.5`). Magnitudes of
    /// 1e21 and above, or below 1e-6, switch to exponent form (`1e+21`).
    pub fn rating_text(&self) -> String {
        let magnitude = self.rating.abs();
        if magnitude >= 1e21 || (magnitude != 0.0 && magnitude < 1e-6) {
            let text = format!("{:e}", self.rating);
            match text.split_once('e') {
                Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
                _ => text,
            }
        } else {
            self.rating.to_string()
        }
    }
}

/// Split a comma-separated level string into trimmed, non-empty tags.
/// Duplicates and order are preserved.
pub fn parse_skills(level: &str) -> Vec<String> {
    level
        .split(',')
        .map(str::trim)
        .filter(|skill| !skill.is_empty())
        .map(String::from)
        .collect()
}

static LEADING_NUMBER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?").expect("valid number pattern")
});

/// Parse the leading decimal number of a rating value.
///
/// Anything that does not start with a number, or that yields zero, NaN or
/// an infinite value, resolves to 0.
pub fn parse_rating(raw: Option<&str>) -> f64 {
    let Some(raw) = raw else {
        return 0.0;
    };
    let parsed = LEADING_NUMBER
        .find(raw.trim_start())
        .and_then(|m| m.as_str().parse::<f64>().ok());

    match parsed {
        Some(value) if value.is_finite() && value != 0.0 => value,
        _ => 0.0,
    }
}
