//! Open Graph properties
//!
//! A [`Property`] is a single `og:*` key/value pair as it appears in a
//! document. Keys are stored without the `og:` namespace prefix.

use std::fmt;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::coerce;

/// Ordered sequence of properties, in document order.
pub type PropertyList = Vec<Property>;

/// A single Open Graph property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    /// Key without the `og:` prefix (e.g. "image:width")
    pub key: String,

    /// The property value
    pub value: PropertyValue,
}

impl Property {
    pub const AUDIO: &'static str = "audio";
    pub const AUDIO_SECURE_URL: &'static str = "audio:secure_url";
    pub const AUDIO_TYPE: &'static str = "audio:type";
    pub const AUDIO_URL: &'static str = "audio:url";
    pub const DESCRIPTION: &'static str = "description";
    pub const DETERMINER: &'static str = "determiner";
    pub const IMAGE: &'static str = "image";
    pub const IMAGE_HEIGHT: &'static str = "image:height";
    pub const IMAGE_SECURE_URL: &'static str = "image:secure_url";
    pub const IMAGE_TYPE: &'static str = "image:type";
    pub const IMAGE_URL: &'static str = "image:url";
    pub const IMAGE_USER_GENERATED: &'static str = "image:user_generated";
    pub const IMAGE_WIDTH: &'static str = "image:width";
    pub const LOCALE: &'static str = "locale";
    pub const LOCALE_ALTERNATE: &'static str = "locale:alternate";
    pub const PRICE_AMOUNT: &'static str = "price:amount";
    pub const PRICE_CURRENCY: &'static str = "price:currency";
    pub const RICH_ATTACHMENT: &'static str = "rich_attachment";
    pub const SEE_ALSO: &'static str = "see_also";
    pub const SITE_NAME: &'static str = "site_name";
    pub const TITLE: &'static str = "title";
    pub const TYPE: &'static str = "type";
    pub const UPDATED_TIME: &'static str = "updated_time";
    pub const URL: &'static str = "url";
    pub const VIDEO: &'static str = "video";
    pub const VIDEO_HEIGHT: &'static str = "video:height";
    pub const VIDEO_SECURE_URL: &'static str = "video:secure_url";
    pub const VIDEO_TYPE: &'static str = "video:type";
    pub const VIDEO_URL: &'static str = "video:url";
    pub const VIDEO_WIDTH: &'static str = "video:width";

    /// Create a new property.
    pub fn new(key: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Value carried by a [`Property`].
///
/// Extracted properties always hold [`PropertyValue::String`]; the other
/// variants appear when an object is turned back into properties for
/// publishing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum PropertyValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    DateTime(DateTime<FixedOffset>),

    /// Arbitrary JSON supplied by a caller. Only its scalar forms can be published.
    Structured(serde_json::Value),
}

impl PropertyValue {
    /// Name of the value's type, as reported in publisher errors.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::String(_) => "string",
            Self::DateTime(_) => "datetime",
            Self::Structured(value) => match value {
                serde_json::Value::Null => "null",
                serde_json::Value::Bool(_) => "bool",
                serde_json::Value::Number(_) => "number",
                serde_json::Value::String(_) => "string",
                serde_json::Value::Array(_) => "array",
                serde_json::Value::Object(_) => "object",
            },
        }
    }

    /// Borrow the value as a string slice if it is a plain string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            Self::Structured(serde_json::Value::String(s)) => Some(s),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(
            self,
            Self::Null | Self::Structured(serde_json::Value::Null)
        )
    }
}

impl fmt::Display for PropertyValue {
    /// Renders scalar values the way they appear in a `content` attribute.
    ///
    /// Structured arrays and objects render as compact JSON; the publisher
    /// rejects them before they get here.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Bool(b) => f.write_str(if *b { "1" } else { "0" }),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::String(s) => f.write_str(s),
            Self::DateTime(dt) => f.write_str(&coerce::format_datetime(dt)),
            Self::Structured(value) => match value {
                serde_json::Value::Null => Ok(()),
                serde_json::Value::Bool(b) => f.write_str(if *b { "1" } else { "0" }),
                serde_json::Value::String(s) => f.write_str(s),
                other => write!(f, "{other}"),
            },
        }
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for PropertyValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u32> for PropertyValue {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<DateTime<FixedOffset>> for PropertyValue {
    fn from(value: DateTime<FixedOffset>) -> Self {
        Self::DateTime(value)
    }
}

impl From<serde_json::Value> for PropertyValue {
    fn from(value: serde_json::Value) -> Self {
        Self::Structured(value)
    }
}

impl<T: Into<PropertyValue>> From<Option<T>> for PropertyValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_scalars() {
        assert_eq!(PropertyValue::Bool(true).to_string(), "1");
        assert_eq!(PropertyValue::Bool(false).to_string(), "0");
        assert_eq!(PropertyValue::Int(-1).to_string(), "-1");
        assert_eq!(PropertyValue::Float(1.11111).to_string(), "1.11111");
        assert_eq!(PropertyValue::from("string").to_string(), "string");
        assert_eq!(PropertyValue::Null.to_string(), "");
    }

    #[test]
    fn test_type_names() {
        assert_eq!(PropertyValue::from(300u32).type_name(), "int");
        assert_eq!(
            PropertyValue::from(serde_json::json!({"a": 1})).type_name(),
            "object"
        );
        assert_eq!(
            PropertyValue::from(serde_json::json!([1, 2])).type_name(),
            "array"
        );
    }

    #[test]
    fn test_option_conversion() {
        assert!(PropertyValue::from(None::<String>).is_null());
        assert_eq!(
            PropertyValue::from(Some("en_GB")),
            PropertyValue::String("en_GB".to_string())
        );
    }
}
