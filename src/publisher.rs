//! Rendering Open Graph objects as HTML meta tags

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::object::OpenGraphObject;
use crate::property::PropertyValue;

/// Markup style of the generated tags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Doctype {
    /// `<meta property="..." content="...">`
    #[default]
    Html5,

    /// `<meta property="..." content="..." />`
    Xhtml,
}

/// Generates Open Graph meta tags from objects.
///
/// # Example
///
/// ```
/// use opengraph_meta::{Image, Publisher, Website};
///
/// let mut website = Website::new();
/// website.title = Some("Fish & Chips".to_string());
/// website.images.push(Image::new("https://example.org/logo.png"));
///
/// let html = Publisher::new().generate_html(&website).unwrap();
/// assert_eq!(
///     html,
///     "<meta property=\"og:title\" content=\"Fish &amp; Chips\">\n\
///      <meta property=\"og:image:url\" content=\"https://example.org/logo.png\">\n\
///      <meta property=\"og:type\" content=\"website\">"
/// );
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Publisher {
    /// Markup style of the generated tags
    pub doctype: Doctype,
}

impl Publisher {
    /// Create a publisher emitting HTML5 tags.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the markup style.
    pub fn doctype(mut self, doctype: Doctype) -> Self {
        self.doctype = doctype;
        self
    }

    /// Generate one meta tag per property of `object`, joined by newlines.
    ///
    /// Null values are skipped. Booleans render as `1`/`0`, datetimes as
    /// ISO-8601. Arrays and objects are rejected with
    /// [`Error::UnsupportedValue`].
    pub fn generate_html<O: OpenGraphObject + ?Sized>(&self, object: &O) -> Result<String> {
        let close = match self.doctype {
            Doctype::Html5 => ">",
            Doctype::Xhtml => " />",
        };

        let mut lines = Vec::new();
        for property in object.properties() {
            if property.value.is_null() {
                continue;
            }
            if let PropertyValue::Structured(
                serde_json::Value::Array(_) | serde_json::Value::Object(_),
            ) = property.value
            {
                return Err(Error::UnsupportedValue {
                    value_type: property.value.type_name(),
                    key: property.key,
                });
            }

            let content = property.value.to_string();
            lines.push(format!(
                r#"<meta property="og:{}" content="{}"{}"#,
                html_escape::encode_double_quoted_attribute(&property.key),
                html_escape::encode_double_quoted_attribute(&content),
                close
            ));
        }

        Ok(lines.join("\n"))
    }
}
