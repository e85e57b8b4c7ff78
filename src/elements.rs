//! Open Graph media elements
//!
//! Images, videos and audio files follow the [array convention](https://ogp.me/#array):
//! a bare `og:image` starts a new element, and the attributes that follow it
//! (`og:image:width`, ...) describe that element.

use serde::{Deserialize, Serialize};

use crate::coerce;
use crate::property::{Property, PropertyList};

/// A media element attached to an Open Graph object.
pub trait Element: Sized {
    /// Kind name used in error messages ("image", "video", "audio").
    const KIND: &'static str;

    /// Create an element from the value of its bare marker property.
    fn from_url(url: impl Into<String>) -> Self;

    /// Apply a sub-attribute property (e.g. `image:width`) to this element.
    ///
    /// Keys that do not belong to this element are ignored.
    fn set_attribute(&mut self, key: &str, value: &str);

    /// Properties describing this element, url first.
    fn properties(&self) -> PropertyList;
}

/// An image attached to an Open Graph object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Image {
    /// URL of the image
    pub url: String,

    /// Alternate URL to use if the page requires HTTPS
    pub secure_url: Option<String>,

    /// MIME type (e.g., "image/jpeg")
    pub mime_type: Option<String>,

    /// Width in pixels
    pub width: Option<u32>,

    /// Height in pixels
    pub height: Option<u32>,

    /// Whether the image was uploaded by a user
    pub user_generated: Option<bool>,
}

impl Image {
    /// Create a new image with the given URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }
}

impl Element for Image {
    const KIND: &'static str = "image";

    fn from_url(url: impl Into<String>) -> Self {
        Self::new(url)
    }

    fn set_attribute(&mut self, key: &str, value: &str) {
        match key {
            Property::IMAGE_HEIGHT => self.height = coerce::parse_dimension(value),
            Property::IMAGE_WIDTH => self.width = coerce::parse_dimension(value),
            Property::IMAGE_TYPE => self.mime_type = Some(value.to_string()),
            Property::IMAGE_SECURE_URL => self.secure_url = Some(value.to_string()),
            Property::IMAGE_USER_GENERATED => self.user_generated = Some(coerce::parse_bool(value)),
            _ => {}
        }
    }

    fn properties(&self) -> PropertyList {
        let mut properties = vec![Property::new(Property::IMAGE_URL, self.url.as_str())];

        if let Some(height) = self.height {
            properties.push(Property::new(Property::IMAGE_HEIGHT, height));
        }
        if let Some(ref secure_url) = self.secure_url {
            properties.push(Property::new(Property::IMAGE_SECURE_URL, secure_url.as_str()));
        }
        if let Some(ref mime_type) = self.mime_type {
            properties.push(Property::new(Property::IMAGE_TYPE, mime_type.as_str()));
        }
        if let Some(width) = self.width {
            properties.push(Property::new(Property::IMAGE_WIDTH, width));
        }
        if let Some(user_generated) = self.user_generated {
            properties.push(Property::new(Property::IMAGE_USER_GENERATED, user_generated));
        }

        properties
    }
}

/// A video attached to an Open Graph object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Video {
    /// URL of the video
    pub url: String,

    /// Alternate URL to use if the page requires HTTPS
    pub secure_url: Option<String>,

    /// MIME type (e.g., "video/mp4")
    pub mime_type: Option<String>,

    /// Width in pixels
    pub width: Option<u32>,

    /// Height in pixels
    pub height: Option<u32>,
}

impl Video {
    /// Create a new video with the given URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }
}

impl Element for Video {
    const KIND: &'static str = "video";

    fn from_url(url: impl Into<String>) -> Self {
        Self::new(url)
    }

    fn set_attribute(&mut self, key: &str, value: &str) {
        match key {
            Property::VIDEO_HEIGHT => self.height = coerce::parse_dimension(value),
            Property::VIDEO_WIDTH => self.width = coerce::parse_dimension(value),
            Property::VIDEO_TYPE => self.mime_type = Some(value.to_string()),
            Property::VIDEO_SECURE_URL => self.secure_url = Some(value.to_string()),
            _ => {}
        }
    }

    fn properties(&self) -> PropertyList {
        let mut properties = vec![Property::new(Property::VIDEO_URL, self.url.as_str())];

        if let Some(height) = self.height {
            properties.push(Property::new(Property::VIDEO_HEIGHT, height));
        }
        if let Some(ref secure_url) = self.secure_url {
            properties.push(Property::new(Property::VIDEO_SECURE_URL, secure_url.as_str()));
        }
        if let Some(ref mime_type) = self.mime_type {
            properties.push(Property::new(Property::VIDEO_TYPE, mime_type.as_str()));
        }
        if let Some(width) = self.width {
            properties.push(Property::new(Property::VIDEO_WIDTH, width));
        }

        properties
    }
}

/// An audio file attached to an Open Graph object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Audio {
    /// URL of the audio file
    pub url: String,

    /// Alternate URL to use if the page requires HTTPS
    pub secure_url: Option<String>,

    /// MIME type (e.g., "audio/mpeg")
    pub mime_type: Option<String>,
}

impl Audio {
    /// Create a new audio element with the given URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }
}

impl Element for Audio {
    const KIND: &'static str = "audio";

    fn from_url(url: impl Into<String>) -> Self {
        Self::new(url)
    }

    fn set_attribute(&mut self, key: &str, value: &str) {
        match key {
            Property::AUDIO_TYPE => self.mime_type = Some(value.to_string()),
            Property::AUDIO_SECURE_URL => self.secure_url = Some(value.to_string()),
            _ => {}
        }
    }

    fn properties(&self) -> PropertyList {
        let mut properties = vec![Property::new(Property::AUDIO_URL, self.url.as_str())];

        if let Some(ref secure_url) = self.secure_url {
            properties.push(Property::new(Property::AUDIO_SECURE_URL, secure_url.as_str()));
        }
        if let Some(ref mime_type) = self.mime_type {
            properties.push(Property::new(Property::AUDIO_TYPE, mime_type.as_str()));
        }

        properties
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(properties: &[Property]) -> Vec<&str> {
        properties.iter().map(|p| p.key.as_str()).collect()
    }

    #[test]
    fn test_image_attributes() {
        let mut image = Image::new("http://example.org/image.png");
        image.set_attribute(Property::IMAGE_SECURE_URL, "https://example.org/image.png");
        image.set_attribute(Property::IMAGE_WIDTH, "800");
        image.set_attribute(Property::IMAGE_HEIGHT, "600");
        image.set_attribute(Property::IMAGE_TYPE, "image/png");
        image.set_attribute(Property::IMAGE_USER_GENERATED, "true");

        assert_eq!(image.url, "http://example.org/image.png");
        assert_eq!(
            image.secure_url,
            Some("https://example.org/image.png".to_string())
        );
        assert_eq!(image.width, Some(800));
        assert_eq!(image.height, Some(600));
        assert_eq!(image.mime_type, Some("image/png".to_string()));
        assert_eq!(image.user_generated, Some(true));
    }

    #[test]
    fn test_image_ignores_foreign_keys() {
        let mut image = Image::new("a.png");
        image.set_attribute(Property::VIDEO_WIDTH, "300");
        image.set_attribute("image:alt", "Alt text");
        assert_eq!(image, Image::new("a.png"));
    }

    #[test]
    fn test_image_property_order() {
        let mut image = Image::new("a.png");
        image.user_generated = Some(false);
        image.width = Some(140);
        image.mime_type = Some("image/png".to_string());
        image.secure_url = Some("https://a.png".to_string());
        image.height = Some(41);

        assert_eq!(
            keys(&image.properties()),
            [
                "image:url",
                "image:height",
                "image:secure_url",
                "image:type",
                "image:width",
                "image:user_generated",
            ]
        );
    }

    #[test]
    fn test_video_property_order() {
        let mut video = Video::new("a.mp4");
        video.set_attribute(Property::VIDEO_WIDTH, "1920");
        video.set_attribute(Property::VIDEO_HEIGHT, "1080");
        video.set_attribute(Property::VIDEO_TYPE, "video/mp4");

        assert_eq!(
            keys(&video.properties()),
            ["video:url", "video:height", "video:type", "video:width"]
        );
    }

    #[test]
    fn test_audio_properties() {
        let mut audio = Audio::new("a.mp3");
        audio.set_attribute(Property::AUDIO_TYPE, "audio/mp3");
        audio.set_attribute(Property::AUDIO_SECURE_URL, "https://a.mp3");

        let properties = audio.properties();
        assert_eq!(
            keys(&properties),
            ["audio:url", "audio:secure_url", "audio:type"]
        );
        assert_eq!(properties[2].value.as_str(), Some("audio/mp3"));
    }

    #[test]
    fn test_invalid_dimension_is_dropped() {
        let mut video = Video::new("a.mp4");
        video.set_attribute(Property::VIDEO_WIDTH, "wide");
        assert_eq!(video.width, None);
    }
}
