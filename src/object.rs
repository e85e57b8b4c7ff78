//! Open Graph objects
//!
//! [`ObjectBase`] holds the properties common to every object type and
//! implements the assignment rules that turn an ordered [`PropertyList`]
//! into a populated object. [`Object`] is the type-dispatched result of
//! consuming a document.

use std::cmp::Reverse;
use std::ops::{Deref, DerefMut};

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::coerce;
use crate::elements::{Audio, Element, Image, Video};
use crate::error::{Error, Result};
use crate::property::{Property, PropertyList};

/// Anything that can be rendered as a list of Open Graph properties.
pub trait OpenGraphObject {
    /// Properties describing this object, in publishing order.
    fn properties(&self) -> PropertyList;
}

/// Data shared by all Open Graph object types.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObjectBase {
    /// Audio files attached to the object
    pub audios: Vec<Audio>,

    /// A short description of the object
    pub description: Option<String>,

    /// Word that appears before the title in a sentence ("a", "an", "the", "", "auto")
    pub determiner: Option<String>,

    /// Images attached to the object
    pub images: Vec<Image>,

    /// The locale of the content (e.g., "en_US")
    pub locale: Option<String>,

    /// Alternative locales available
    pub locale_alternate: Vec<String>,

    /// Price amount, kept as written (e.g., "15.00")
    pub price_amount: Option<String>,

    /// ISO 4217 currency code of the price (e.g., "EUR")
    pub price_currency: Option<String>,

    /// Whether the page asks for a rich attachment when shared
    pub rich_attachment: Option<bool>,

    /// URLs of related resources
    pub see_also: Vec<String>,

    /// The name of the site
    pub site_name: Option<String>,

    /// The title of the object
    pub title: Option<String>,

    /// The type of object (e.g., "website")
    pub og_type: Option<String>,

    /// When the object was last updated
    pub updated_time: Option<DateTime<FixedOffset>>,

    /// The canonical URL of the object
    pub url: Option<String>,

    /// Videos attached to the object
    pub videos: Vec<Video>,
}

/// Index of the most recently appended element of one kind.
///
/// Sub-attributes always target this element.
#[derive(Debug, Clone, Copy)]
struct LastElement(Option<usize>);

impl LastElement {
    fn of<E>(collection: &[E]) -> Self {
        Self(collection.len().checked_sub(1))
    }

    fn push<E: Element>(&mut self, collection: &mut Vec<E>, url: &str) {
        collection.push(E::from_url(url));
        self.0 = Some(collection.len() - 1);
    }

    fn set_attribute<E: Element>(
        self,
        collection: &mut [E],
        key: &str,
        value: &str,
        debug_mode: bool,
    ) -> Result<()> {
        match self.0.and_then(|index| collection.get_mut(index)) {
            Some(element) => {
                element.set_attribute(key, value);
                Ok(())
            }
            None if debug_mode => Err(Error::OrphanAttribute {
                key: key.to_string(),
                kind: E::KIND,
            }),
            None => {
                debug!(key, kind = E::KIND, "dropping attribute without element");
                Ok(())
            }
        }
    }
}

fn image_area(image: &Image) -> u64 {
    u64::from(image.width.unwrap_or(0)) * u64::from(image.height.unwrap_or(0))
}

fn set_once(field: &mut Option<String>, value: &str) {
    if field.is_none() {
        *field = Some(value.to_string());
    }
}

impl ObjectBase {
    /// Create an empty object of the given type.
    pub fn new(og_type: impl Into<String>) -> Self {
        Self {
            og_type: Some(og_type.into()),
            ..Default::default()
        }
    }

    /// Assign all properties to this object, in order.
    ///
    /// Scalar fields keep the first value seen. `locale:alternate` and
    /// `see_also` collect every value. A bare `image`, `video` or `audio`
    /// (or its `:url` form) appends a new element, and sub-attributes apply
    /// to the element appended last. A sub-attribute with no element before
    /// it is dropped, or returns [`Error::OrphanAttribute`] when `debug_mode`
    /// is set. `type` is never assigned; it is fixed by the object type.
    pub fn assign_properties(&mut self, properties: &[Property], debug_mode: bool) -> Result<()> {
        let mut last_image = LastElement::of(&self.images);
        let mut last_video = LastElement::of(&self.videos);
        let mut last_audio = LastElement::of(&self.audios);

        for property in properties {
            let key = property.key.as_str();
            let value = property.value.to_string();
            let value = value.as_str();

            match key {
                Property::AUDIO | Property::AUDIO_URL => last_audio.push(&mut self.audios, value),
                Property::AUDIO_SECURE_URL | Property::AUDIO_TYPE => {
                    last_audio.set_attribute(&mut self.audios, key, value, debug_mode)?
                }
                Property::DESCRIPTION => set_once(&mut self.description, value),
                Property::DETERMINER => set_once(&mut self.determiner, value),
                Property::IMAGE | Property::IMAGE_URL => last_image.push(&mut self.images, value),
                Property::IMAGE_HEIGHT
                | Property::IMAGE_SECURE_URL
                | Property::IMAGE_TYPE
                | Property::IMAGE_WIDTH
                | Property::IMAGE_USER_GENERATED => {
                    last_image.set_attribute(&mut self.images, key, value, debug_mode)?
                }
                Property::LOCALE => set_once(&mut self.locale, value),
                Property::LOCALE_ALTERNATE => self.locale_alternate.push(value.to_string()),
                Property::PRICE_AMOUNT => set_once(&mut self.price_amount, value),
                Property::PRICE_CURRENCY => set_once(&mut self.price_currency, value),
                // Re-assigned on every occurrence, unlike the other scalars
                Property::RICH_ATTACHMENT => self.rich_attachment = Some(coerce::parse_bool(value)),
                Property::SEE_ALSO => self.see_also.push(value.to_string()),
                Property::SITE_NAME => set_once(&mut self.site_name, value),
                Property::TITLE => set_once(&mut self.title, value),
                Property::UPDATED_TIME => {
                    if self.updated_time.is_none() {
                        self.updated_time = coerce::parse_datetime(value);
                    }
                }
                Property::URL => set_once(&mut self.url, value),
                Property::VIDEO | Property::VIDEO_URL => last_video.push(&mut self.videos, value),
                Property::VIDEO_HEIGHT
                | Property::VIDEO_SECURE_URL
                | Property::VIDEO_TYPE
                | Property::VIDEO_WIDTH => {
                    last_video.set_attribute(&mut self.videos, key, value, debug_mode)?
                }
                _ => trace!(key, "ignoring unknown property"),
            }
        }

        Ok(())
    }

    /// The image with the largest area, or `None` if there are no images.
    ///
    /// A missing width or height counts as 0. Ties go to the earliest image.
    pub fn largest_image(&self) -> Option<&Image> {
        self.images.iter().min_by_key(|image| Reverse(image_area(image)))
    }

    /// The smallest image at least `min_width` wide and `min_height` high.
    ///
    /// A missing width or height counts as 0. Ties go to the earliest image.
    pub fn image(&self, min_width: u32, min_height: u32) -> Option<&Image> {
        self.images
            .iter()
            .filter(|image| {
                image.width.unwrap_or(0) >= min_width && image.height.unwrap_or(0) >= min_height
            })
            .min_by_key(|image| image_area(image))
    }

    /// Check if the object carries no meaningful content.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.url.is_none()
            && self.images.is_empty()
            && self.videos.is_empty()
            && self.audios.is_empty()
    }
}

impl OpenGraphObject for ObjectBase {
    fn properties(&self) -> PropertyList {
        let mut properties = PropertyList::new();

        properties.extend(self.audios.iter().flat_map(Element::properties));

        if let Some(ref title) = self.title {
            properties.push(Property::new(Property::TITLE, title.as_str()));
        }
        if let Some(ref description) = self.description {
            properties.push(Property::new(Property::DESCRIPTION, description.as_str()));
        }
        if let Some(ref determiner) = self.determiner {
            properties.push(Property::new(Property::DETERMINER, determiner.as_str()));
        }

        properties.extend(self.images.iter().flat_map(Element::properties));

        if let Some(ref locale) = self.locale {
            properties.push(Property::new(Property::LOCALE, locale.as_str()));
        }
        for locale in &self.locale_alternate {
            properties.push(Property::new(Property::LOCALE_ALTERNATE, locale.as_str()));
        }
        if let Some(ref amount) = self.price_amount {
            properties.push(Property::new(Property::PRICE_AMOUNT, amount.as_str()));
        }
        if let Some(ref currency) = self.price_currency {
            properties.push(Property::new(Property::PRICE_CURRENCY, currency.as_str()));
        }
        if let Some(rich_attachment) = self.rich_attachment {
            properties.push(Property::new(
                Property::RICH_ATTACHMENT,
                i64::from(rich_attachment),
            ));
        }
        for url in &self.see_also {
            properties.push(Property::new(Property::SEE_ALSO, url.as_str()));
        }
        if let Some(ref site_name) = self.site_name {
            properties.push(Property::new(Property::SITE_NAME, site_name.as_str()));
        }
        if let Some(ref og_type) = self.og_type {
            properties.push(Property::new(Property::TYPE, og_type.as_str()));
        }
        if let Some(updated_time) = self.updated_time {
            properties.push(Property::new(
                Property::UPDATED_TIME,
                coerce::format_datetime(&updated_time),
            ));
        }
        if let Some(ref url) = self.url {
            properties.push(Property::new(Property::URL, url.as_str()));
        }

        properties.extend(self.videos.iter().flat_map(Element::properties));

        properties
    }
}

/// A website. Uses only the common Open Graph properties.
///
/// See <https://ogp.me/#type_website>.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Website {
    #[serde(flatten)]
    base: ObjectBase,
}

impl Website {
    pub const TYPE: &'static str = "website";

    /// Create an empty website object.
    pub fn new() -> Self {
        Self {
            base: ObjectBase::new(Self::TYPE),
        }
    }

    /// Consume the website, returning the underlying object data.
    pub fn into_inner(self) -> ObjectBase {
        self.base
    }
}

impl Default for Website {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for Website {
    type Target = ObjectBase;

    fn deref(&self) -> &ObjectBase {
        &self.base
    }
}

impl DerefMut for Website {
    fn deref_mut(&mut self) -> &mut ObjectBase {
        &mut self.base
    }
}

impl OpenGraphObject for Website {
    fn properties(&self) -> PropertyList {
        self.base.properties()
    }
}

type Constructor = fn() -> Object;

/// Registered object types, keyed by their `og:type` value.
///
/// Unknown or missing types fall back to [`Website`]. New object types are
/// added here together with a variant of [`Object`].
const OBJECT_TYPES: &[(&str, Constructor)] = &[(Website::TYPE, new_website)];

fn new_website() -> Object {
    Object::Website(Website::new())
}

/// An Open Graph object of any supported type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Object {
    Website(Website),
}

impl Object {
    /// Construct an empty object for an `og:type` value.
    pub fn for_type(og_type: Option<&str>) -> Self {
        let constructor = og_type.and_then(|tag| {
            OBJECT_TYPES
                .iter()
                .find(|(name, _)| name.eq_ignore_ascii_case(tag.trim()))
                .map(|(_, constructor)| *constructor)
        });

        match constructor {
            Some(constructor) => constructor(),
            None => {
                if let Some(tag) = og_type {
                    debug!(og_type = tag, "unsupported object type, using website");
                }
                new_website()
            }
        }
    }

    /// Construct an empty object for the `type` property in `properties`, if any.
    pub fn for_properties(properties: &[Property]) -> Self {
        let og_type = properties
            .iter()
            .find(|p| p.key == Property::TYPE)
            .and_then(|p| p.value.as_str());
        trace!(?og_type, "dispatching object type");
        Self::for_type(og_type)
    }

    /// Return the website if this object is one.
    pub fn as_website(&self) -> Option<&Website> {
        match self {
            Object::Website(website) => Some(website),
        }
    }

    /// Consume the object, returning the website if this object is one.
    pub fn into_website(self) -> Option<Website> {
        match self {
            Object::Website(website) => Some(website),
        }
    }
}

impl Deref for Object {
    type Target = ObjectBase;

    fn deref(&self) -> &ObjectBase {
        match self {
            Object::Website(website) => website,
        }
    }
}

impl DerefMut for Object {
    fn deref_mut(&mut self) -> &mut ObjectBase {
        match self {
            Object::Website(website) => website,
        }
    }
}

impl OpenGraphObject for Object {
    fn properties(&self) -> PropertyList {
        match self {
            Object::Website(website) => website.properties(),
        }
    }
}
