//! Open Graph extraction from HTML documents

use std::fs;
use std::future::Future;
use std::path::Path;
use std::sync::OnceLock;

use scraper::{ElementRef, Html, Selector};
use tracing::{debug, trace};

use crate::error::Result;
use crate::object::Object;
use crate::property::{Property, PropertyList};

const OG_PREFIX: &str = "og:";
const EMPTY_DOCUMENT: &str = "<!DOCTYPE html><html><head></head><body></body></html>";

fn meta_selector() -> &'static Selector {
    static SELECTOR: OnceLock<Selector> = OnceLock::new();
    SELECTOR.get_or_init(|| Selector::parse("meta").unwrap())
}

fn canonical_selector() -> &'static Selector {
    static SELECTOR: OnceLock<Selector> = OnceLock::new();
    SELECTOR.get_or_init(|| Selector::parse(r#"link[rel="canonical"]"#).unwrap())
}

fn title_selector() -> &'static Selector {
    static SELECTOR: OnceLock<Selector> = OnceLock::new();
    SELECTOR.get_or_init(|| Selector::parse("title").unwrap())
}

fn h1_selector() -> &'static Selector {
    static SELECTOR: OnceLock<Selector> = OnceLock::new();
    SELECTOR.get_or_init(|| Selector::parse("h1").unwrap())
}

fn h2_selector() -> &'static Selector {
    static SELECTOR: OnceLock<Selector> = OnceLock::new();
    SELECTOR.get_or_init(|| Selector::parse("h2").unwrap())
}

fn description_selector() -> &'static Selector {
    static SELECTOR: OnceLock<Selector> = OnceLock::new();
    SELECTOR.get_or_init(|| {
        Selector::parse(r#"meta[property="description"], meta[name="description"]"#).unwrap()
    })
}

fn paragraph_selector() -> &'static Selector {
    static SELECTOR: OnceLock<Selector> = OnceLock::new();
    SELECTOR.get_or_init(|| Selector::parse("p").unwrap())
}

/// Source of raw HTML for a URL.
///
/// Implemented by [`HttpFetcher`](crate::HttpFetcher) when the `http`
/// feature is enabled. Custom clients report transport failures with
/// [`Error::client`](crate::Error::client).
pub trait Fetch {
    /// Fetch the document at `url` and return its raw bytes.
    fn fetch(&self, url: &str) -> impl Future<Output = Result<Vec<u8>>> + Send;
}

/// Configuration for a [`Consumer`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConsumerOptions {
    /// Fill a missing url, title and description from non-Open Graph markup
    /// (canonical link, `<title>`, headings, meta description, paragraphs).
    pub fallback_mode: bool,

    /// Fail with [`Error::OrphanAttribute`](crate::Error::OrphanAttribute)
    /// instead of silently dropping element attributes that have no element.
    pub debug: bool,
}

impl ConsumerOptions {
    /// Create options with fallback and debug mode disabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether fallback mode is enabled.
    pub fn fallback_mode(mut self, enabled: bool) -> Self {
        self.fallback_mode = enabled;
        self
    }

    /// Set whether debug mode is enabled.
    pub fn debug(mut self, enabled: bool) -> Self {
        self.debug = enabled;
        self
    }
}

/// Extracts Open Graph objects from HTML, a file, or (with a client) a URL.
///
/// # Example
///
/// ```
/// use opengraph_meta::{Consumer, ConsumerOptions};
///
/// let html = r#"<html><head>
///     <meta property="og:title" content="Hello">
///     <meta property="og:image" content="https://example.org/a.png">
///     <meta property="og:image:width" content="300">
/// </head></html>"#;
///
/// let consumer = Consumer::new().with_options(ConsumerOptions::new().debug(true));
/// let object = consumer.load_html(html, None).unwrap();
/// assert_eq!(object.title.as_deref(), Some("Hello"));
/// assert_eq!(object.images[0].width, Some(300));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Consumer<F = ()> {
    client: F,
    options: ConsumerOptions,
}

impl Consumer {
    /// Create a consumer without an HTTP client.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<F> Consumer<F> {
    /// Create a consumer that fetches URLs with `client`.
    pub fn with_client(client: F) -> Self {
        Self {
            client,
            options: ConsumerOptions::default(),
        }
    }

    /// Replace the consumer options.
    pub fn with_options(mut self, options: ConsumerOptions) -> Self {
        self.options = options;
        self
    }

    /// The options this consumer extracts with.
    pub fn options(&self) -> &ConsumerOptions {
        &self.options
    }

    /// Extract the Open Graph object from an HTML string.
    ///
    /// `fallback_url` becomes the object's url in fallback mode when the
    /// document provides neither `og:url` nor a canonical link.
    pub fn load_html(&self, html: &str, fallback_url: Option<&str>) -> Result<Object> {
        let document = parse_document(html);
        let properties = properties_from_document(&document);

        let mut object = Object::for_properties(&properties);
        object.assign_properties(&properties, self.options.debug)?;

        if self.options.fallback_mode {
            apply_fallbacks(&mut object, &document, fallback_url);
        }

        Ok(object)
    }

    /// Extract the Open Graph object from an HTML file.
    pub fn load_file(&self, path: impl AsRef<Path>, fallback_url: Option<&str>) -> Result<Object> {
        let content = fs::read_to_string(path)?;
        self.load_html(&content, fallback_url)
    }
}

impl<F: Fetch> Consumer<F> {
    /// Fetch `url` and extract its Open Graph object.
    ///
    /// The URL itself serves as the fallback url. Client errors are returned
    /// as-is; there is no retry.
    pub async fn load_url(&self, url: &str) -> Result<Object> {
        let body = self.client.fetch(url).await?;
        let html = String::from_utf8_lossy(&body);
        self.load_html(&html, Some(url))
    }
}

/// Extract the ordered list of `og:*` properties from an HTML string.
///
/// Keys are lowercased and stripped of their `og:` prefix. A tag without a
/// `content` attribute yields an empty value.
pub fn extract_properties(html: &str) -> PropertyList {
    properties_from_document(&parse_document(html))
}

fn parse_document(html: &str) -> Html {
    if html.trim().is_empty() {
        Html::parse_document(EMPTY_DOCUMENT)
    } else {
        Html::parse_document(html)
    }
}

fn properties_from_document(document: &Html) -> PropertyList {
    let properties: PropertyList = document
        .select(meta_selector())
        .filter_map(|element| {
            let el = element.value();

            // Exactly one source attribute per tag: `property` wins over `name`
            let key = ["property", "name"]
                .into_iter()
                .filter_map(|attr| el.attr(attr))
                .find_map(strip_og_prefix)?;

            let content = el.attr("content").unwrap_or_default().trim();
            Some(Property::new(key.trim().to_lowercase(), content))
        })
        .collect();

    trace!(count = properties.len(), "extracted Open Graph properties");
    properties
}

fn strip_og_prefix(attr: &str) -> Option<&str> {
    let attr = attr.trim();
    attr.get(..OG_PREFIX.len())
        .filter(|prefix| prefix.eq_ignore_ascii_case(OG_PREFIX))
        .map(|_| &attr[OG_PREFIX.len()..])
}

fn apply_fallbacks(object: &mut Object, document: &Html, fallback_url: Option<&str>) {
    if is_missing(&object.url) {
        object.url = first_non_empty_attr(document, canonical_selector(), "href")
            .or_else(|| fallback_url.map(normalize_text).filter(|s| !s.is_empty()));
        debug!(url = ?object.url, "applied url fallback");
    }

    if is_missing(&object.title) {
        object.title = [title_selector(), h1_selector(), h2_selector()]
            .into_iter()
            .find_map(|selector| text_of_first(document, selector));
        debug!(title = ?object.title, "applied title fallback");
    }

    if is_missing(&object.description) {
        object.description = first_non_empty_attr(document, description_selector(), "content")
            .or_else(|| text_of_first(document, paragraph_selector()));
        debug!(description = ?object.description, "applied description fallback");
    }
}

fn is_missing(field: &Option<String>) -> bool {
    field.as_deref().is_none_or(str::is_empty)
}

/// First non-empty value of `attr` among the elements matching `selector`.
fn first_non_empty_attr(document: &Html, selector: &Selector, attr: &str) -> Option<String> {
    document
        .select(selector)
        .filter_map(|el| el.value().attr(attr))
        .map(normalize_text)
        .find(|s| !s.is_empty())
}

fn text_of_first(document: &Html, selector: &Selector) -> Option<String> {
    document
        .select(selector)
        .next()
        .map(|el: ElementRef<'_>| normalize_text(&el.text().collect::<String>()))
        .filter(|s| !s.is_empty())
}

/// Trim and collapse runs of whitespace into single spaces.
fn normalize_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
