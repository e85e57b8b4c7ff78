//! # opengraph-meta
//!
//! Extract [Open Graph](https://ogp.me/) metadata from HTML documents and
//! render Open Graph objects back into `<meta>` tags.
//!
//! ## Features
//!
//! - Parse `og:*` meta tags from strings, files, or URLs
//! - Images, videos and audio files with their sub-properties, following the
//!   Open Graph [array convention](https://ogp.me/#array)
//! - Optional fallback to `<title>`, headings, canonical link and meta
//!   description when Open Graph data is missing
//! - Generate HTML5 or XHTML meta tags from an object
//!
//! ## Consuming
//!
//! ```rust
//! use opengraph_meta::Consumer;
//!
//! let html = r#"<html><head>
//!     <meta property="og:title" content="Hello">
//!     <meta property="og:image" content="https://example.org/a.png">
//!     <meta property="og:image:height" content="300">
//! </head></html>"#;
//!
//! let object = Consumer::new().load_html(html, None).unwrap();
//! assert_eq!(object.title, Some("Hello".to_string()));
//! assert_eq!(object.images[0].height, Some(300));
//! ```
//!
//! ## Fetching
//!
//! ```rust,no_run
//! use std::time::Duration;
//! use opengraph_meta::{Consumer, ConsumerOptions, HttpFetcher, HttpOptions};
//!
//! #[tokio::main]
//! async fn main() -> opengraph_meta::Result<()> {
//!     let fetcher = HttpFetcher::with_options(
//!         HttpOptions::new()
//!             .timeout(Duration::from_secs(60))
//!             .user_agent("MyBot/1.0"),
//!     )?;
//!
//!     let consumer = Consumer::with_client(fetcher)
//!         .with_options(ConsumerOptions::new().fallback_mode(true));
//!     let object = consumer.load_url("https://example.org").await?;
//!     println!("Title: {:?}", object.title);
//!     Ok(())
//! }
//! ```
//!
//! ## Publishing
//!
//! ```rust
//! use opengraph_meta::{Doctype, Publisher, Video, Website};
//!
//! let mut website = Website::new();
//! website.url = Some("https://example.org".to_string());
//! let mut video = Video::new("https://example.org/intro.mp4");
//! video.width = Some(1920);
//! website.videos.push(video);
//!
//! let html = Publisher::new()
//!     .doctype(Doctype::Xhtml)
//!     .generate_html(&website)
//!     .unwrap();
//! assert!(html.contains(r#"<meta property="og:video:width" content="1920" />"#));
//! ```
//!
//! ## Without HTTP (parsing only)
//!
//! If you don't need HTTP fetching, disable the default `http` feature:
//!
//! ```toml
//! [dependencies]
//! opengraph-meta = { version = "1.0", default-features = false }
//! ```

mod coerce;
mod consumer;
mod elements;
mod error;
mod object;
mod property;
mod publisher;

#[cfg(feature = "http")]
mod http;

pub use consumer::{Consumer, ConsumerOptions, Fetch, extract_properties};
pub use elements::{Audio, Element, Image, Video};
pub use error::{Error, Result};
pub use object::{Object, ObjectBase, OpenGraphObject, Website};
pub use property::{Property, PropertyList, PropertyValue};
pub use publisher::{Doctype, Publisher};

#[cfg(feature = "http")]
pub use http::{HttpFetcher, HttpOptions};
