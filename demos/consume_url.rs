//! Example: Fetch a page and display its Open Graph data

use opengraph_meta::{Consumer, ConsumerOptions, HttpFetcher};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "https://github.com".to_string());

    println!("Fetching: {}\n", url);

    let consumer = Consumer::with_client(HttpFetcher::new()?)
        .with_options(ConsumerOptions::new().fallback_mode(true));
    let object = consumer.load_url(&url).await?;

    println!("=== Open Graph ===");
    println!("Type: {:?}", object.og_type);
    println!("Title: {:?}", object.title);
    println!("Description: {:?}", object.description);
    println!("URL: {:?}", object.url);
    println!("Site name: {:?}", object.site_name);
    println!("Locale: {:?} (+{} alternates)", object.locale, object.locale_alternate.len());
    println!("Updated: {:?}", object.updated_time);

    println!("\n=== Images ({}) ===", object.images.len());
    for (i, img) in object.images.iter().enumerate() {
        println!("  [{}] {} ({:?}x{:?})", i, img.url, img.width, img.height);
    }

    println!("\n=== Videos ({}) ===", object.videos.len());
    for (i, video) in object.videos.iter().enumerate() {
        println!("  [{}] {} {:?}", i, video.url, video.mime_type);
    }

    println!("\n=== Audios ({}) ===", object.audios.len());
    for (i, audio) in object.audios.iter().enumerate() {
        println!("  [{}] {} {:?}", i, audio.url, audio.mime_type);
    }

    Ok(())
}
