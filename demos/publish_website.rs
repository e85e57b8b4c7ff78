//! Example: Build a website object and print its meta tags

use opengraph_meta::{Audio, Doctype, Image, Publisher, Video, Website};

fn main() -> opengraph_meta::Result<()> {
    let mut website = Website::new();
    website.url = Some("https://www.example.com".to_string());
    website.title = Some("Example - Intranet & Mobile Applications".to_string());
    website.description = Some("Creators of fine Open Graph tags.".to_string());
    website.site_name = Some("Example".to_string());
    website.locale = Some("en_GB".to_string());

    let mut image = Image::new("https://www.example.com/assets/logo.png");
    image.width = Some(140);
    image.height = Some(41);
    image.mime_type = Some("image/png".to_string());
    website.images.push(image);

    let mut video = Video::new("https://www.example.com/assets/intro.mp4");
    video.width = Some(1920);
    video.height = Some(1080);
    video.mime_type = Some("video/mp4".to_string());
    website.videos.push(video);

    let mut audio = Audio::new("https://www.example.com/assets/theme.mp3");
    audio.mime_type = Some("audio/mpeg".to_string());
    website.audios.push(audio);

    let publisher = Publisher::new().doctype(Doctype::Html5);
    println!("{}", publisher.generate_html(&website)?);

    Ok(())
}
