//! Benchmarks for Open Graph extraction and publishing

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use opengraph_meta::{Consumer, ConsumerOptions, Publisher, extract_properties};

const SAMPLE_HTML: &str = include_str!("../test_data/sample.html");

fn bench_consume(c: &mut Criterion) {
    let mut group = c.benchmark_group("consume");
    group.throughput(Throughput::Bytes(SAMPLE_HTML.len() as u64));

    let consumer = Consumer::new();
    group.bench_function("sample", |b| {
        b.iter(|| consumer.load_html(black_box(SAMPLE_HTML), None))
    });

    let fallback = Consumer::new().with_options(ConsumerOptions::new().fallback_mode(true));
    group.bench_function("sample_with_fallback", |b| {
        b.iter(|| fallback.load_html(black_box(SAMPLE_HTML), Some("https://example.com/")))
    });

    group.bench_function("extract_properties", |b| {
        b.iter(|| extract_properties(black_box(SAMPLE_HTML)))
    });

    group.finish();
}

fn bench_image_arrays(c: &mut Criterion) {
    let mut group = c.benchmark_group("image_arrays");
    let consumer = Consumer::new();

    // Generate HTML with varying numbers of images, each with sub-properties
    for image_count in [10, 100, 1000] {
        let html = generate_html_with_images(image_count);
        group.throughput(Throughput::Elements(image_count as u64));
        group.bench_with_input(
            BenchmarkId::new("consume", image_count),
            &html,
            |b, html| b.iter(|| consumer.load_html(black_box(html), None)),
        );
    }

    group.finish();
}

fn bench_fallback_body(c: &mut Criterion) {
    let mut group = c.benchmark_group("fallback");
    let consumer = Consumer::new().with_options(ConsumerOptions::new().fallback_mode(true));

    // Documents without Open Graph data, so every fallback runs
    for paragraphs in [10, 100, 500] {
        let html = generate_html_with_text(paragraphs);
        group.bench_with_input(
            BenchmarkId::new("paragraphs", paragraphs),
            &html,
            |b, html| b.iter(|| consumer.load_html(black_box(html), Some("about:blank"))),
        );
    }

    group.finish();
}

fn bench_publish(c: &mut Criterion) {
    let mut group = c.benchmark_group("publish");
    let publisher = Publisher::new();

    let sample = Consumer::new().load_html(SAMPLE_HTML, None).unwrap();
    group.bench_function("sample", |b| {
        b.iter(|| publisher.generate_html(black_box(&sample)))
    });

    let large = Consumer::new()
        .load_html(&generate_html_with_images(1000), None)
        .unwrap();
    group.bench_function("1000_images", |b| {
        b.iter(|| publisher.generate_html(black_box(&large)))
    });

    group.finish();
}

// Helper functions to generate test HTML

fn generate_html_with_images(count: usize) -> String {
    let images: String = (0..count)
        .map(|i| {
            format!(
                r#"<meta property="og:image" content="https://example.com/img/{i}.jpg">
                <meta property="og:image:width" content="{}">
                <meta property="og:image:height" content="{}">
                <meta property="og:image:type" content="image/jpeg">"#,
                100 + i,
                50 + i
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"<!DOCTYPE html>
        <html>
        <head>
            <meta property="og:title" content="Gallery">
            {}
        </head>
        <body></body>
        </html>"#,
        images
    )
}

fn generate_html_with_text(paragraphs: usize) -> String {
    let text: String = (0..paragraphs)
        .map(|i| {
            format!(
                "<p>This is paragraph number {}. It contains   some text\n that should be \
                 normalized when used as a fallback description.</p>",
                i
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"<!DOCTYPE html>
        <html>
        <head><title>Text Test</title></head>
        <body>
            <h1>Heading</h1>
            {}
        </body>
        </html>"#,
        text
    )
}

criterion_group!(
    benches,
    bench_consume,
    bench_image_arrays,
    bench_fallback_body,
    bench_publish,
);

criterion_main!(benches);
