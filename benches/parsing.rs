use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use pullmark::{parse_html, parse_xml};

fn html_document(repeats: usize) -> String {
    let mut out = String::from("<!DOCTYPE html><html><head><title>bench</title></head><body>");
    for i in 0..repeats {
        out.push_str(&format!(
            "<div class=\"row r{i}\"><p>cell <b>{i}</b> &amp; more</p>\
             <table><tr><td>a</td><td>b</td></tr></table></div>"
        ));
    }
    out.push_str("</body></html>");
    out
}

fn xml_document(repeats: usize) -> String {
    let mut out = String::from("<?xml version=\"1.0\"?><feed xmlns=\"urn:bench\">");
    for i in 0..repeats {
        out.push_str(&format!(
            "<entry id=\"{i}\"><title>entry {i}</title><body>text &amp; markup</body></entry>"
        ));
    }
    out.push_str("</feed>");
    out
}

fn bench_parsers(c: &mut Criterion) {
    let html = html_document(200);
    let xml = xml_document(200);

    let mut group = c.benchmark_group("parse");
    group.throughput(Throughput::Bytes(html.len() as u64));
    group.bench_function("html", |b| {
        b.iter(|| {
            let count = parse_html(black_box(html.as_str()))
                .filter(|item| item.is_ok())
                .count();
            black_box(count)
        })
    });
    group.throughput(Throughput::Bytes(xml.len() as u64));
    group.bench_function("xml", |b| {
        b.iter(|| {
            let count = parse_xml(black_box(xml.as_str()))
                .filter(|item| item.is_ok())
                .count();
            black_box(count)
        })
    });
    group.finish();
}

criterion_group!(benches, bench_parsers);
criterion_main!(benches);
