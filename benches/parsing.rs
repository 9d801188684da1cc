use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use inikeep::{parse_str, to_string, Document, Key, Section, Value};

fn sample_ini(sections: usize, pairs_per_section: usize) -> String {
    let mut text = String::new();
    text.push_str("version=1\nenvironment=production\n");

    for s in 0..sections {
        text.push_str(&format!("\n; settings for node {}\n[node{}]\n", s, s));
        for p in 0..pairs_per_section {
            text.push_str(&format!("key{}=value{}\n", p, p));
        }
    }

    text
}

fn sample_document(sections: usize, pairs_per_section: usize) -> Document {
    let mut document = Document::new();
    document
        .globals_mut()
        .insert(Key::new("version"), Value::from("1"))
        .unwrap();

    for s in 0..sections {
        let mut section = Section::with_comment(format!("settings for node {}", s));
        for p in 0..pairs_per_section {
            section
                .pairs_mut()
                .insert(Key::new(format!("key{}", p)), Value::from(format!("value{}", p)))
                .unwrap();
        }
        document.insert_section(format!("node{}", s), section);
    }

    document
}

fn benchmark_parse_simple(c: &mut Criterion) {
    let ini = "host=localhost\nport=8080\n\n; primary\n[server]\ntls=Yes\nworkers=4\n";

    c.bench_function("parse_simple_document", |b| {
        b.iter(|| parse_str(black_box(ini)))
    });
}

fn benchmark_write_simple(c: &mut Criterion) {
    let document = sample_document(1, 4);

    c.bench_function("write_simple_document", |b| {
        b.iter(|| to_string(black_box(&document)))
    });
}

fn benchmark_parse_sections(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_sections");

    for size in [10, 50, 100, 500].iter() {
        let ini = sample_ini(*size, 8);

        group.bench_with_input(BenchmarkId::from_parameter(size), &ini, |b, ini| {
            b.iter(|| parse_str(black_box(ini)))
        });
    }
    group.finish();
}

fn benchmark_write_sections(c: &mut Criterion) {
    let mut group = c.benchmark_group("write_sections");

    for size in [10, 50, 100, 500].iter() {
        let document = sample_document(*size, 8);

        group.bench_with_input(BenchmarkId::from_parameter(size), &document, |b, document| {
            b.iter(|| to_string(black_box(document)))
        });
    }
    group.finish();
}

fn benchmark_round_trip(c: &mut Criterion) {
    let ini = sample_ini(50, 8);

    c.bench_function("round_trip_50_sections", |b| {
        b.iter(|| {
            let document = parse_str(black_box(&ini)).unwrap();
            to_string(&document)
        })
    });
}

criterion_group!(
    benches,
    benchmark_parse_simple,
    benchmark_write_simple,
    benchmark_parse_sections,
    benchmark_write_sections,
    benchmark_round_trip
);
criterion_main!(benches);
