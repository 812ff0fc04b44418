use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use defparser::parser::lexer::classify_line;
use defparser::{parse_definition, validate_definition};
use std::hint::black_box;

/// Generate a definition file with `sections` sections of `body_lines` lines each
fn generate_definition(sections: usize, body_lines: usize, pattern: &str) -> String {
    let mut content = String::from("Bootstrap: docker\nFrom: ubuntu:22.04\n");

    match pattern {
        "continuation_heavy" => {
            content.push_str("Include: \\\n");
            for i in 0..body_lines {
                content.push_str(&format!("    pkg{} \\\n", i));
            }
            content.push_str("    last\n");
        }
        "comment_heavy" => {
            for i in 0..body_lines {
                content.push_str(&format!("# header comment {}\n\n", i));
            }
        }
        _ => {}
    }

    for s in 0..sections {
        let name = if s % 2 == 0 { "post" } else { "runscript" };
        content.push_str(&format!("%{}\n", name));
        for i in 0..body_lines {
            content.push_str(&format!("    echo step {} of section {}\n", i, s));
        }
    }

    content
}

/// Benchmark classifying single lines
fn bench_line_classification(c: &mut Criterion) {
    let test_lines = vec![
        ("header", "Bootstrap: docker\n"),
        ("header_with_comment", "From: ubuntu:22.04   # pinned base\n"),
        ("comment_only", "# This is a comment line with some detail\n"),
        ("section_marker", "%post -c /bin/bash\n"),
        ("body", "    apt-get install -y python3 python3-pip\n"),
    ];

    let mut group = c.benchmark_group("line_classification");

    for (name, line) in test_lines {
        group.bench_with_input(BenchmarkId::new("classify_line", name), &line, |b, line| {
            b.iter(|| black_box(classify_line(black_box(line))))
        });
    }

    group.finish();
}

/// Benchmark parsing whole files of different shapes and sizes
fn bench_file_parsing(c: &mut Criterion) {
    let sizes = vec![10, 100, 1_000];
    let patterns = vec!["plain", "continuation_heavy", "comment_heavy"];

    let mut group = c.benchmark_group("file_parsing");

    for &size in &sizes {
        for pattern in &patterns {
            let content = generate_definition(size, 20, pattern);

            group.throughput(Throughput::Bytes(content.len() as u64));
            group.bench_with_input(
                BenchmarkId::new(*pattern, size),
                &content,
                |b, content| b.iter(|| black_box(parse_definition(black_box(content)))),
            );
        }
    }

    group.finish();
}

/// Benchmark parse followed by validation
fn bench_parse_and_validate(c: &mut Criterion) {
    let content = generate_definition(100, 20, "plain");

    c.bench_function("parse_and_validate", |b| {
        b.iter(|| {
            let result = parse_definition(black_box(&content));
            black_box(validate_definition(&result))
        })
    });
}

criterion_group!(
    benches,
    bench_line_classification,
    bench_file_parsing,
    bench_parse_and_validate
);
criterion_main!(benches);
