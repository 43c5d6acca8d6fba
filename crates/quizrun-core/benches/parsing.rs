use criterion::{black_box, criterion_group, criterion_main, Criterion};

use quizrun_core::loader::{parse_flat_str, parse_structured_str};

fn bench_flat_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("flat_parsing");

    let small = generate_flat_bank(5);
    let medium = generate_flat_bank(50);
    let large = generate_flat_bank(200);

    group.bench_function("5_blocks", |b| b.iter(|| parse_flat_str(black_box(&small))));
    group.bench_function("50_blocks", |b| b.iter(|| parse_flat_str(black_box(&medium))));
    group.bench_function("200_blocks", |b| b.iter(|| parse_flat_str(black_box(&large))));

    // every other block is malformed and gets skipped
    let mixed = {
        let mut s = String::new();
        for i in 0..100 {
            if i % 2 == 0 {
                s.push_str(&flat_block(i));
            } else {
                s.push_str(&format!("\nQuestion {i}: Broken?\nA) only\nB) two\n"));
            }
        }
        s
    };
    group.bench_function("100_blocks_half_malformed", |b| {
        b.iter(|| parse_flat_str(black_box(&mixed)))
    });

    group.finish();
}

fn bench_structured_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("structured_parsing");

    let small = generate_json_bank(5);
    let medium = generate_json_bank(50);
    let large = generate_json_bank(200);

    group.bench_function("5_records", |b| {
        b.iter(|| parse_structured_str(black_box(&small), black_box("bench.json".as_ref())))
    });
    group.bench_function("50_records", |b| {
        b.iter(|| parse_structured_str(black_box(&medium), black_box("bench.json".as_ref())))
    });
    group.bench_function("200_records", |b| {
        b.iter(|| parse_structured_str(black_box(&large), black_box("bench.json".as_ref())))
    });

    group.finish();
}

fn flat_block(i: usize) -> String {
    format!(
        "\nQuestion {i}: What does option {i} mean?\nA) first\nB) second\nC) third\nD) fourth\nAnswer: B\n"
    )
}

fn generate_flat_bank(n: usize) -> String {
    (0..n).map(flat_block).collect()
}

fn generate_json_bank(n: usize) -> String {
    let records: Vec<String> = (0..n)
        .map(|i| {
            format!(
                r#"{{
    "question": "What does option {i} mean?",
    "option_a": "first",
    "option_b": "second",
    "option_c": "third",
    "option_d": "fourth",
    "answer": "B",
    "explanation": "The second option is the canonical one.",
    "domain": "Benchmarks"
}}"#
            )
        })
        .collect();
    format!("[{}]", records.join(","))
}

criterion_group!(benches, bench_flat_parsing, bench_structured_parsing);
criterion_main!(benches);
