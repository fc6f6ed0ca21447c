use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use oligocount::cli::EmptyQueryPolicy;
use oligocount::count::{count_file, count_non_overlapping, QueryCounter};
use oligocount::query::QuerySet;
use std::io::Write;
use tempfile::NamedTempFile;

/// FASTQ-shaped text with `reads` records of 100 bases each.
fn synthetic_fastq(reads: usize) -> String {
    let bases = "ACGTTGCAGATTACAGGCT".repeat(6);
    let quality = "I".repeat(100);
    let mut out = String::new();
    for i in 0..reads {
        out.push_str(&format!("@read{i}\n{}\n+\n{quality}\n", &bases[..100]));
    }
    out
}

fn bench_count_non_overlapping(c: &mut Criterion) {
    let mut group = c.benchmark_group("count_non_overlapping");
    let content = synthetic_fastq(1_000);

    for query in ["GATTACA", "ACGTTGCAGATTACAGGCT", "NNNNNNNN"] {
        group.bench_with_input(BenchmarkId::from_parameter(query), &query, |b, query| {
            b.iter(|| count_non_overlapping(black_box(content.as_bytes()), query.as_bytes()))
        });
    }

    group.finish();
}

fn bench_query_counter(c: &mut Criterion) {
    let mut group = c.benchmark_group("QueryCounter::count");
    let content = synthetic_fastq(1_000);

    for n in [1, 10, 100] {
        let queries: QuerySet = (0..n)
            .map(|i| format!("GATTACA{}", "G".repeat(i % 5)))
            .collect();
        let counter = QueryCounter::new(&queries, EmptyQueryPolicy::Zero).unwrap();

        group.bench_function(BenchmarkId::from_parameter(n), |b| {
            b.iter(|| counter.count(black_box(content.as_bytes())))
        });
    }

    group.finish();
}

fn bench_count_file(c: &mut Criterion) {
    let mut group = c.benchmark_group("count_file");
    let queries: QuerySet = ["GATTACA", "TTGCAG", "CCCCCC"].into_iter().collect();
    let counter = QueryCounter::new(&queries, EmptyQueryPolicy::Zero).unwrap();

    for reads in [1_000, 10_000] {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(synthetic_fastq(reads).as_bytes()).unwrap();
        temp.flush().unwrap();

        group.bench_function(BenchmarkId::from_parameter(reads), |b| {
            b.iter(|| count_file(black_box(temp.path()), &counter).unwrap().counts)
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_count_non_overlapping,
    bench_query_counter,
    bench_count_file
);
criterion_main!(benches);
