use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use lexan::{Analyzer, Classifier, SymbolTable, split};
use std::hint::black_box;

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer");

    let text_1 = "if x 10 3.5 foo 3x";
    group.throughput(Throughput::Bytes(text_1.len() as u64));
    group.bench_with_input(BenchmarkId::new("split", text_1.len()), text_1, |b, i| {
        b.iter(|| split(black_box(i)));
    });

    let text_2 = "for i 0 while i && j || k\nif a | b else c & d\n1e9 -42 9z foo!bar\n".repeat(64);
    group.throughput(Throughput::Bytes(text_2.len() as u64));
    group.bench_with_input(
        BenchmarkId::new("classify", text_2.len()),
        text_2.as_str(),
        |b, i| {
            let tokens = split(i);
            b.iter(|| {
                let mut table = SymbolTable::new();
                let mut classifier = Classifier::new(&mut table);
                for token in &tokens {
                    black_box(classifier.classify(black_box(token.text)));
                }
            });
        },
    );

    group.bench_with_input(
        BenchmarkId::new("analyze", text_2.len()),
        text_2.as_str(),
        |b, i| {
            b.iter(|| Analyzer::new().analyze(black_box(i)));
        },
    );
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
