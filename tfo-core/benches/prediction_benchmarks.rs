use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use std::time::Duration;
use tfo_core::config::TfoConfig;
use tfo_core::constants::SAMPLE_SEQUENCE;
use tfo_core::engine::{TfoAnalyzer, predict};
use tfo_core::sequence::{FastaRecord, TfoSequence};
use tfo_core::types::Conditions;

fn configure_criterion() -> Criterion {
    Criterion::default()
        .measurement_time(Duration::from_secs(10))
        .warm_up_time(Duration::from_secs(3))
        .sample_size(50)
        .significance_level(0.05)
        .noise_threshold(0.02)
}

fn bench_single_prediction(c: &mut Criterion) {
    let sequence: TfoSequence = SAMPLE_SEQUENCE.parse().unwrap();
    let conditions = Conditions::new(7.2, 5.0, 10.0).unwrap();

    c.bench_function("predict_sample", |b| {
        b.iter(|| predict(black_box(&sequence), black_box(&conditions)))
    });
}

fn bench_batch(c: &mut Criterion) {
    let analyzer = TfoAnalyzer::new(TfoConfig::default());
    let conditions = Conditions::new(7.2, 5.0, 10.0).unwrap();
    let mut group = c.benchmark_group("analyze_records");

    for size in [100usize, 1_000, 10_000] {
        let records: Vec<FastaRecord> = (0..size)
            .map(|i| {
                let seq = SAMPLE_SEQUENCE.repeat(1 + i % 4);
                (format!("tfo_{i}"), None, seq.into_bytes())
            })
            .collect();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &records, |b, records| {
            b.iter(|| analyzer.analyze_records(black_box(records.clone()), conditions))
        });
    }
    group.finish();
}

criterion_group! {
    name = benches;
    config = configure_criterion();
    targets = bench_single_prediction, bench_batch
}
criterion_main!(benches);
