use bencher::test_cases;
use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};
use micro_body::classify::classify;
use micro_body::codec::{encode, render};
use micro_body::editable::EditableBody;
use std::hint::black_box;

fn benchmark_classify(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("classify");

    for case in test_cases() {
        group.throughput(Throughput::Bytes(case.body().len() as u64));
        group.bench_with_input(BenchmarkId::new(format!("{:?}", case.group()), case.name()), &case, |b, case| {
            b.iter(|| black_box(classify(black_box(case.body()))));
        });
    }

    group.finish();
}

fn benchmark_render_and_encode(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("render_encode");

    for case in test_cases() {
        group.throughput(Throughput::Bytes(case.body().len() as u64));
        group.bench_with_input(BenchmarkId::new(format!("{:?}", case.group()), case.name()), &case, |b, case| {
            b.iter(|| {
                let (text, mode) = render(case.body()).into_parts();
                black_box(encode(&text, mode));
            });
        });
    }

    group.finish();
}

fn benchmark_edit(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("editable_body");

    for case in test_cases() {
        group.bench_with_input(BenchmarkId::new(format!("{:?}", case.group()), case.name()), &case, |b, case| {
            b.iter_batched_ref(
                || EditableBody::with_bytes(case.body().to_vec()),
                |body| {
                    let display = body.display();
                    body.set_bytes(encode(display.text(), display.mode()));
                    black_box(body.version());
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(codec, benchmark_classify, benchmark_render_and_encode, benchmark_edit);
criterion_main!(codec);
