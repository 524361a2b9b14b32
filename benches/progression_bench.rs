use criterion::{black_box, criterion_group, criterion_main, Criterion};
use force_alignment::alignment::{compute_alignment, step, AlignmentRequest};

fn bench_step(c: &mut Criterion) {
    c.bench_function("step_full_axis", |b| {
        b.iter(|| {
            for value in -100i64..=100 {
                black_box(step(black_box(value), Some(3)).ok());
            }
        })
    });
}

fn bench_compute_alignment(c: &mut Criterion) {
    let request = AlignmentRequest::new("50", "3");
    c.bench_function("compute_alignment_text_input", |b| {
        b.iter(|| compute_alignment(black_box(&request)))
    });
}

criterion_group!(benches, bench_step, bench_compute_alignment);
criterion_main!(benches);
