use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use std::sync::Arc;

use envelope_pool::envelope::{Delivery, Publishing};
use envelope_pool::pool::EnvelopePool;
use envelope_pool::types::FieldTable;

/// Benchmark single-threaded acquire/release cycles against fresh allocation
fn bench_acquire_release(c: &mut Criterion) {
    let pool: EnvelopePool<Publishing> = EnvelopePool::new();

    let mut group = c.benchmark_group("acquire_release");
    group.throughput(Throughput::Elements(1));

    group.bench_function("pooled", |b| {
        b.iter(|| {
            let mut publishing = pool.acquire();
            publishing.body.extend_from_slice(b"payload");
            pool.release(black_box(publishing));
        })
    });

    group.bench_function("fresh_allocation", |b| {
        b.iter(|| {
            let mut publishing = Publishing::default();
            publishing.body.extend_from_slice(b"payload");
            black_box(publishing);
        })
    });

    group.finish();
}

/// Benchmark reset cost for a fully populated delivery
fn bench_reset_cost(c: &mut Criterion) {
    let pool: EnvelopePool<Delivery> = EnvelopePool::new();

    let mut group = c.benchmark_group("reset");
    group.throughput(Throughput::Elements(1));

    group.bench_function("populated_delivery", |b| {
        b.iter(|| {
            let mut delivery = pool.acquire();
            let mut headers = FieldTable::new();
            headers.insert("attempt", 1i32);
            delivery.properties.headers = Some(headers);
            delivery.properties.correlation_id.push_str("corr-1");
            delivery.delivery_tag = 42;
            delivery.body.extend_from_slice(&[0u8; 256]);
            pool.release(black_box(delivery));
        })
    });

    group.finish();
}

/// Benchmark concurrent acquire/release on one shared pool
fn bench_contended(c: &mut Criterion) {
    let pool: Arc<EnvelopePool<Publishing>> = Arc::new(EnvelopePool::new());

    let mut group = c.benchmark_group("contended");
    group.throughput(Throughput::Elements(1));

    group.bench_function("contended_4_threads", |b| {
        b.iter(|| {
            let handles: Vec<_> = (0..4)
                .map(|_| {
                    let pool = pool.clone();
                    std::thread::spawn(move || {
                        for _ in 0..1000 {
                            let mut publishing = pool.acquire();
                            publishing.body.extend_from_slice(b"payload");
                            pool.release(black_box(publishing));
                        }
                    })
                })
                .collect();

            for handle in handles {
                handle.join().unwrap();
            }
        })
    });

    group.finish();
}

criterion_group!(benches, bench_acquire_release, bench_reset_cost, bench_contended);
criterion_main!(benches);
