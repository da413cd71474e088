use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use num_complex::Complex64;
use rand::{rngs::StdRng, Rng, SeedableRng};
use ztrmv_rs::{ztrmv, Diag, Transpose, Uplo};

fn random_complex(rng: &mut StdRng, len: usize) -> Vec<Complex64> {
    (0..len)
        .map(|_| Complex64::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0)))
        .collect()
}

fn bench_trmv(c: &mut Criterion) {
    let mut group = c.benchmark_group("ztrmv");
    for n in [64usize, 256, 1024] {
        // Roughly n²/2 multiply-adds per call.
        group.throughput(Throughput::Elements((n * n / 2) as u64));

        let mut rng = StdRng::seed_from_u64(7);
        let a = random_complex(&mut rng, n * n);
        let x_unit = random_complex(&mut rng, n);
        let x_strided = random_complex(&mut rng, (n - 1) * 2 + 1);

        group.bench_with_input(BenchmarkId::new("upper_notrans", n), &n, |b, &n| {
            b.iter(|| {
                let mut x = x_unit.clone();
                ztrmv(Uplo::Upper, Transpose::NoTrans, Diag::NonUnit, n, &a, n, &mut x, 1)
                    .unwrap();
                x
            })
        });

        group.bench_with_input(BenchmarkId::new("upper_conjtrans", n), &n, |b, &n| {
            b.iter(|| {
                let mut x = x_unit.clone();
                ztrmv(Uplo::Upper, Transpose::ConjTrans, Diag::NonUnit, n, &a, n, &mut x, 1)
                    .unwrap();
                x
            })
        });

        group.bench_with_input(BenchmarkId::new("lower_notrans_strided", n), &n, |b, &n| {
            b.iter(|| {
                let mut x = x_strided.clone();
                ztrmv(Uplo::Lower, Transpose::NoTrans, Diag::NonUnit, n, &a, n, &mut x, -2)
                    .unwrap();
                x
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_trmv);
criterion_main!(benches);
