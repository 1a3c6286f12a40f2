extern crate rand;
extern crate rand_chacha;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use decimal_karatsuba::karatsuba::karatsuba_mul_digits;
use decimal_karatsuba::schoolbook_mul::schoolbook_mul;
use decimal_karatsuba::{multiply, BigInt, DigitSeq, NoopObserver};
use rand::{Rng, SeedableRng};

fn random_seq(rng: &mut rand_chacha::ChaCha8Rng, size: usize) -> DigitSeq {
    DigitSeq::from_slice(&random_digits(rng, size)).unwrap()
}
fn random_digits(rng: &mut rand_chacha::ChaCha8Rng, size: usize) -> Vec<u8> {
    let mut digits = vec![0; size];
    for x in digits.iter_mut() {
        *x = rng.gen_range(0..10);
    }
    // Keep the width honest: no leading zero.
    digits[0] = rng.gen_range(1..10);
    digits
}

fn bench_schoolbook_mul(c: &mut Criterion) {
    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(0);
    let a = BigInt::from_digit_seq(&random_digits(&mut rng, 1000));
    let b = BigInt::from_digit_seq(&random_digits(&mut rng, 1000));
    c.bench_function("schoolbook_mul_1k", |bench| {
        bench.iter(|| schoolbook_mul(&a, &b))
    });
}
fn bench_karatsuba_mul_64(c: &mut Criterion) {
    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(0);
    let a = random_seq(&mut rng, 64);
    let b = random_seq(&mut rng, 64);
    c.bench_function("karatsuba_mul_64", |bench| {
        bench.iter(|| karatsuba_mul_digits(black_box(&a), black_box(&b), &NoopObserver));
    });
}
fn bench_karatsuba_mul(c: &mut Criterion) {
    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(0);
    let a = random_seq(&mut rng, 1000);
    let b = random_seq(&mut rng, 1000);
    c.bench_function("karatsuba_mul_1k", |bench| {
        bench.iter(|| karatsuba_mul_digits(&a, &b, &NoopObserver));
    });
}
fn bench_karatsuba_mul_10k(c: &mut Criterion) {
    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(0);
    let a = random_seq(&mut rng, 10000);
    let b = random_seq(&mut rng, 10000);
    c.bench_function("karatsuba_mul_10k", |bench| {
        bench.iter(|| karatsuba_mul_digits(&a, &b, &NoopObserver));
    });
}
fn bench_multiply_traced(c: &mut Criterion) {
    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(0);
    let a = BigInt::from_digit_seq(&random_digits(&mut rng, 1000));
    let b = BigInt::from_digit_seq(&random_digits(&mut rng, 1000));
    c.bench_function("multiply_traced_1k", |bench| {
        bench.iter(|| multiply(&a, &b));
    });
}

fn configured() -> Criterion {
    Criterion::default().sample_size(10)
}
criterion_group!(
    name = benches;
    config = configured();
    targets =
        bench_schoolbook_mul,
        bench_karatsuba_mul_64,
        bench_karatsuba_mul,
        bench_karatsuba_mul_10k,
        bench_multiply_traced,
);
criterion_main!(benches);
