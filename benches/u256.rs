use fixuint::primitives::{U128, U256};

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

const A: U256 = U256::new(
    0x243F_6A88_85A3_08D3,
    0x1319_8A2E_0370_7344,
    0xA409_3822_299F_31D0,
    0x082E_FA98_EC4E_6C89,
);
const B: U256 = U256::new(0x4528_21E6_38D0_1377, 0xBE54_66CF_34E9_0C6C, 0xC0AC_29B7_C97C_50DD, 0);

pub fn bench_u256(c: &mut Criterion) {
    c.bench_function("U256 mul", |b| b.iter(|| black_box(A) * black_box(B)));
    c.bench_function("U256 add", |b| b.iter(|| black_box(A) + black_box(B)));
    c.bench_function("U256 div_rem", |b| {
        b.iter(|| black_box(A).div_rem(black_box(B)))
    });
    c.bench_function("U256 to_string", |b| b.iter(|| black_box(A).to_string()));
    c.bench_function("U256 sqrt", |b| b.iter(|| black_box(A).sqrt()));
}

pub fn bench_u128(c: &mut Criterion) {
    let (x, y) = (A.low_u128(), B.low_u128() >> 40u32);

    c.bench_function("U128 div_rem", |b| {
        b.iter(|| black_box(x).div_rem(black_box(y)))
    });
    c.bench_function("U128 muldiv", |b| {
        b.iter(|| U128::muldiv(black_box(x), black_box(x), black_box(y)))
    });
}

criterion_group!(benches, bench_u256, bench_u128);
criterion_main!(benches);
