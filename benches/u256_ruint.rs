use criterion::{Criterion, criterion_group, criterion_main};
use ruint::aliases::U256;
use std::hint::black_box;

const A: U256 = U256::from_limbs([
    0x243F_6A88_85A3_08D3,
    0x1319_8A2E_0370_7344,
    0xA409_3822_299F_31D0,
    0x082E_FA98_EC4E_6C89,
]);
const B: U256 = U256::from_limbs([0x4528_21E6_38D0_1377, 0xBE54_66CF_34E9_0C6C, 0xC0AC_29B7_C97C_50DD, 0]);

pub fn bench_ruint(c: &mut Criterion) {
    c.bench_function("ruint::U256 mul", |b| {
        b.iter(|| black_box(A).wrapping_mul(black_box(B)))
    });
    c.bench_function("ruint::U256 div_rem", |b| {
        b.iter(|| black_box(A).div_rem(black_box(B)))
    });
    c.bench_function("ruint::U256 add", |b| {
        b.iter(|| black_box(A).wrapping_add(black_box(B)))
    });
}

criterion_group!(benches, bench_ruint);
criterion_main!(benches);
