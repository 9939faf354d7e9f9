use fixuint::UintError;
use fixuint::primitives::{Endian, U128};

use core::convert::TryFrom;

const SAMPLES: [u128; 8] = [
    0,
    1,
    u64::MAX as u128,
    1 << 64,
    0x0123_4567_89AB_CDEF_FEDC_BA98_7654_3210,
    (1 << 127) + 12345,
    u128::MAX - 1,
    u128::MAX,
];

fn u(v: u128) -> U128 {
    U128::from(v)
}

#[test]
fn u128_constants() {
    assert_eq!(U128::ZERO.as_u128(), 0);
    assert_eq!(U128::ONE.as_u128(), 1);
    assert_eq!(U128::MAX.as_u128(), u128::MAX);
    assert_eq!(U128::MIN, U128::ZERO);
    assert_eq!(U128::new(1, 2), u((2 << 64) | 1));
    assert_eq!(U128::from_bits(1, 2, 3, 4).as_limbs(), &[(2 << 32) | 1, (4 << 32) | 3]);
}

#[test]
fn u128_arith_matches_native() {
    for &a in SAMPLES.iter() {
        for &b in SAMPLES.iter() {
            assert_eq!(u(a) + u(b), u(a.wrapping_add(b)), "{a} + {b}");
            assert_eq!(u(a) - u(b), u(a.wrapping_sub(b)), "{a} - {b}");
            assert_eq!(u(a) * u(b), u(a.wrapping_mul(b)), "{a} * {b}");

            if b != 0 {
                assert_eq!(u(a) / u(b), u(a / b), "{a} / {b}");
                assert_eq!(u(a) % u(b), u(a % b), "{a} % {b}");
            }

            assert_eq!(u(a).cmp(&u(b)), a.cmp(&b));
        }
    }
}

#[test]
fn u128_div_known_vectors() {
    let (q, r) = (U128::ONE << 127u32).div_rem(U128::from(3u8)).unwrap();
    assert_eq!(q, U128::new(0xAAAA_AAAA_AAAA_AAAA, 0x2AAA_AAAA_AAAA_AAAA));
    assert_eq!(r, U128::from(2u8));

    let (q, r) = U128::new(0, 1).div_rem(U128::from(10u8)).unwrap();
    assert_eq!(q, U128::from(1844674407370955161u64));
    assert_eq!(r, U128::from(6u8));

    let (q, r) = U128::MAX.div_rem(U128::new(1, 1)).unwrap();
    assert_eq!(q.as_u128(), u128::MAX / ((1 << 64) + 1));
    assert_eq!(r.as_u128(), u128::MAX % ((1 << 64) + 1));
}

#[test]
fn u128_div_by_zero() {
    let _ = env_logger::builder().is_test(true).try_init();

    assert_eq!(U128::ONE.div_rem(U128::ZERO), Err(UintError::DivideByZero));
    assert_eq!(U128::ONE.try_div(U128::ZERO), Err(UintError::DivideByZero));
    assert_eq!(U128::ONE.try_rem(U128::ZERO), Err(UintError::DivideByZero));
}

#[test]
#[should_panic(expected = "division by zero")]
fn u128_div_by_zero_panics() {
    let _ = U128::MAX / U128::ZERO;
}

#[test]
fn u128_shifts() {
    let v = u(0x0123_4567_89AB_CDEF_FEDC_BA98_7654_3210);

    for shift in [0u32, 1, 4, 63, 64, 65, 100, 127] {
        assert_eq!(v << shift, u(0x0123_4567_89AB_CDEF_FEDC_BA98_7654_3210u128 << shift));
        assert_eq!(v >> shift, u(0x0123_4567_89AB_CDEF_FEDC_BA98_7654_3210u128 >> shift));
    }

    assert_eq!(v << 128u32, U128::ZERO);
    assert_eq!(v >> 128u32, U128::ZERO);
    assert_eq!(v << 128usize, U128::ZERO);
    assert_eq!(v >> U128::from(129u8), U128::ZERO);
    assert_eq!(v << -3i32, U128::ZERO);
    assert_eq!(v << 4i32, v << 4u32);
}

#[test]
fn u128_pow() {
    assert_eq!(U128::from(3u8).pow(80), u(3u128.pow(80)));
    assert_eq!(U128::from(7u8).pow(50), u(7u128.wrapping_pow(50)));
    assert_eq!(U128::from(2u8).pow(127), U128::ONE << 127u32);
    assert_eq!(U128::from(2u8).pow(128), U128::ZERO);
    assert_eq!(U128::from(6u8).pow(128), U128::ZERO);
    assert_eq!(U128::from(10u8).pow(2), U128::from(100u8));
    assert_eq!(U128::from(10u8).pow(0), U128::ONE);
    assert_eq!(U128::from(10u8).pow(-2), U128::ZERO);
}

#[test]
fn u128_sqrt() {
    for &a in SAMPLES.iter() {
        assert_eq!(u(a).sqrt(), u(a.isqrt()), "sqrt({a})");
    }

    assert_eq!(U128::from(99u8).sqrt(), U128::from(9u8));
}

#[test]
fn u128_muldiv() {
    assert_eq!(U128::muldiv(U128::MAX, U128::MAX, U128::MAX).unwrap(), U128::MAX);
    assert_eq!(
        U128::muldiv(U128::ONE << 100u32, U128::ONE << 100u32, U128::ONE << 90u32).unwrap(),
        U128::ONE << 110u32
    );
    assert_eq!(
        U128::muldiv(U128::MAX, U128::from(3u8), U128::from(2u8)).unwrap(),
        // floor(3 * (2^128 - 1) / 2) = 2^128 + 2^127 - 2, truncated
        u((1 << 127) - 2)
    );
    assert_eq!(
        U128::muldiv(U128::ONE, U128::ONE, U128::ZERO),
        Err(UintError::DivideByZero)
    );
}

#[test]
fn u128_widening_mul() {
    let wide = U128::MAX.widening_mul(U128::MAX);

    assert_eq!(wide.low_u128(), U128::ONE);
    assert_eq!((wide >> 128u32).low_u128(), U128::MAX - U128::ONE);
}

#[test]
fn u128_int_conversions() {
    assert_eq!(U128::from(-1i8), U128::MAX);
    assert_eq!(U128::from(-2i64), U128::MAX - U128::ONE);
    assert_eq!(U128::from(false), U128::ZERO);

    assert_eq!(U128::MAX.as_u8(), u8::MAX);
    assert_eq!(U128::MAX.as_i32(), -1);
    assert_eq!(U128::MAX.as_i64(), -1);
    assert_eq!(U128::from(u64::MAX).as_i64(), i64::MAX);
    assert!(U128::from(2u8).as_bool());
    assert!(!U128::ZERO.as_bool());

    assert_eq!(u16::try_from(U128::from(0xBEEFu16)).unwrap(), 0xBEEF);
    assert!(u16::try_from(U128::from(0x1_0000u32)).is_err());
    assert!(i8::try_from(U128::from(200u8)).is_err());
    assert!(u64::try_from(U128::new(0, 1)).is_err());
    assert_eq!(u128::from(U128::MAX), u128::MAX);

    assert_eq!(U128::from(-1i128), U128::MAX);
    assert_eq!(U128::from(i128::MIN), U128::ONE << 127u32);
    assert_eq!(i128::try_from(U128::from(i128::MAX)).unwrap(), i128::MAX);
    assert!(i128::try_from(U128::ONE << 127u32).is_err());
}

#[test]
fn u128_float_rounding() {
    assert_eq!(U128::from((1u64 << 53) + 1).as_f64(), 9007199254740992.0);
    assert_eq!(U128::from((1u64 << 54) - 1).as_f64(), 18014398509481984.0);
    assert_eq!(U128::MAX.as_f64(), 2f64.powi(128));
    assert_eq!(U128::MAX.as_f32(), f32::INFINITY);

    for &a in SAMPLES.iter() {
        assert_eq!(u(a).as_f64(), a as f64, "{a} as f64");
        assert_eq!(u(a).as_f32(), a as f32, "{a} as f32");
    }
}

#[test]
fn u128_from_float() {
    assert_eq!(U128::from_f64(12.99), U128::from(12u8));
    assert_eq!(U128::from_f64(1e20), u(100_000_000_000_000_000_000));
    assert_eq!(U128::from_f64(f64::NAN), U128::ZERO);
    assert_eq!(U128::from_f64(f64::INFINITY), U128::MAX);
    assert_eq!(U128::from_f64(f64::NEG_INFINITY), U128::ZERO);
    assert_eq!(U128::from_f64(3.5e38), U128::MAX);
    assert_eq!(U128::from_f64(-0.5), U128::ZERO);
    assert_eq!(U128::from_f64(-2.5), U128::MAX - U128::ONE);
    assert_eq!(U128::from_f32(255.9), U128::from(255u8));
}

#[test]
fn u128_bytes() {
    let _ = env_logger::builder().is_test(true).try_init();

    let v = u(0x0102_0304_0506_0708_090a_0b0c_0d0e_0f10);

    assert_eq!(hex::encode(v.to_be_bytes()), "0102030405060708090a0b0c0d0e0f10");
    assert_eq!(hex::encode(v.to_le_bytes()), "100f0e0d0c0b0a090807060504030201");
    assert_eq!(U128::from_be_bytes(v.to_be_bytes()), v);
    assert_eq!(U128::from_le_bytes(v.to_le_bytes()), v);
    assert_eq!(U128::from_slice(&v.to_bytes(Endian::Big), Endian::Big).unwrap(), v);
    assert_eq!(U128::try_from(&v.to_le_bytes()[..]).unwrap(), v);

    assert_eq!(
        U128::from_slice(&[0u8; 17], Endian::Little),
        Err(UintError::InvalidLength {
            expected: 16,
            actual: 17
        })
    );
    assert!(U128::from_slice(&[], Endian::Big).is_err());
}

#[test]
fn u128_in_place_mutation() {
    let mut v = U128::ZERO;
    v.decrement();
    assert_eq!(v, U128::MAX);

    v.increment();
    assert_eq!(v, U128::ZERO);

    v.set_i64(-1);
    assert_eq!(v, U128::MAX);

    v.set_u32(5);
    v += U128::ONE;
    v *= U128::from(7u8);
    v -= U128::from(2u8);
    v /= U128::from(4u8);
    v %= U128::from(6u8);
    assert_eq!(v, U128::from(4u8));

    v.set(U128::from(12u8));
    v.square_assign();
    assert_eq!(v, U128::from(144u8));

    assert_eq!(*U128::zero_ref(), U128::ZERO);
    assert_eq!(*U128::one_ref(), U128::ONE);
}

#[test]
fn u128_bit_queries() {
    assert_eq!(U128::ZERO.leading_zeros(), 128);
    assert_eq!(U128::ZERO.trailing_zeros(), 128);
    assert_eq!(U128::ONE.leading_zeros(), 127);
    assert_eq!(U128::new(0, 1).trailing_zeros(), 64);
    assert_eq!(U128::MAX.count_ones(), 128);
    assert_eq!(U128::new(0, 1).bits(), 65);
    assert!(U128::ZERO.is_zero());

    let v = u(0x8000_0000_0000_0000_0000_0000_0000_0001);
    assert_eq!(v.rotate_left(1), u(3));
    assert_eq!(v.rotate_right(4), u(0x1800_0000_0000_0000_0000_0000_0000_0000));
}

#[test]
fn u128_sum_and_product() {
    let values = [u(1), u(2), u(3), u(4)];

    assert_eq!(values.iter().sum::<U128>(), u(10));
    assert_eq!(values.into_iter().product::<U128>(), u(24));
    assert_eq!(std::iter::repeat_n(U128::MAX, 2).sum::<U128>(), U128::MAX - U128::ONE);
}
