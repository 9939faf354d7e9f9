use fixuint::UintError;
use fixuint::primitives::{U128, U256};

#[test]
fn text_hex_round_trip() {
    let v = U128::from_str_radix("ff", 16).unwrap();

    assert_eq!(v, U128::from(255u8));
    assert_eq!(v.to_str_radix(16).unwrap(), "ff");
    assert_eq!(U128::from_str_radix("FF", 16).unwrap(), v);
    assert_eq!(U128::from_str_radix("00ff", 16).unwrap(), v);
}

#[test]
fn text_decimal_round_trip() {
    let digits = "340282366920938463463374607431768211455";
    let v: U128 = digits.parse().unwrap();

    assert_eq!(v, U128::MAX);
    assert_eq!(v.to_string(), digits);
    assert_eq!(v.to_str_radix(10).unwrap(), digits);
    assert_eq!(U128::ZERO.to_string(), "0");
    assert_eq!(U128::ZERO.to_hex(), "0");
}

#[test]
fn text_empty_is_zero() {
    assert_eq!(U128::from_str_radix("", 10).unwrap(), U128::ZERO);
    assert_eq!(U256::from_str_radix("", 16).unwrap(), U256::ZERO);
}

#[test]
fn text_overflow_wraps() {
    assert_eq!(
        U128::from_str_radix("340282366920938463463374607431768211456", 10).unwrap(),
        U128::ZERO
    );
    assert_eq!(
        U128::from_str_radix("340282366920938463463374607431768211457", 10).unwrap(),
        U128::ONE
    );
    assert_eq!(
        U128::from_str_radix(&format!("1{}", "0".repeat(32)), 16).unwrap(),
        U128::ZERO
    );
}

#[test]
fn text_invalid_character() {
    let _ = env_logger::builder().is_test(true).try_init();

    assert_eq!(
        U128::from_str_radix("12a", 10),
        Err(UintError::InvalidCharacter {
            character: 'a',
            index: 2
        })
    );
    assert_eq!(
        U256::from_str_radix("0xff", 16),
        Err(UintError::InvalidCharacter {
            character: 'x',
            index: 1
        })
    );
    assert!(U128::from_str_radix("-1", 10).is_err());
    assert!(" 1".parse::<U256>().is_err());
}

#[test]
fn text_invalid_radix() {
    let _ = env_logger::builder().is_test(true).try_init();

    assert_eq!(U128::from_str_radix("10", 8), Err(UintError::InvalidRadix(8)));
    assert_eq!(U256::ONE.to_str_radix(2), Err(UintError::InvalidRadix(2)));
}

#[test]
fn text_formatter_flags() {
    let v = U128::from(255u8);

    assert_eq!(format!("{v}"), "255");
    assert_eq!(format!("{v:>6}"), "   255");
    assert_eq!(format!("{v:x}"), "ff");
    assert_eq!(format!("{v:#x}"), "0xff");
    assert_eq!(format!("{v:X}"), "FF");
    assert_eq!(format!("{v:08x}"), "000000ff");
    assert_eq!(format!("{:x}", U256::new(1, 0, 0, 0xab)), format!("ab{}1", "0".repeat(47)));
}

#[test]
fn text_hex_pads_inner_limbs() {
    let v = U256::new(1, 2, 0, 0);

    assert_eq!(v.to_hex(), "20000000000000001");
    assert_eq!(U256::from_str_radix(&v.to_hex(), 16).unwrap(), v);
}
