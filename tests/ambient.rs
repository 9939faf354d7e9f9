use fixuint::UintError;
use fixuint::primitives::{Ambient, AmbientKind, U128, U256};

#[test]
fn ambient_from_value_static() {
    assert_eq!(U128::from_value(42u8).unwrap(), U128::from(42u8));
    assert_eq!(U128::from_value(-1i32).unwrap(), U128::MAX);
    assert_eq!(U256::from_value(true).unwrap(), U256::ONE);
    assert_eq!(U256::from_value(u128::MAX).unwrap(), U256::from(U128::MAX));
    assert_eq!(U128::from_value(7.9f64).unwrap(), U128::from(7u8));
    assert_eq!(U128::from_value("1000").unwrap(), U128::from(1000u16));
    assert_eq!(U256::from_value(String::from("5")).unwrap(), U256::from(5u8));
    assert_eq!(U128::from_value(U256::MAX).unwrap(), U128::MAX);
    assert_eq!(U256::from_value(U128::MAX).unwrap(), U256::new(u64::MAX, u64::MAX, 0, 0));
}

#[test]
fn ambient_from_value_bytes() {
    let mut bytes = [0u8; 16];
    bytes[0] = 9;

    assert_eq!(U128::from_value(bytes).unwrap(), U128::from(9u8));
    assert_eq!(U128::from_value(&bytes[..]).unwrap(), U128::from(9u8));
    assert_eq!(U128::from_value(bytes.to_vec()).unwrap(), U128::from(9u8));
    assert_eq!(
        U256::from_value(bytes),
        Err(UintError::InvalidLength {
            expected: 32,
            actual: 16
        })
    );
}

#[test]
fn ambient_cast_truncates() {
    let v = U128::from(0x1ffu32);

    assert_eq!(v.cast::<u8>(), 0xff);
    assert_eq!(v.cast::<u16>(), 0x1ff);
    assert!(v.cast::<bool>());
    assert_eq!(v.cast::<f64>(), 511.0);
    assert_eq!(v.cast::<String>(), "511");
    assert_eq!(v.cast::<U256>(), U256::from(0x1ffu32));
    assert_eq!(U256::MAX.cast::<U128>(), U128::MAX);
    assert_eq!(U256::MAX.cast::<u128>(), u128::MAX);
    assert_eq!(U256::MAX.cast::<i8>(), -1);

    let bytes = U128::ONE.cast::<Vec<u8>>();
    assert_eq!(bytes.len(), 16);
    assert_eq!(bytes[0], 1);
}

#[test]
fn ambient_kind_names() {
    let _ = env_logger::builder().is_test(true).try_init();

    assert_eq!("u64".parse::<AmbientKind>().unwrap(), AmbientKind::U64);
    assert_eq!("bytes".parse::<AmbientKind>().unwrap(), AmbientKind::BytesLe);
    assert_eq!("bytes_be".parse::<AmbientKind>().unwrap(), AmbientKind::BytesBe);
    assert_eq!("string".parse::<AmbientKind>().unwrap(), AmbientKind::Decimal);
    assert_eq!(AmbientKind::Hex.to_string(), "hex");

    for name in ["i128", "i256", "u512", "U64", ""] {
        assert_eq!(
            name.parse::<AmbientKind>(),
            Err(UintError::UnsupportedType(name.to_owned()))
        );
    }
}

#[test]
fn ambient_runtime_dispatch() {
    let _ = env_logger::builder().is_test(true).try_init();

    assert_eq!(U128::from_ambient(Ambient::I16(-1)).unwrap(), U128::MAX);
    assert_eq!(U256::from_ambient(Ambient::Hex("ff".into())).unwrap(), U256::from(255u8));
    assert_eq!(U256::from_ambient(Ambient::Decimal("255".into())).unwrap(), U256::from(255u8));

    let mut be = vec![0u8; 32];
    be[31] = 2;
    assert_eq!(U256::from_ambient(Ambient::BytesBe(be)).unwrap(), U256::from(2u8));
    assert!(U128::from_ambient(Ambient::BytesLe(vec![0; 3])).is_err());
    assert!(U128::from_ambient(Ambient::Hex("zz".into())).is_err());

    let v = U128::from(255u8);
    assert_eq!(v.to_ambient(AmbientKind::Hex), Ambient::Hex("ff".into()));
    assert_eq!(v.to_ambient(AmbientKind::I8), Ambient::I8(-1));
    assert_eq!(v.to_ambient(AmbientKind::U256), Ambient::U256(U256::from(255u8)));
    assert_eq!(v.to_ambient(AmbientKind::Decimal).kind(), AmbientKind::Decimal);
    assert_eq!(v.to_ambient_named("u16").unwrap(), Ambient::U16(255));
    assert_eq!(
        v.to_ambient_named("i128"),
        Err(UintError::UnsupportedType("i128".into()))
    );
}

#[test]
fn ambient_round_trips_through_every_kind() {
    let v = U128::from(200u8);
    let kinds = [
        AmbientKind::U8,
        AmbientKind::U16,
        AmbientKind::I32,
        AmbientKind::U64,
        AmbientKind::F64,
        AmbientKind::U128,
        AmbientKind::U256,
        AmbientKind::BytesLe,
        AmbientKind::BytesBe,
        AmbientKind::Decimal,
        AmbientKind::Hex,
    ];

    for kind in kinds {
        let ambient = v.to_ambient(kind);

        assert_eq!(ambient.kind(), kind);
        assert_eq!(U128::from_ambient(ambient).unwrap(), v, "{kind}");
    }
}

#[test]
fn ambient_from_impls() {
    assert_eq!(Ambient::from(3u32), Ambient::U32(3));
    assert_eq!(Ambient::from(String::from("9")), Ambient::Decimal("9".into()));
    assert_eq!(U256::from_value(Ambient::from(U128::ONE)).unwrap(), U256::ONE);
}
