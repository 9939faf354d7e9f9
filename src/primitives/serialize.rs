//! `serde` support (feature `serde`)
//!
//! Both widths serialize as their decimal string, which survives JSON
//! number precision limits. Deserialization accepts the same form only.

use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::error::UintError;
use crate::primitives::{U128, U256};

struct DecimalVisitor<T>(PhantomData<T>);

impl<'de, T> de::Visitor<'de> for DecimalVisitor<T>
where
    T: FromStr<Err = UintError>,
{
    type Value = T;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("string-encoded unsigned integer")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        T::from_str(v).map_err(|e| E::custom(format!("invalid integer '{v}': {e}")))
    }
}

macro_rules! impl_decimal_serde {
    ($($name:ident),*) => {$(
        impl Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                serializer.serialize_str(&self.to_string())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                deserializer.deserialize_str(DecimalVisitor::<$name>(PhantomData))
            }
        }
    )*};
}

impl_decimal_serde!(U128, U256);
