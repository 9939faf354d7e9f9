//! Shared trait plumbing for the fixed-width integer types.
//!
//! The limb-level arithmetic of each width lives in its own module. What is
//! generated here is the surface that is identical for every width once the
//! inherent `wrapping_*`, `div_rem`, `shl_bits` and `shr_bits` methods exist:
//! operator traits (owned and borrowed forms), shifts by every supported
//! amount type, exponentiation, square root, in-place mutation, formatting
//! and parsing.

macro_rules! impl_uint_common {
    ($name:ident, $limbs:expr) => {
        const _: () = {
            use ::core::cmp::Ordering;
            use ::core::fmt;
            use ::core::iter::{Product, Sum};
            use ::core::ops::{
                Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign,
                Div, DivAssign, Mul, MulAssign, Neg, Not, Rem, RemAssign, Shl, ShlAssign, Shr,
                ShrAssign, Sub, SubAssign,
            };
            use ::core::str::FromStr;

            use forward_ref::{forward_ref_binop, forward_ref_op_assign, forward_ref_unop};

            use crate::error::UintError;
            use crate::primitives::text;

            impl Ord for $name {
                /// Compares limb by limb, starting from the most significant.
                fn cmp(&self, other: &Self) -> Ordering {
                    for (a, b) in self.0.iter().rev().zip(other.0.iter().rev()) {
                        match a.cmp(b) {
                            Ordering::Equal => continue,
                            ord => return ord,
                        }
                    }

                    Ordering::Equal
                }
            }

            impl PartialOrd for $name {
                fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                    Some(self.cmp(other))
                }
            }

            /// Addition modulo 2^BITS.
            impl Add for $name {
                type Output = Self;

                #[inline]
                fn add(self, rhs: Self) -> Self {
                    self.wrapping_add(rhs)
                }
            }
            forward_ref_binop!(impl Add, add for $name, $name);

            /// Subtraction modulo 2^BITS.
            impl Sub for $name {
                type Output = Self;

                #[inline]
                fn sub(self, rhs: Self) -> Self {
                    self.wrapping_sub(rhs)
                }
            }
            forward_ref_binop!(impl Sub, sub for $name, $name);

            /// Multiplication modulo 2^BITS.
            impl Mul for $name {
                type Output = Self;

                #[inline]
                fn mul(self, rhs: Self) -> Self {
                    self.wrapping_mul(rhs)
                }
            }
            forward_ref_binop!(impl Mul, mul for $name, $name);

            /// Integer division.
            ///
            /// # Panics
            ///
            /// Panics with `"division by zero"` when `rhs` is zero. Use
            /// `div_rem` or `try_div` for the fallible form.
            impl Div for $name {
                type Output = Self;

                fn div(self, rhs: Self) -> Self {
                    match self.div_rem(rhs) {
                        Ok((quotient, _)) => quotient,
                        Err(_) => panic!("division by zero"),
                    }
                }
            }
            forward_ref_binop!(impl Div, div for $name, $name);

            /// Remainder of integer division.
            ///
            /// # Panics
            ///
            /// Panics with `"division by zero"` when `rhs` is zero.
            impl Rem for $name {
                type Output = Self;

                fn rem(self, rhs: Self) -> Self {
                    match self.div_rem(rhs) {
                        Ok((_, remainder)) => remainder,
                        Err(_) => panic!("division by zero"),
                    }
                }
            }
            forward_ref_binop!(impl Rem, rem for $name, $name);

            impl BitAnd for $name {
                type Output = Self;

                fn bitand(self, rhs: Self) -> Self {
                    let mut out = self.0;
                    out.iter_mut().zip(rhs.0.iter()).for_each(|(o, r)| *o &= r);
                    $name(out)
                }
            }
            forward_ref_binop!(impl BitAnd, bitand for $name, $name);

            impl BitOr for $name {
                type Output = Self;

                fn bitor(self, rhs: Self) -> Self {
                    let mut out = self.0;
                    out.iter_mut().zip(rhs.0.iter()).for_each(|(o, r)| *o |= r);
                    $name(out)
                }
            }
            forward_ref_binop!(impl BitOr, bitor for $name, $name);

            impl BitXor for $name {
                type Output = Self;

                fn bitxor(self, rhs: Self) -> Self {
                    let mut out = self.0;
                    out.iter_mut().zip(rhs.0.iter()).for_each(|(o, r)| *o ^= r);
                    $name(out)
                }
            }
            forward_ref_binop!(impl BitXor, bitxor for $name, $name);

            impl Not for $name {
                type Output = Self;

                fn not(self) -> Self {
                    let mut out = self.0;
                    out.iter_mut().for_each(|o| *o = !*o);
                    $name(out)
                }
            }
            forward_ref_unop!(impl Not, not for $name);

            /// Two's complement negation modulo 2^BITS.
            impl Neg for $name {
                type Output = Self;

                fn neg(self) -> Self {
                    self.wrapping_neg()
                }
            }
            forward_ref_unop!(impl Neg, neg for $name);

            impl AddAssign for $name {
                #[inline]
                fn add_assign(&mut self, rhs: Self) {
                    *self = *self + rhs;
                }
            }
            forward_ref_op_assign!(impl AddAssign, add_assign for $name, $name);

            impl SubAssign for $name {
                #[inline]
                fn sub_assign(&mut self, rhs: Self) {
                    *self = *self - rhs;
                }
            }
            forward_ref_op_assign!(impl SubAssign, sub_assign for $name, $name);

            impl MulAssign for $name {
                #[inline]
                fn mul_assign(&mut self, rhs: Self) {
                    *self = *self * rhs;
                }
            }
            forward_ref_op_assign!(impl MulAssign, mul_assign for $name, $name);

            impl DivAssign for $name {
                #[inline]
                fn div_assign(&mut self, rhs: Self) {
                    *self = *self / rhs;
                }
            }
            forward_ref_op_assign!(impl DivAssign, div_assign for $name, $name);

            impl RemAssign for $name {
                #[inline]
                fn rem_assign(&mut self, rhs: Self) {
                    *self = *self % rhs;
                }
            }
            forward_ref_op_assign!(impl RemAssign, rem_assign for $name, $name);

            impl BitAndAssign for $name {
                #[inline]
                fn bitand_assign(&mut self, rhs: Self) {
                    *self = *self & rhs;
                }
            }
            forward_ref_op_assign!(impl BitAndAssign, bitand_assign for $name, $name);

            impl BitOrAssign for $name {
                #[inline]
                fn bitor_assign(&mut self, rhs: Self) {
                    *self = *self | rhs;
                }
            }
            forward_ref_op_assign!(impl BitOrAssign, bitor_assign for $name, $name);

            impl BitXorAssign for $name {
                #[inline]
                fn bitxor_assign(&mut self, rhs: Self) {
                    *self = *self ^ rhs;
                }
            }
            forward_ref_op_assign!(impl BitXorAssign, bitxor_assign for $name, $name);

            /// Logical shifts by an unsigned bit count. Counts of `BITS` or
            /// more yield zero.
            impl Shl<u32> for $name {
                type Output = Self;

                #[inline]
                fn shl(self, rhs: u32) -> Self {
                    self.shl_bits(rhs)
                }
            }

            impl Shr<u32> for $name {
                type Output = Self;

                #[inline]
                fn shr(self, rhs: u32) -> Self {
                    self.shr_bits(rhs)
                }
            }

            /// Negative shift counts yield zero.
            impl Shl<i32> for $name {
                type Output = Self;

                fn shl(self, rhs: i32) -> Self {
                    if rhs < 0 {
                        Self::ZERO
                    } else {
                        self.shl_bits(rhs as u32)
                    }
                }
            }

            /// Negative shift counts yield zero.
            impl Shr<i32> for $name {
                type Output = Self;

                fn shr(self, rhs: i32) -> Self {
                    if rhs < 0 {
                        Self::ZERO
                    } else {
                        self.shr_bits(rhs as u32)
                    }
                }
            }

            impl Shl<usize> for $name {
                type Output = Self;

                fn shl(self, rhs: usize) -> Self {
                    self.shl_bits(u32::try_from(rhs).unwrap_or(u32::MAX))
                }
            }

            impl Shr<usize> for $name {
                type Output = Self;

                fn shr(self, rhs: usize) -> Self {
                    self.shr_bits(u32::try_from(rhs).unwrap_or(u32::MAX))
                }
            }

            /// Shift by a value of the same width; anything at or above
            /// `BITS` yields zero.
            impl Shl<$name> for $name {
                type Output = Self;

                fn shl(self, rhs: $name) -> Self {
                    self.shl_bits(rhs.shift_amount())
                }
            }

            impl Shr<$name> for $name {
                type Output = Self;

                fn shr(self, rhs: $name) -> Self {
                    self.shr_bits(rhs.shift_amount())
                }
            }

            impl ShlAssign<u32> for $name {
                fn shl_assign(&mut self, rhs: u32) {
                    *self = self.shl_bits(rhs);
                }
            }

            impl ShrAssign<u32> for $name {
                fn shr_assign(&mut self, rhs: u32) {
                    *self = self.shr_bits(rhs);
                }
            }

            impl Sum for $name {
                fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
                    iter.fold(Self::ZERO, Add::add)
                }
            }

            impl<'a> Sum<&'a $name> for $name {
                fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
                    iter.fold(Self::ZERO, Add::add)
                }
            }

            impl Product for $name {
                fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
                    iter.fold(Self::ONE, Mul::mul)
                }
            }

            /// Decimal, without grouping or leading zeros.
            impl fmt::Display for $name {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.pad_integral(true, "", &text::to_decimal(&self.0))
                }
            }

            /// Lowercase hexadecimal with the minimum number of digits.
            /// `{:#x}` adds the `0x` prefix.
            impl fmt::LowerHex for $name {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.pad_integral(true, "0x", &text::to_hex(&self.0))
                }
            }

            impl fmt::UpperHex for $name {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.pad_integral(true, "0x", &text::to_hex(&self.0).to_uppercase())
                }
            }

            /// Parses a decimal string. Use `from_str_radix` for hex.
            impl FromStr for $name {
                type Err = UintError;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    Self::from_str_radix(s, 10)
                }
            }

            impl $name {
                /// Clamps a shift amount given as the same type to `u32`.
                fn shift_amount(self) -> u32 {
                    if self.0[1..].iter().any(|&l| l != 0) {
                        u32::MAX
                    } else {
                        u32::try_from(self.0[0]).unwrap_or(u32::MAX)
                    }
                }

                /// Parses `text` in radix 10 or 16.
                ///
                /// An empty string parses as zero. Hex digits are
                /// case-insensitive and no `0x` prefix is accepted. Values
                /// wider than the type wrap.
                ///
                /// # Errors
                ///
                /// - [`UintError::InvalidRadix`] for any other radix.
                /// - [`UintError::InvalidCharacter`] for a non-digit.
                pub fn from_str_radix(text: &str, radix: u32) -> crate::error::Result<Self> {
                    Ok($name(text::parse::<$limbs>(text, radix)?))
                }

                /// Formats the value in radix 10 or 16.
                ///
                /// # Errors
                ///
                /// Returns [`UintError::InvalidRadix`] for any other radix.
                pub fn to_str_radix(&self, radix: u32) -> crate::error::Result<String> {
                    text::format(&self.0, radix)
                }

                /// Lowercase hexadecimal, no prefix, minimum digits.
                pub fn to_hex(&self) -> String {
                    text::to_hex(&self.0)
                }

                /// Raises `self` to `exponent`, wrapping.
                ///
                /// A negative exponent yields zero and an exponent of zero
                /// yields one. Powers of two are computed with a shift, and
                /// bases whose trailing zeros push the whole result past the
                /// width short-circuit to zero.
                pub fn pow(self, exponent: i32) -> Self {
                    if exponent < 0 {
                        return Self::ZERO;
                    }
                    if exponent == 0 {
                        return Self::ONE;
                    }
                    if exponent == 1 || self.is_zero() || self == Self::ONE {
                        return self;
                    }

                    let exponent = exponent as u32;
                    let vanishing = self.trailing_zeros() as u64 * exponent as u64;

                    if self.count_ones() == 1 {
                        return if vanishing < Self::BITS as u64 {
                            Self::ONE.shl_bits(vanishing as u32)
                        } else {
                            Self::ZERO
                        };
                    }

                    if vanishing >= Self::BITS as u64 {
                        return Self::ZERO;
                    }

                    match exponent {
                        2 => return self.square(),
                        3 => return self.square().wrapping_mul(self),
                        4 => return self.square().square(),
                        _ => {}
                    }

                    let mut result = Self::ONE;
                    let mut base = self;
                    let mut e = exponent;

                    while e > 0 {
                        if e & 1 == 1 {
                            result = result.wrapping_mul(base);
                        }

                        e >>= 1;
                        if e > 0 {
                            base = base.square();
                        }
                    }

                    result
                }

                /// Floor of the square root.
                ///
                /// Restoring bit-by-bit algorithm: the first trial bit is the
                /// highest even bit position at or below the top set bit.
                pub fn sqrt(self) -> Self {
                    if self.0[1..].iter().all(|&l| l == 0) && self.0[0] < 2 {
                        return self;
                    }

                    let mut rem = self;
                    let mut res = Self::ZERO;
                    let mut pos = Self::ONE.shl_bits(Self::BITS - 1 - (self.leading_zeros() | 1));

                    while !pos.is_zero() {
                        let trial = res.wrapping_add(pos);

                        if rem >= trial {
                            rem = rem.wrapping_sub(trial);
                            res = pos.wrapping_add(trial);
                        }

                        res = res.shr_bits(1);
                        pos = pos.shr_bits(2);
                    }

                    res
                }

                /// `self * self`, wrapping.
                #[inline]
                pub fn square(self) -> Self {
                    self.wrapping_mul(self)
                }

                /// Squares the value in place.
                pub fn square_assign(&mut self) {
                    *self = self.square();
                }

                /// Adds one in place, wrapping `MAX` to zero.
                pub fn increment(&mut self) {
                    *self = self.wrapping_add(Self::ONE);
                }

                /// Subtracts one in place, wrapping zero to `MAX`.
                pub fn decrement(&mut self) {
                    *self = self.wrapping_sub(Self::ONE);
                }

                /// Overwrites the value in place.
                pub fn set(&mut self, value: Self) {
                    *self = value;
                }

                /// Overwrites the value with a `u64`.
                pub fn set_u64(&mut self, value: u64) {
                    *self = Self::from(value);
                }

                /// Overwrites the value with a sign-extended `i64`.
                pub fn set_i64(&mut self, value: i64) {
                    *self = Self::from(value);
                }

                /// Overwrites the value with a `u32`.
                pub fn set_u32(&mut self, value: u32) {
                    *self = Self::from(value);
                }

                /// Overwrites the value with a sign-extended `i32`.
                pub fn set_i32(&mut self, value: i32) {
                    *self = Self::from(value);
                }

                /// True when every limb is zero.
                #[inline]
                pub fn is_zero(&self) -> bool {
                    self.0.iter().all(|&l| l == 0)
                }

                /// Number of set bits.
                pub fn count_ones(&self) -> u32 {
                    self.0.iter().map(|l| l.count_ones()).sum()
                }

                /// Leading zero bits; `BITS` for zero.
                pub fn leading_zeros(&self) -> u32 {
                    crate::primitives::limb::leading_zeros(&self.0)
                }

                /// Trailing zero bits; `BITS` for zero.
                pub fn trailing_zeros(&self) -> u32 {
                    crate::primitives::limb::trailing_zeros(&self.0)
                }

                /// Minimum number of bits needed to represent the value.
                pub fn bits(&self) -> u32 {
                    crate::primitives::limb::bit_len(&self.0)
                }

                /// Quotient that reports a zero divisor instead of panicking.
                ///
                /// # Errors
                ///
                /// Returns [`UintError::DivideByZero`] when `rhs` is zero.
                pub fn try_div(self, rhs: Self) -> crate::error::Result<Self> {
                    self.div_rem(rhs).map(|(quotient, _)| quotient)
                }

                /// Remainder that reports a zero divisor instead of panicking.
                ///
                /// # Errors
                ///
                /// Returns [`UintError::DivideByZero`] when `rhs` is zero.
                pub fn try_rem(self, rhs: Self) -> crate::error::Result<Self> {
                    self.div_rem(rhs).map(|(_, remainder)| remainder)
                }

                /// Quotient by ten, using the single-limb division chain.
                pub fn div10(self) -> Self {
                    $name(crate::primitives::limb::div_rem_10(&self.0).0)
                }

                /// Remainder by ten.
                pub fn rem10(self) -> Self {
                    Self::from(crate::primitives::limb::div_rem_10(&self.0).1)
                }

                /// Rotates the bits left by `n` (taken modulo `BITS`).
                pub fn rotate_left(self, n: u32) -> Self {
                    let n = n % Self::BITS;
                    if n == 0 {
                        return self;
                    }

                    self.shl_bits(n) | self.shr_bits(Self::BITS - n)
                }

                /// Rotates the bits right by `n` (taken modulo `BITS`).
                pub fn rotate_right(self, n: u32) -> Self {
                    let n = n % Self::BITS;
                    if n == 0 {
                        return self;
                    }

                    self.shr_bits(n) | self.shl_bits(Self::BITS - n)
                }
            }
        };
    };
}

pub(crate) use impl_uint_common;
