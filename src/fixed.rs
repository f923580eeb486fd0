//! Bit-width tagged fixed-point numbers.
//!
//! [`UFix<NI, NF>`] holds an unsigned value with `NI` integer bits and `NF`
//! fractional bits, [`SFix<NI, NF>`] a signed one with the same layout plus a
//! sign bit. The raw representation never leaves the declared width:
//! constructors, conversions and arithmetic saturate at the format limits
//! instead of wrapping.
//!
//! Stable Rust cannot compute result widths in the type system, so products
//! and conversions name their destination format explicitly (usually through
//! type inference on the binding) and are re-scaled into it from an exact
//! 64-bit intermediate.

use core::ops::{Add, Sub};

use num_traits::{Bounded, Zero};

/// Unsigned fixed-point number with `NI` integer and `NF` fractional bits.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UFix<const NI: u32, const NF: u32> {
    raw: u32,
}

/// Signed fixed-point number with `NI` integer and `NF` fractional bits.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SFix<const NI: u32, const NF: u32> {
    raw: i32,
}

impl<const NI: u32, const NF: u32> UFix<NI, NF> {
    pub const BITS: u32 = {
        assert!(NI + NF <= 32, "UFix is limited to 32 bits");
        NI + NF
    };

    pub const MAX_RAW: u32 = ((1u64 << Self::BITS) - 1) as u32;

    pub const FRAC_MASK: u32 = ((1u64 << NF) - 1) as u32;

    /// Builds a value from its raw representation, saturating to the width.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Self {
            raw: if raw > Self::MAX_RAW {
                Self::MAX_RAW
            } else {
                raw
            },
        }
    }

    #[inline]
    pub const fn from_int(value: u32) -> Self {
        Self::from_raw_wide((value as u64) << NF)
    }

    #[inline]
    const fn from_raw_wide(raw: u64) -> Self {
        Self {
            raw: if raw > Self::MAX_RAW as u64 {
                Self::MAX_RAW
            } else {
                raw as u32
            },
        }
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.raw
    }

    /// Integer part, truncated.
    #[inline]
    pub const fn int_part(self) -> u32 {
        ((self.raw as u64) >> NF) as u32
    }

    /// Fractional bits only, still scaled by `2^NF`.
    #[inline]
    pub const fn frac_raw(self) -> u32 {
        self.raw & Self::FRAC_MASK
    }

    /// Re-scales into another format. Fractional bits that do not fit are
    /// truncated, an integer part that does not fit saturates.
    #[inline]
    pub fn convert<const NI2: u32, const NF2: u32>(self) -> UFix<NI2, NF2> {
        UFix::from_raw_wide(rescale(self.raw as u64, NF, NF2))
    }

    /// Exact product, re-scaled into the destination format.
    #[inline]
    pub fn mul<const NI2: u32, const NF2: u32, const NIO: u32, const NFO: u32>(
        self,
        rhs: UFix<NI2, NF2>,
    ) -> UFix<NIO, NFO> {
        let product = self.raw as u64 * rhs.raw as u64;
        UFix::from_raw_wide(rescale(product, NF + NF2, NFO))
    }

    /// Exact product, re-scaled into the destination format. Integer bits
    /// that do not fit are dropped, so the result wraps at the destination
    /// width.
    #[inline]
    pub fn wrapping_mul<const NI2: u32, const NF2: u32, const NIO: u32, const NFO: u32>(
        self,
        rhs: UFix<NI2, NF2>,
    ) -> UFix<NIO, NFO> {
        let product = self.raw as u64 * rhs.raw as u64;
        let from = NF + NF2;
        let scaled = if NFO >= from {
            product.checked_shl(NFO - from).unwrap_or(0)
        } else {
            product.checked_shr(from - NFO).unwrap_or(0)
        };

        UFix {
            raw: (scaled & UFix::<NIO, NFO>::MAX_RAW as u64) as u32,
        }
    }

    /// Divides by `2^shift`, keeping every bit that moves out of the integer
    /// part as long as the destination has room for it.
    #[inline]
    pub fn shr<const NIO: u32, const NFO: u32>(self, shift: u32) -> UFix<NIO, NFO> {
        UFix::from_raw_wide(rescale(self.raw as u64, NF + shift, NFO))
    }

    pub fn to_f32(self) -> f32 {
        self.raw as f32 / (1u64 << NF) as f32
    }
}

impl<const NI: u32, const NF: u32> Add for UFix<NI, NF> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::from_raw_wide(self.raw as u64 + rhs.raw as u64)
    }
}

impl<const NI: u32, const NF: u32> Sub for UFix<NI, NF> {
    type Output = Self;

    /// Saturates at zero.
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self {
            raw: self.raw.saturating_sub(rhs.raw),
        }
    }
}

impl<const NI: u32, const NF: u32> Zero for UFix<NI, NF> {
    fn zero() -> Self {
        Self { raw: 0 }
    }

    fn is_zero(&self) -> bool {
        self.raw == 0
    }
}

impl<const NI: u32, const NF: u32> Bounded for UFix<NI, NF> {
    fn min_value() -> Self {
        Self { raw: 0 }
    }

    fn max_value() -> Self {
        Self {
            raw: Self::MAX_RAW,
        }
    }
}

impl<const NI: u32, const NF: u32> SFix<NI, NF> {
    pub const BITS: u32 = {
        assert!(NI + NF <= 31, "SFix is limited to 31 bits plus sign");
        NI + NF
    };

    pub const MAX_RAW: i32 = ((1i64 << Self::BITS) - 1) as i32;

    pub const MIN_RAW: i32 = -(1i64 << Self::BITS) as i32;

    /// Builds a value from its raw representation, saturating to the width.
    #[inline]
    pub const fn from_raw(raw: i32) -> Self {
        Self::from_raw_wide(raw as i64)
    }

    #[inline]
    const fn from_raw_wide(raw: i64) -> Self {
        Self {
            raw: if raw > Self::MAX_RAW as i64 {
                Self::MAX_RAW
            } else if raw < Self::MIN_RAW as i64 {
                Self::MIN_RAW
            } else {
                raw as i32
            },
        }
    }

    #[inline]
    pub const fn raw(self) -> i32 {
        self.raw
    }

    /// Re-scales into another format. Dropped fractional bits round towards
    /// negative infinity, an integer part that does not fit saturates.
    #[inline]
    pub fn convert<const NI2: u32, const NF2: u32>(self) -> SFix<NI2, NF2> {
        SFix::from_raw_wide(rescale_signed(self.raw as i64, NF, NF2))
    }

    /// Exact product with an unsigned value, re-scaled into the destination
    /// format.
    #[inline]
    pub fn mul_unsigned<const NI2: u32, const NF2: u32, const NIO: u32, const NFO: u32>(
        self,
        rhs: UFix<NI2, NF2>,
    ) -> SFix<NIO, NFO> {
        let product = self.raw as i64 * rhs.raw() as i64;
        SFix::from_raw_wide(rescale_signed(product, NF + NF2, NFO))
    }

    pub fn to_f32(self) -> f32 {
        self.raw as f32 / (1u64 << NF) as f32
    }
}

impl<const NI: u32, const NF: u32> Add for SFix<NI, NF> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::from_raw_wide(self.raw as i64 + rhs.raw as i64)
    }
}

impl<const NI: u32, const NF: u32> Sub for SFix<NI, NF> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::from_raw_wide(self.raw as i64 - rhs.raw as i64)
    }
}

impl<const NI: u32, const NF: u32> Zero for SFix<NI, NF> {
    fn zero() -> Self {
        Self { raw: 0 }
    }

    fn is_zero(&self) -> bool {
        self.raw == 0
    }
}

impl<const NI: u32, const NF: u32> Bounded for SFix<NI, NF> {
    fn min_value() -> Self {
        Self {
            raw: Self::MIN_RAW,
        }
    }

    fn max_value() -> Self {
        Self {
            raw: Self::MAX_RAW,
        }
    }
}

#[inline]
fn rescale(raw: u64, from: u32, to: u32) -> u64 {
    if to >= from {
        let shift = to - from;
        if raw == 0 {
            0
        } else if shift >= 64 || raw.leading_zeros() < shift {
            u64::MAX
        } else {
            raw << shift
        }
    } else {
        let shift = from - to;
        if shift >= 64 {
            0
        } else {
            raw >> shift
        }
    }
}

#[inline]
fn rescale_signed(raw: i64, from: u32, to: u32) -> i64 {
    if to >= from {
        let shift = to - from;
        let saturated = if raw < 0 { i64::MIN } else { i64::MAX };
        if raw == 0 {
            0
        } else if shift >= 63 {
            saturated
        } else {
            let shifted = raw << shift;
            if shifted >> shift == raw {
                shifted
            } else {
                saturated
            }
        }
    } else {
        let shift = from - to;
        if shift >= 64 {
            if raw < 0 {
                -1
            } else {
                0
            }
        } else {
            raw >> shift
        }
    }
}
