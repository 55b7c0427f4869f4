/// Trait for converting numeric-like values into a non-negative `u64`.
///
/// Entry points such as `nth_code` and `fetch_bounded` accept any `ToU64`
/// so callers holding signed or floating point values (e.g. decoded from
/// JSON) get an [`Error::InvalidArgument`] instead of a silent wrap-around.
/// Returns `None` for negative, fractional or non-finite values. Whole values
/// above `u64::MAX` saturate, so they stay "too large" rather than becoming
/// malformed.
///
/// [`Error::InvalidArgument`]: crate::Error::InvalidArgument
pub trait ToU64 {
    fn to_u64(self) -> Option<u64>;
}

macro_rules! impl_to_u64_unsigned {
    ($($ty:ty),*) => {
        $(
            impl ToU64 for $ty {
                fn to_u64(self) -> Option<u64> {
                    Some(u64::try_from(self).unwrap_or(u64::MAX))
                }
            }
        )*
    };
}

macro_rules! impl_to_u64_signed {
    ($($ty:ty),*) => {
        $(
            impl ToU64 for $ty {
                fn to_u64(self) -> Option<u64> {
                    if self < 0 {
                        return None;
                    }
                    Some(u64::try_from(self).unwrap_or(u64::MAX))
                }
            }
        )*
    };
}

impl_to_u64_unsigned!(u8, u16, u32, u64, u128, usize);
impl_to_u64_signed!(i8, i16, i32, i64, i128, isize);

impl ToU64 for f64 {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn to_u64(self) -> Option<u64> {
        if !self.is_finite() || self < 0.0 || self.fract() != 0.0 {
            return None;
        }
        // Float to int casts saturate at `u64::MAX`.
        Some(self as u64)
    }
}

impl ToU64 for f32 {
    fn to_u64(self) -> Option<u64> {
        f64::from(self).to_u64()
    }
}
