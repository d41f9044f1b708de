//! Edge weight conversion.

use std::convert::TryFrom;

use crate::errors::EdgeDefect;

/// Integer types accepted as edge weights.
///
/// Signed types are checked at insertion time, so a negative weight is
/// reported as an error instead of wrapping into a huge unsigned value.
pub trait Weight: Copy {
    /// Convert into the non-negative weight stored in the graph.
    fn into_weight(self) -> Result<u64, EdgeDefect>;
}

macro_rules! impl_unsigned_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                fn into_weight(self) -> Result<u64, EdgeDefect> {
                    Ok(self as u64)
                }
            }
        )*
    };
}

macro_rules! impl_signed_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                fn into_weight(self) -> Result<u64, EdgeDefect> {
                    u64::try_from(self).map_err(|_| EdgeDefect::NegativeWeight(self as i128))
                }
            }
        )*
    };
}

impl_unsigned_weight!(u8, u16, u32, u64, usize);
impl_signed_weight!(i8, i16, i32, i64, isize);

#[test]
fn test_into_weight() {
    assert_eq!(7u32.into_weight(), Ok(7));
    assert_eq!(0i64.into_weight(), Ok(0));
    assert_eq!(40i32.into_weight(), Ok(40));
    assert_eq!((-1i32).into_weight(), Err(EdgeDefect::NegativeWeight(-1)));
    assert_eq!(i64::MIN.into_weight(), Err(EdgeDefect::NegativeWeight(i64::MIN as i128)));
    assert_eq!(u64::MAX.into_weight(), Ok(u64::MAX));
}
