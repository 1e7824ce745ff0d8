use std::fmt::{Debug, Display};

use num_traits::{Num, NumCast, ToPrimitive};

/// A trait for types that can be used as point coordinates.
///
/// This trait is sealed and cannot be implemented for external types. Every distance
/// computation goes through [`IndexableNum::as_f64`], so the set of coordinate types is kept to
/// the primitives for which that conversion is lossless or well understood.
pub trait IndexableNum:
    private::Sealed
    + Num
    + NumCast
    + ToPrimitive
    + PartialOrd
    + Copy
    + Debug
    + Display
    + Send
    + Sync
{
    /// Widen this coordinate to `f64` for distance arithmetic.
    ///
    /// Subtracting in `f64` means unsigned types never underflow and integer types never
    /// overflow when squared.
    #[inline]
    fn as_f64(self) -> f64 {
        // Every sealed implementor is representable as f64
        self.to_f64().unwrap_or(f64::NAN)
    }
}

impl IndexableNum for i8 {}
impl IndexableNum for u8 {}
impl IndexableNum for i16 {}
impl IndexableNum for u16 {}
impl IndexableNum for i32 {}
impl IndexableNum for u32 {}
impl IndexableNum for f32 {}
impl IndexableNum for f64 {}

// https://rust-lang.github.io/api-guidelines/future-proofing.html#sealed-traits-protect-against-downstream-implementations-c-sealed
mod private {
    pub trait Sealed {}

    impl Sealed for i8 {}
    impl Sealed for u8 {}
    impl Sealed for i16 {}
    impl Sealed for u16 {}
    impl Sealed for i32 {}
    impl Sealed for u32 {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}
