use std::fmt::Debug;

use num_traits::{Bounded, Num, NumCast, ToPrimitive};

/// A trait for scalar types that can be used as projected coordinate
/// components.
///
/// This is the full set of operations the tree needs: arithmetic and zero
/// (via [`Num`]), ordering ([`PartialOrd`]), finite bounds ([`Bounded`]) and
/// the two infinities. Integer domains saturate their "infinities" to the
/// type's bounds.
///
/// `i64` is the only integer scalar offered. Squared distances at Earth
/// scale reach roughly `5e14` (the squared diameter in meters, times three
/// components), far beyond `i32::MAX` but comfortably inside `i64`.
///
/// This trait is sealed and cannot be implemented for external types, so the
/// tree can rely on the ordering contract (coordinates are never NaN).
pub trait IndexScalar:
    private::Sealed
    + Num
    + NumCast
    + ToPrimitive
    + Bounded
    + PartialOrd
    + Copy
    + Default
    + Debug
    + Send
    + Sync
{
    /// A value no coordinate component compares greater than.
    fn positive_infinity() -> Self {
        Self::max_value()
    }

    /// A value no coordinate component compares less than.
    fn negative_infinity() -> Self {
        Self::min_value()
    }
}

impl IndexScalar for f32 {
    fn positive_infinity() -> Self {
        Self::INFINITY
    }

    fn negative_infinity() -> Self {
        Self::NEG_INFINITY
    }
}

impl IndexScalar for f64 {
    fn positive_infinity() -> Self {
        Self::INFINITY
    }

    fn negative_infinity() -> Self {
        Self::NEG_INFINITY
    }
}

impl IndexScalar for i64 {}

// https://rust-lang.github.io/api-guidelines/future-proofing.html#sealed-traits-protect-against-downstream-implementations-c-sealed
mod private {
    pub trait Sealed {}

    impl Sealed for f32 {}
    impl Sealed for f64 {}
    impl Sealed for i64 {}
}
