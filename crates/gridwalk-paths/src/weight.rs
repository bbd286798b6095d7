//! Edge weights and possibly-infinite distances.

use std::cmp::Ordering;
use std::fmt;
use std::ops::Add;

/// A numeric edge weight.
///
/// Implemented for every primitive integer and float. Floats are compared
/// with `partial_cmp`; NaN weights compare equal to everything and are the
/// caller's problem.
pub trait Weight: Copy + PartialOrd + Add<Output = Self> + fmt::Debug {
    const ZERO: Self;
    const ONE: Self;

    /// `self + other`, or `None` when the sum leaves the type's range.
    /// Floats never overflow: they saturate to infinity.
    fn checked_add(self, other: Self) -> Option<Self>;

    #[inline]
    fn is_negative(self) -> bool {
        self < Self::ZERO
    }

    /// Total order used by the frontiers.
    #[inline]
    fn order(&self, other: &Self) -> Ordering {
        self.partial_cmp(other).unwrap_or(Ordering::Equal)
    }
}

macro_rules! impl_int_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                const ZERO: Self = 0;
                const ONE: Self = 1;

                #[inline]
                fn checked_add(self, other: Self) -> Option<Self> {
                    <$t>::checked_add(self, other)
                }
            }
        )*
    };
}

macro_rules! impl_float_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                const ZERO: Self = 0.0;
                const ONE: Self = 1.0;

                #[inline]
                fn checked_add(self, other: Self) -> Option<Self> {
                    Some(self + other)
                }
            }
        )*
    };
}

impl_int_weight!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_float_weight!(f32, f64);

/// A distance that may be infinite.
///
/// Used where an algorithm maps unreached nodes to a sentinel rather than
/// leaving them out. `Infinite` orders above every finite value.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Distance<W> {
    Finite(W),
    Infinite,
}

impl<W: Weight> Distance<W> {
    #[inline]
    pub fn is_finite(&self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    /// The finite value, if any.
    #[inline]
    pub fn finite(self) -> Option<W> {
        match self {
            Distance::Finite(w) => Some(w),
            Distance::Infinite => None,
        }
    }

    /// Sum of two distances; infinite if either side is. `None` when two
    /// finite values overflow the weight type.
    #[inline]
    pub fn checked_plus(self, other: Self) -> Option<Self> {
        match (self, other) {
            (Distance::Finite(a), Distance::Finite(b)) => a.checked_add(b).map(Distance::Finite),
            _ => Some(Distance::Infinite),
        }
    }
}

impl<W: Weight> From<Option<W>> for Distance<W> {
    fn from(w: Option<W>) -> Self {
        w.map_or(Distance::Infinite, Distance::Finite)
    }
}

impl<W: Weight> PartialOrd for Distance<W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Distance::Finite(a), Distance::Finite(b)) => a.partial_cmp(b),
            (Distance::Finite(_), Distance::Infinite) => Some(Ordering::Less),
            (Distance::Infinite, Distance::Finite(_)) => Some(Ordering::Greater),
            (Distance::Infinite, Distance::Infinite) => Some(Ordering::Equal),
        }
    }
}

impl<W: fmt::Display> fmt::Display for Distance<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(w) => write!(f, "{w}"),
            Distance::Infinite => f.write_str("inf"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_weights() {
        assert!((-3i32).is_negative());
        assert!(!0u32.is_negative());
        assert!(Weight::is_negative(-0.5f64));
        assert!(!Weight::is_negative(0.0f32));
    }

    #[test]
    fn checked_sums() {
        assert_eq!(Weight::checked_add(200u8, 55), Some(255));
        assert_eq!(Weight::checked_add(200u8, 100), None);
        assert_eq!(Weight::checked_add(-2_000_000_000i32, -1_000_000_000), None);
        assert_eq!(Weight::checked_add(f64::MAX, f64::MAX), Some(f64::INFINITY));
    }

    #[test]
    fn infinite_orders_last() {
        assert!(Distance::Finite(i64::MAX) < Distance::Infinite);
        assert!(Distance::Finite(-1) < Distance::Finite(0));
        assert_eq!(
            Distance::Finite(2).checked_plus(Distance::Finite(3)),
            Some(Distance::Finite(5))
        );
        assert_eq!(
            Distance::Finite(2).checked_plus(Distance::Infinite),
            Some(Distance::Infinite)
        );
        assert_eq!(Distance::Finite(i8::MIN).checked_plus(Distance::Finite(-1)), None);
    }

    #[test]
    fn display() {
        assert_eq!(Distance::Finite(7u32).to_string(), "7");
        assert_eq!(Distance::<u32>::Infinite.to_string(), "inf");
        assert_eq!(Distance::from(None::<u8>), Distance::Infinite);
    }
}
