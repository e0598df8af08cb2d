use std::fmt::Debug;
use std::ops::Add;

use num_traits::Zero;
use ordered_float::OrderedFloat;

/// Numeric edge cost usable by every solver in this crate.
///
/// `infinity()` is the "unreachable" sentinel stored in distance vectors
/// and matrix cells. It must be large enough that `infinity() + cost` of
/// any real edge (and `infinity() + infinity()` for the all-pairs matrix)
/// does not overflow, and it must never collide with an achievable
/// distance. Integer impls use the classic `0x3f3f3f3f` pattern, which
/// satisfies both; float impls use IEEE infinity.
///
/// Solvers default to this sentinel but accept a per-instance override via
/// their `with_infinity` constructors, so tests can pick sentinels suited
/// to the numeric range under test.
pub trait Weight: Copy + Ord + Add<Output = Self> + Zero + Debug {
    /// The "unreachable" sentinel for this weight type.
    fn infinity() -> Self;
}

macro_rules! impl_weight_for_int {
    ($($t:ty => $inf:expr),* $(,)?) => {
        $(
            impl Weight for $t {
                fn infinity() -> Self {
                    $inf
                }
            }
        )*
    };
}

impl_weight_for_int! {
    i32 => 0x3f3f3f3f,
    i64 => 0x3f3f3f3f_3f3f3f3f,
    u32 => 0x3f3f3f3f,
    u64 => 0x3f3f3f3f_3f3f3f3f,
}

impl Weight for OrderedFloat<f32> {
    fn infinity() -> Self {
        OrderedFloat(f32::INFINITY)
    }
}

impl Weight for OrderedFloat<f64> {
    fn infinity() -> Self {
        OrderedFloat(f64::INFINITY)
    }
}
