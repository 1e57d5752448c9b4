/*!
    arithmetic on clock words

    hardware counters are unsigned words that wrap around (a 32bit microsecond counter overflows every ~71 minutes). All time comparisons in this crate go through [Ticks] so that they keep working across a wraparound, whatever the width of the counter.
*/

use core::fmt::{Debug, Display};


/**
    unsigned clock word

    implemented for `u8`, `u16`, `u32`, `u64`, `u128` and `usize`
*/
pub trait Ticks: Copy + Ord + Debug + Display {
    const ZERO: Self;

    fn wrapping_add(self, rhs: Self) -> Self;
    fn wrapping_sub(self, rhs: Self) -> Self;

    /**
        true when `self` is at or after `deadline`

        the distance is read as a signed word, so the answer is correct across a wraparound as long as both points are less than half the counter range apart
    */
    fn reached(self, deadline: Self) -> bool;

    /// ticks elapsed since `earlier`, correct across one wraparound
    fn elapsed_since(self, earlier: Self) -> Self {
        self.wrapping_sub(earlier)
    }
}

/// implement [Ticks] for an unsigned word, given the signed word of the same width
macro_rules! impl_ticks {
    ($t:ty, $signed:ty) => {

        impl Ticks for $t {
            const ZERO: Self = 0;

            fn wrapping_add(self, rhs: Self) -> Self {
                <$t>::wrapping_add(self, rhs)
            }
            fn wrapping_sub(self, rhs: Self) -> Self {
                <$t>::wrapping_sub(self, rhs)
            }
            fn reached(self, deadline: Self) -> bool {
                (<$t>::wrapping_sub(self, deadline) as $signed) >= 0
            }
        }
    };
}

impl_ticks!(u8, i8);
impl_ticks!(u16, i16);
impl_ticks!(u32, i32);
impl_ticks!(u64, i64);
impl_ticks!(u128, i128);
impl_ticks!(usize, isize);
