// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use num_traits::Zero;
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// A slot on the circular lot. Valid slots are numbered `1..=capacity`;
/// the bounds themselves live on [`CircularLot`].
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct LotPosition(usize);

impl std::fmt::Display for LotPosition {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "LotPosition({})", self.0)
    }
}

impl From<usize> for LotPosition {
    #[inline]
    fn from(v: usize) -> Self {
        LotPosition(v)
    }
}

impl LotPosition {
    #[inline]
    pub const fn new(v: usize) -> Self {
        LotPosition(v)
    }

    #[inline]
    pub const fn value(self) -> usize {
        self.0
    }
}

/// A non-negative clockwise step count between two slots.
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct LotDistance(usize);

impl std::fmt::Display for LotDistance {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "LotDistance({})", self.0)
    }
}

impl From<usize> for LotDistance {
    #[inline]
    fn from(v: usize) -> Self {
        LotDistance(v)
    }
}

impl LotDistance {
    #[inline]
    pub const fn new(v: usize) -> Self {
        LotDistance(v)
    }

    #[inline]
    pub const fn value(self) -> usize {
        self.0
    }

    #[inline]
    pub const fn zero() -> Self {
        LotDistance(0)
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(LotDistance)
    }

    #[inline]
    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        self.0.checked_sub(rhs.0).map(LotDistance)
    }

    #[inline]
    pub fn saturating_add(self, rhs: Self) -> Self {
        LotDistance(self.0.saturating_add(rhs.0))
    }

    #[inline]
    pub fn saturating_sub(self, rhs: Self) -> Self {
        LotDistance(self.0.saturating_sub(rhs.0))
    }
}

impl Zero for LotDistance {
    #[inline]
    fn zero() -> Self {
        LotDistance::new(0)
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl Add for LotDistance {
    type Output = LotDistance;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        LotDistance(
            self.0
                .checked_add(rhs.0)
                .expect("overflow in LotDistance + LotDistance"),
        )
    }
}

impl Sub for LotDistance {
    type Output = LotDistance;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        LotDistance(
            self.0
                .checked_sub(rhs.0)
                .expect("underflow in LotDistance - LotDistance"),
        )
    }
}

impl AddAssign for LotDistance {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.0 = self
            .0
            .checked_add(rhs.0)
            .expect("overflow in LotDistance += LotDistance");
    }
}

impl SubAssign for LotDistance {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.0 = self
            .0
            .checked_sub(rhs.0)
            .expect("underflow in LotDistance -= LotDistance");
    }
}

/// A fixed-capacity circular lot. Slot `capacity` is adjacent to slot `1`,
/// and "clockwise" means increasing slot numbers with a single wrap at the
/// capacity boundary.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct CircularLot {
    capacity: usize,
}

impl std::fmt::Display for CircularLot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CircularLot(capacity: {})", self.capacity)
    }
}

impl CircularLot {
    /// Creates a lot with the given capacity.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero; a lot without slots is a programmer
    /// error, not a runtime input.
    #[inline]
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "lot capacity must be positive");
        CircularLot { capacity }
    }

    #[inline]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether `position` denotes a real slot of this lot.
    #[inline]
    pub const fn contains(&self, position: LotPosition) -> bool {
        position.0 >= 1 && position.0 <= self.capacity
    }

    /// Clockwise number of steps to travel from `from` to `to`.
    ///
    /// Asymmetric: `clockwise_distance(a, b)` and `clockwise_distance(b, a)`
    /// differ in general. The distance from a slot to itself is zero, and
    /// every result lies in `0..capacity`.
    #[inline]
    pub fn clockwise_distance(&self, from: LotPosition, to: LotPosition) -> LotDistance {
        debug_assert!(self.contains(from), "from {from} outside {self}");
        debug_assert!(self.contains(to), "to {to} outside {self}");
        if to.0 >= from.0 {
            LotDistance(to.0 - from.0)
        } else {
            LotDistance((self.capacity - from.0) + to.0)
        }
    }

    /// Advances `position` clockwise by `steps`, wrapping at most once.
    ///
    /// Sound for any `steps < capacity`, which holds for every value
    /// produced by [`Self::clockwise_distance`]: the raw sum stays within
    /// `1..=2 * capacity`, so a single conditional subtraction suffices.
    #[inline]
    pub fn advance(&self, position: LotPosition, steps: LotDistance) -> LotPosition {
        debug_assert!(self.contains(position), "position {position} outside {self}");
        debug_assert!(steps.0 < self.capacity, "step count {steps} exceeds one lap");
        let sum = position.0 + steps.0;
        if sum > self.capacity {
            LotPosition(sum - self.capacity)
        } else {
            LotPosition(sum)
        }
    }
}
