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

use std::fmt::Display;

/// A raw input position outside the lot range `[1, capacity]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PositionOutOfRangeError {
    position: usize,
    capacity: usize,
}

impl PositionOutOfRangeError {
    #[inline]
    pub fn new(position: usize, capacity: usize) -> Self {
        Self { position, capacity }
    }

    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Display for PositionOutOfRangeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Position {} is outside the lot range [1, {}]",
            self.position, self.capacity
        )
    }
}

impl std::error::Error for PositionOutOfRangeError {}

/// A raw input position occurring more than once within one sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DuplicatePositionError {
    position: usize,
}

impl DuplicatePositionError {
    #[inline]
    pub fn new(position: usize) -> Self {
        Self { position }
    }

    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }
}

impl Display for DuplicatePositionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Position {} appears more than once in the input sequence",
            self.position
        )
    }
}

impl std::error::Error for DuplicatePositionError {}

/// The single input-rejection error of the simulation. Raised eagerly,
/// before any simulation state is built; never retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvalidInputError {
    OutOfRange(PositionOutOfRangeError),
    Duplicate(DuplicatePositionError),
}

impl Display for InvalidInputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidInputError::OutOfRange(e) => write!(f, "{e}"),
            InvalidInputError::Duplicate(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for InvalidInputError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_error_accessors_and_display() {
        let e = PositionOutOfRangeError::new(21, 20);
        assert_eq!(e.position(), 21);
        assert_eq!(e.capacity(), 20);
        assert_eq!(
            format!("{}", e),
            "Position 21 is outside the lot range [1, 20]"
        );
    }

    #[test]
    fn test_duplicate_error_accessors_and_display() {
        let e = DuplicatePositionError::new(7);
        assert_eq!(e.position(), 7);
        assert_eq!(
            format!("{}", e),
            "Position 7 appears more than once in the input sequence"
        );
    }

    #[test]
    fn test_invalid_input_error_display_delegates() {
        let oor = InvalidInputError::OutOfRange(PositionOutOfRangeError::new(0, 20));
        assert_eq!(
            format!("{}", oor),
            "Position 0 is outside the lot range [1, 20]"
        );
        let dup = InvalidInputError::Duplicate(DuplicatePositionError::new(3));
        assert_eq!(
            format!("{}", dup),
            "Position 3 appears more than once in the input sequence"
        );
    }
}
