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

use crate::err::{DuplicatePositionError, InvalidInputError, PositionOutOfRangeError};
use lot_alloc_core::ring::{CircularLot, LotPosition};
use std::collections::HashSet;

/// Checks one raw position sequence against the lot bounds and rejects
/// duplicates, returning the typed positions in input order.
///
/// Raw positions are unsigned, so the only out-of-range values are `0`
/// and anything above the capacity. The empty sequence is valid.
pub fn validate_positions(
    lot: &CircularLot,
    positions: &[usize],
) -> Result<Vec<LotPosition>, InvalidInputError> {
    let mut seen: HashSet<usize> = HashSet::with_capacity(positions.len());
    let mut validated = Vec::with_capacity(positions.len());
    for &raw in positions {
        if raw == 0 || raw > lot.capacity() {
            return Err(InvalidInputError::OutOfRange(PositionOutOfRangeError::new(
                raw,
                lot.capacity(),
            )));
        }
        if !seen.insert(raw) {
            return Err(InvalidInputError::Duplicate(DuplicatePositionError::new(
                raw,
            )));
        }
        validated.push(LotPosition::new(raw));
    }
    Ok(validated)
}

/// Pure predicate form of [`validate_positions`].
#[inline]
pub fn is_invalid(lot: &CircularLot, positions: &[usize]) -> bool {
    validate_positions(lot, positions).is_err()
}
