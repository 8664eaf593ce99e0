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

use crate::{err::InvalidInputError, validate::validate_positions};
use lot_alloc_core::ring::{CircularLot, LotPosition};
use std::fmt::Display;

/// A validated simulation instance: the lot, the waiting vehicle
/// positions in input order, and the vacated positions in event order.
///
/// Construction is all-or-nothing: both sequences are checked before any
/// state exists, so a `Problem` value always satisfies the input
/// invariants. The vacated order is a simulation input and is never
/// re-derived or sorted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    lot: CircularLot,
    waiting: Vec<LotPosition>,
    vacated: Vec<LotPosition>,
}

impl Problem {
    /// Builds a validated instance from raw position sequences.
    ///
    /// Fails with [`InvalidInputError`] if either sequence contains a
    /// value outside `[1, capacity]` or an internal duplicate. Duplicates
    /// across the two sequences are permitted.
    pub fn new(
        lot: CircularLot,
        waiting: &[usize],
        vacated: &[usize],
    ) -> Result<Self, InvalidInputError> {
        let waiting = validate_positions(&lot, waiting)?;
        let vacated = validate_positions(&lot, vacated)?;
        Ok(Self {
            lot,
            waiting,
            vacated,
        })
    }

    #[inline]
    pub fn lot(&self) -> &CircularLot {
        &self.lot
    }

    #[inline]
    pub fn waiting(&self) -> &[LotPosition] {
        &self.waiting
    }

    #[inline]
    pub fn vacated(&self) -> &[LotPosition] {
        &self.vacated
    }

    #[inline]
    pub fn waiting_count(&self) -> usize {
        self.waiting.len()
    }

    #[inline]
    pub fn vacancy_count(&self) -> usize {
        self.vacated.len()
    }
}

impl Display for Problem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Problem:")?;
        writeln!(f, "  Lot: {}", self.lot)?;
        writeln!(f, "  Waiting vehicles ({}):", self.waiting.len())?;
        for p in &self.waiting {
            writeln!(f, "    {}", p)?;
        }
        writeln!(f, "  Vacancies ({}):", self.vacated.len())?;
        for p in &self.vacated {
            writeln!(f, "    {}", p)?;
        }
        Ok(())
    }
}
