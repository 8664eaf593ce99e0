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

use lot_alloc_core::ring::LotPosition;
use std::fmt::Display;

/// The verdict for one waiting vehicle: where it started and, if it was
/// assigned to a vacancy, where it parked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParkingOutcome {
    initial: LotPosition,
    parked_at: Option<LotPosition>,
}

impl ParkingOutcome {
    #[inline]
    pub fn new(initial: LotPosition, parked_at: Option<LotPosition>) -> Self {
        Self { initial, parked_at }
    }

    #[inline]
    pub fn initial(&self) -> LotPosition {
        self.initial
    }

    #[inline]
    pub fn parked_at(&self) -> Option<LotPosition> {
        self.parked_at
    }

    #[inline]
    pub fn is_parked(&self) -> bool {
        self.parked_at.is_some()
    }
}

impl Display for ParkingOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.parked_at {
            Some(slot) => write!(
                f,
                "Original position {} parked in {}",
                self.initial.value(),
                slot.value()
            ),
            None => write!(f, "Original position {} did not park", self.initial.value()),
        }
    }
}

/// Aggregate counts over one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SolutionStats {
    parked: usize,
    unparked: usize,
}

impl SolutionStats {
    #[inline]
    fn new(parked: usize, unparked: usize) -> Self {
        Self { parked, unparked }
    }

    #[inline]
    pub fn parked(&self) -> usize {
        self.parked
    }

    #[inline]
    pub fn unparked(&self) -> usize {
        self.unparked
    }
}

impl Display for SolutionStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Solution statistics:")?;
        writeln!(f, "  Parked: {}", self.parked)?;
        write!(f, "  Did not park: {}", self.unparked)
    }
}

/// All outcomes of one simulation run, in waiting input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    outcomes: Vec<ParkingOutcome>,
    stats: SolutionStats,
}

impl Solution {
    #[inline]
    pub fn new(outcomes: Vec<ParkingOutcome>) -> Self {
        let parked = outcomes.iter().filter(|o| o.is_parked()).count();
        let unparked = outcomes.len() - parked;
        let stats = SolutionStats::new(parked, unparked);
        Self { outcomes, stats }
    }

    #[inline]
    pub fn outcomes(&self) -> &[ParkingOutcome] {
        &self.outcomes
    }

    #[inline]
    pub fn stats(&self) -> &SolutionStats {
        &self.stats
    }

    /// Looks up the outcome for a vehicle by its original position.
    #[inline]
    pub fn outcome_for(&self, initial: LotPosition) -> Option<&ParkingOutcome> {
        self.outcomes.iter().find(|o| o.initial() == initial)
    }
}

impl Display for Solution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for outcome in &self.outcomes {
            writeln!(f, "{}", outcome)?;
        }
        Ok(())
    }
}
