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

//! # Lot Allocation Model (`lot-alloc-model`)
//!
//! Data model for the circular parking lot reassignment simulation. It
//! builds on the typed primitives of `lot-alloc-core` to represent
//! validated problem instances and their outcomes.
//!
//! ## Key data structures
//!
//! - **`Problem`**: a validated instance, carrying the lot, the waiting
//!   vehicle positions, and the vacated positions in event order.
//! - **`ParkingOutcome`**: the per-vehicle verdict, pairing the original
//!   waiting position with the slot it eventually parked in, if any.
//! - **`Solution`**: all outcomes of one run, in waiting input order,
//!   together with aggregate counts.
//! - **`InvalidInputError`**: the single input-rejection error, raised
//!   before any simulation state exists.
//!
//! The `generator` module produces random, always-valid instances from a
//! seed for tests that want coverage beyond hand-written fixtures.

pub mod err;
pub mod generator;
pub mod problem;
pub mod sol;
pub mod validate;

pub mod prelude {
    pub use crate::{
        err::{DuplicatePositionError, InvalidInputError, PositionOutOfRangeError},
        generator::{InstanceGenConfig, InstanceGenerator},
        problem::Problem,
        sol::{ParkingOutcome, Solution, SolutionStats},
        validate::{is_invalid, validate_positions},
    };
}
