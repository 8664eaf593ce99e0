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

//! # Lot Allocation Simulation (`lot-alloc-sim`)
//!
//! The reassignment engine. For each vacated slot, in event order, the
//! engine picks the waiting vehicle with the smallest clockwise distance
//! to the vacancy, records where it parked, and pulls every remaining
//! vehicle forward by that same distance to close the gap.

use lot_alloc_core::ring::{CircularLot, LotDistance, LotPosition};
use lot_alloc_model::{
    err::InvalidInputError,
    problem::Problem,
    sol::{ParkingOutcome, Solution},
};
use tracing::debug;

/// A vehicle still waiting for a slot. `original` identifies it for
/// reporting, `current` tracks where it sits after gap-closing shifts,
/// and `index` is its offset in the waiting input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct WaitingVehicle {
    original: LotPosition,
    current: LotPosition,
    index: usize,
}

/// Runs one single-pass reassignment simulation over a validated
/// [`Problem`]. Owns no state between runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AssignmentEngine;

impl AssignmentEngine {
    #[inline]
    pub fn new() -> Self {
        Self
    }

    /// Processes every vacancy strictly in input order and returns one
    /// outcome per waiting vehicle, in waiting input order.
    ///
    /// Total over validated input: a `Problem` admits no failure path.
    pub fn run(&self, problem: &Problem) -> Solution {
        let lot = problem.lot();
        let mut active: Vec<WaitingVehicle> = problem
            .waiting()
            .iter()
            .enumerate()
            .map(|(index, &position)| WaitingVehicle {
                original: position,
                current: position,
                index,
            })
            .collect();
        let mut parked_at: Vec<Option<LotPosition>> = vec![None; active.len()];

        for &vacancy in problem.vacated() {
            if active.is_empty() {
                debug!(vacancy = %vacancy, "no waiting vehicles remain, vacancy ignored");
                continue;
            }

            let (chosen, shift) = Self::nearest_vehicle(lot, &active, vacancy);
            let vehicle = active.remove(chosen);
            parked_at[vehicle.index] = Some(vacancy);
            debug!(
                vacancy = %vacancy,
                original = %vehicle.original,
                from = %vehicle.current,
                shift = %shift,
                "assigned vehicle to vacancy"
            );

            // Remaining vehicles pull forward by the distance the chosen
            // vehicle just travelled.
            for remaining in active.iter_mut() {
                remaining.current = lot.advance(remaining.current, shift);
            }
        }

        let outcomes = problem
            .waiting()
            .iter()
            .zip(parked_at)
            .map(|(&initial, parked)| ParkingOutcome::new(initial, parked))
            .collect();
        Solution::new(outcomes)
    }

    /// Index of the active vehicle with the smallest clockwise distance to
    /// `vacancy`, plus that distance. Strict `<` keeps the earliest
    /// vehicle in iteration order on equal distances.
    fn nearest_vehicle(
        lot: &CircularLot,
        active: &[WaitingVehicle],
        vacancy: LotPosition,
    ) -> (usize, LotDistance) {
        let mut best = 0;
        let mut best_distance = lot.clockwise_distance(active[0].current, vacancy);
        for (idx, vehicle) in active.iter().enumerate().skip(1) {
            let distance = lot.clockwise_distance(vehicle.current, vacancy);
            if distance < best_distance {
                best = idx;
                best_distance = distance;
            }
        }
        (best, best_distance)
    }
}

/// Validates both raw sequences and runs the engine on the resulting
/// instance. Fails with [`InvalidInputError`] before any simulation state
/// is built; no partial results exist.
pub fn run_simulation(
    lot: CircularLot,
    waiting: &[usize],
    vacated: &[usize],
) -> Result<Solution, InvalidInputError> {
    let problem = Problem::new(lot, waiting, vacated)?;
    Ok(AssignmentEngine::new().run(&problem))
}

#[cfg(test)]
mod tests {
    use super::*;
    use lot_alloc_model::generator::{InstanceGenConfig, InstanceGenerator};

    fn solve(capacity: usize, waiting: &[usize], vacated: &[usize]) -> Solution {
        run_simulation(CircularLot::new(capacity), waiting, vacated).unwrap()
    }

    fn mapping(solution: &Solution) -> Vec<(usize, Option<usize>)> {
        solution
            .outcomes()
            .iter()
            .map(|o| (o.initial().value(), o.parked_at().map(|p| p.value())))
            .collect()
    }

    #[test]
    fn test_sample_scenario_golden_mapping() {
        let solution = solve(20, &[6, 19, 17, 13, 1], &[1, 3, 20, 16]);
        assert_eq!(
            mapping(&solution),
            vec![
                (6, Some(16)),
                (19, Some(3)),
                (17, None),
                (13, Some(20)),
                (1, Some(1)),
            ]
        );
        assert_eq!(solution.stats().parked(), 4);
        assert_eq!(solution.stats().unparked(), 1);
    }

    #[test]
    fn test_sample_scenario_report_lines() {
        let solution = solve(20, &[6, 19, 17, 13, 1], &[1, 3, 20, 16]);
        let lines: Vec<String> = solution
            .outcomes()
            .iter()
            .map(|o| format!("{}", o))
            .collect();
        assert_eq!(
            lines,
            vec![
                "Original position 6 parked in 16",
                "Original position 19 parked in 3",
                "Original position 17 did not park",
                "Original position 13 parked in 20",
                "Original position 1 parked in 1",
            ]
        );
    }

    #[test]
    fn test_zero_distance_immediate_match() {
        let solution = solve(20, &[5], &[5]);
        assert_eq!(mapping(&solution), vec![(5, Some(5))]);
    }

    #[test]
    fn test_empty_waiting_set_yields_empty_solution() {
        let solution = solve(20, &[], &[1, 2, 3]);
        assert!(solution.outcomes().is_empty());
        assert_eq!(solution.stats().parked(), 0);
        assert_eq!(solution.stats().unparked(), 0);
    }

    #[test]
    fn test_empty_vacancy_sequence_leaves_everyone_unparked() {
        let solution = solve(20, &[4, 9, 15], &[]);
        assert_eq!(
            mapping(&solution),
            vec![(4, None), (9, None), (15, None)]
        );
    }

    #[test]
    fn test_surplus_vacancies_are_ignored() {
        // Two vehicles, four vacancies: the last two find nobody waiting.
        let solution = solve(20, &[2, 8], &[3, 9, 12, 14]);
        assert_eq!(solution.stats().parked(), 2);
        assert_eq!(solution.stats().unparked(), 0);
    }

    #[test]
    fn test_wrapping_selection_prefers_vehicle_behind_boundary() {
        // Vacancy at 2: vehicle at 19 is 3 steps away clockwise across
        // the boundary, vehicle at 5 is 17 steps away.
        let solution = solve(20, &[5, 19], &[2]);
        assert_eq!(mapping(&solution), vec![(5, None), (19, Some(2))]);
    }

    #[test]
    fn test_shift_propagates_to_remaining_vehicles() {
        // Capacity 10, vehicles at 4 and 9, vacancy at 6: the vehicle at
        // 4 wins (2 steps) and the one at 9 advances to 1 across the
        // boundary. A second vacancy at 2 is then 1 step away from it.
        let solution = solve(10, &[4, 9], &[6, 2]);
        assert_eq!(mapping(&solution), vec![(4, Some(6)), (9, Some(2))]);
    }

    #[test]
    fn test_invalid_waiting_input_produces_no_solution() {
        let err = run_simulation(CircularLot::new(20), &[1, 2, 1], &[3]).unwrap_err();
        assert!(matches!(err, InvalidInputError::Duplicate(_)));
    }

    #[test]
    fn test_invalid_vacated_input_produces_no_solution() {
        let err = run_simulation(CircularLot::new(20), &[1, 2], &[0]).unwrap_err();
        assert!(matches!(err, InvalidInputError::OutOfRange(_)));
    }

    #[test]
    fn test_every_waiting_vehicle_gets_exactly_one_outcome() {
        let lot = CircularLot::new(30);
        let config = InstanceGenConfig::new(lot, 12, 9, 99).unwrap();
        let mut generator = InstanceGenerator::new(config);
        let engine = AssignmentEngine::new();
        for _ in 0..50 {
            let problem = generator.generate();
            let solution = engine.run(&problem);
            assert_eq!(solution.outcomes().len(), problem.waiting_count());
            for (outcome, &initial) in solution.outcomes().iter().zip(problem.waiting()) {
                assert_eq!(outcome.initial(), initial);
            }
        }
    }

    #[test]
    fn test_parked_count_never_exceeds_vacancy_count() {
        let lot = CircularLot::new(30);
        let config = InstanceGenConfig::new(lot, 18, 6, 123).unwrap();
        let mut generator = InstanceGenerator::new(config);
        let engine = AssignmentEngine::new();
        for _ in 0..50 {
            let problem = generator.generate();
            let solution = engine.run(&problem);
            // One vehicle leaves the waiting set per vacancy, so with more
            // vehicles than vacancies every vacancy is consumed.
            assert_eq!(solution.stats().parked(), problem.vacancy_count());
            assert_eq!(
                solution.stats().unparked(),
                problem.waiting_count() - problem.vacancy_count()
            );
        }
    }

    #[test]
    fn test_parked_slots_are_exactly_the_consumed_vacancies() {
        let lot = CircularLot::new(30);
        let config = InstanceGenConfig::new(lot, 10, 10, 7).unwrap();
        let mut generator = InstanceGenerator::new(config);
        let engine = AssignmentEngine::new();
        for _ in 0..20 {
            let problem = generator.generate();
            let solution = engine.run(&problem);
            let mut parked: Vec<usize> = solution
                .outcomes()
                .iter()
                .filter_map(|o| o.parked_at().map(|p| p.value()))
                .collect();
            parked.sort_unstable();
            let mut vacated: Vec<usize> = problem.vacated().iter().map(|v| v.value()).collect();
            vacated.sort_unstable();
            assert_eq!(parked, vacated);
        }
    }

    #[test]
    fn test_deterministic_across_runs() {
        let lot = CircularLot::new(20);
        let problem = Problem::new(lot, &[6, 19, 17, 13, 1], &[1, 3, 20, 16]).unwrap();
        let engine = AssignmentEngine::new();
        assert_eq!(engine.run(&problem), engine.run(&problem));
    }
}
