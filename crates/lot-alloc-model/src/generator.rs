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

//! Seeded random instance generation. Sequences are sampled without
//! replacement, so every generated [`Problem`] passes input validation by
//! construction. Deterministic per seed.

use crate::problem::Problem;
use lot_alloc_core::ring::CircularLot;
use rand::{SeedableRng, rngs::SmallRng};
use std::fmt::Display;

/// A requested sequence length that cannot be drawn without duplicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CountExceedsCapacityError {
    count: usize,
    capacity: usize,
}

impl CountExceedsCapacityError {
    #[inline]
    pub fn new(count: usize, capacity: usize) -> Self {
        Self { count, capacity }
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Display for CountExceedsCapacityError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Cannot draw {} distinct positions from a lot of capacity {}",
            self.count, self.capacity
        )
    }
}

impl std::error::Error for CountExceedsCapacityError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InstanceGenConfigError {
    WaitingCountExceedsCapacity(CountExceedsCapacityError),
    VacatedCountExceedsCapacity(CountExceedsCapacityError),
}

impl Display for InstanceGenConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InstanceGenConfigError::WaitingCountExceedsCapacity(e) => {
                write!(f, "Waiting sequence: {e}")
            }
            InstanceGenConfigError::VacatedCountExceedsCapacity(e) => {
                write!(f, "Vacated sequence: {e}")
            }
        }
    }
}

impl std::error::Error for InstanceGenConfigError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstanceGenConfig {
    lot: CircularLot,
    waiting_count: usize,
    vacated_count: usize,
    seed: u64,
}

impl InstanceGenConfig {
    pub fn new(
        lot: CircularLot,
        waiting_count: usize,
        vacated_count: usize,
        seed: u64,
    ) -> Result<Self, InstanceGenConfigError> {
        if waiting_count > lot.capacity() {
            return Err(InstanceGenConfigError::WaitingCountExceedsCapacity(
                CountExceedsCapacityError::new(waiting_count, lot.capacity()),
            ));
        }
        if vacated_count > lot.capacity() {
            return Err(InstanceGenConfigError::VacatedCountExceedsCapacity(
                CountExceedsCapacityError::new(vacated_count, lot.capacity()),
            ));
        }
        Ok(Self {
            lot,
            waiting_count,
            vacated_count,
            seed,
        })
    }

    #[inline]
    pub fn lot(&self) -> &CircularLot {
        &self.lot
    }

    #[inline]
    pub fn waiting_count(&self) -> usize {
        self.waiting_count
    }

    #[inline]
    pub fn vacated_count(&self) -> usize {
        self.vacated_count
    }

    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

#[derive(Debug, Clone)]
pub struct InstanceGenerator {
    config: InstanceGenConfig,
    rng: SmallRng,
}

impl InstanceGenerator {
    pub fn new(config: InstanceGenConfig) -> Self {
        let rng = SmallRng::seed_from_u64(config.seed());
        Self { config, rng }
    }

    /// Draws `count` distinct slot numbers in `1..=capacity`.
    fn sample_positions(&mut self, count: usize) -> Vec<usize> {
        rand::seq::index::sample(&mut self.rng, self.config.lot.capacity(), count)
            .into_iter()
            .map(|i| i + 1)
            .collect()
    }

    pub fn generate(&mut self) -> Problem {
        let waiting = self.sample_positions(self.config.waiting_count());
        let vacated = self.sample_positions(self.config.vacated_count());
        Problem::new(*self.config.lot(), &waiting, &vacated)
            .expect("sampled positions are in range and distinct")
    }
}

impl From<InstanceGenConfig> for InstanceGenerator {
    fn from(config: InstanceGenConfig) -> Self {
        InstanceGenerator::new(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::is_invalid;

    #[test]
    fn test_config_rejects_counts_above_capacity() {
        let lot = CircularLot::new(10);
        assert!(matches!(
            InstanceGenConfig::new(lot, 11, 0, 1),
            Err(InstanceGenConfigError::WaitingCountExceedsCapacity(_))
        ));
        assert!(matches!(
            InstanceGenConfig::new(lot, 0, 11, 1),
            Err(InstanceGenConfigError::VacatedCountExceedsCapacity(_))
        ));
    }

    #[test]
    fn test_generated_instances_are_valid() {
        let lot = CircularLot::new(25);
        let config = InstanceGenConfig::new(lot, 10, 8, 42).unwrap();
        let mut generator = InstanceGenerator::new(config);
        for _ in 0..50 {
            let problem = generator.generate();
            assert_eq!(problem.waiting_count(), 10);
            assert_eq!(problem.vacancy_count(), 8);
            let waiting: Vec<usize> = problem.waiting().iter().map(|p| p.value()).collect();
            let vacated: Vec<usize> = problem.vacated().iter().map(|p| p.value()).collect();
            assert!(!is_invalid(&lot, &waiting));
            assert!(!is_invalid(&lot, &vacated));
        }
    }

    #[test]
    fn test_generation_is_deterministic_per_seed() {
        let lot = CircularLot::new(25);
        let config = InstanceGenConfig::new(lot, 10, 8, 7).unwrap();
        let a = InstanceGenerator::new(config).generate();
        let b = InstanceGenerator::new(config).generate();
        assert_eq!(a, b);
    }

    #[test]
    fn test_full_lot_sample_uses_every_slot() {
        let lot = CircularLot::new(8);
        let config = InstanceGenConfig::new(lot, 8, 0, 3).unwrap();
        let problem = InstanceGenerator::from(config).generate();
        let mut waiting: Vec<usize> = problem.waiting().iter().map(|p| p.value()).collect();
        waiting.sort_unstable();
        assert_eq!(waiting, (1..=8).collect::<Vec<_>>());
    }
}
