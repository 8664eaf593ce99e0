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

use lot_alloc_core::ring::CircularLot;
use lot_alloc_model::sol::Solution;
use lot_alloc_sim::run_simulation;
use serde::Serialize;
use std::{fs::File, io::BufWriter, process::ExitCode};
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

/// Sample lot capacity; slot numbering runs `1..=LOT_CAPACITY`.
const LOT_CAPACITY: usize = 20;

fn enable_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT | FmtSpan::CLOSE)
        .init();
}

#[derive(Debug, Clone, Serialize)]
struct OutcomeRecord {
    initial: usize,
    parked_at: Option<usize>,
}

#[derive(Debug, Clone, Serialize)]
struct SimulationReport {
    capacity: usize,
    waiting: Vec<usize>,
    vacated: Vec<usize>,
    outcomes: Vec<OutcomeRecord>,
    parked: usize,
    unparked: usize,
}

impl SimulationReport {
    fn new(capacity: usize, waiting: Vec<usize>, vacated: Vec<usize>, solution: &Solution) -> Self {
        let outcomes = solution
            .outcomes()
            .iter()
            .map(|o| OutcomeRecord {
                initial: o.initial().value(),
                parked_at: o.parked_at().map(|p| p.value()),
            })
            .collect();
        Self {
            capacity,
            waiting,
            vacated,
            outcomes,
            parked: solution.stats().parked(),
            unparked: solution.stats().unparked(),
        }
    }
}

fn main() -> ExitCode {
    enable_tracing();

    let waiting = vec![6, 19, 17, 13, 1];
    let vacated = vec![1, 3, 20, 16];
    let lot = CircularLot::new(LOT_CAPACITY);

    let solution = match run_simulation(lot, &waiting, &vacated) {
        Ok(solution) => solution,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    for outcome in solution.outcomes() {
        println!("{}", outcome);
    }

    let report = SimulationReport::new(LOT_CAPACITY, waiting, vacated, &solution);
    let file = File::create("simulation_results.json").expect("create simulation_results.json");
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &report).expect("write json report");

    ExitCode::SUCCESS
}
