// Degree-32 coefficient recovery: e fully known, a partially known. Each
// iteration picks a fresh cube, extracts the 64 column coefficients, pairs
// them with the measured cube sum, and hands the system to the external
// solver; recovered bits shrink the next cube's unknown set.

use std::fs;
use std::time::Instant;

use anyhow::{Context, Result};
use rand::Rng;

use crate::algebra::poly_map::state_to_poly_maps;
use crate::algebra::state::SymbolicState;
use crate::config::AttackConfig;
use crate::constants::{PHASE2_CUBE_SIZE, PHASE2_DEGREES};
use crate::cube::{column_mask, random_column_of, Cube};
use crate::extraction::dense;
use crate::io::{write_parameters, Parameters};
use crate::phases::{values, RecoveryContext};
use crate::propagation::first_four_rounds;
use crate::solver::Solver;

/// Result of the recovery loop.
#[derive(Debug, Clone, Copy)]
pub struct RecoveryOutcome {
    pub context: RecoveryContext,
    pub tries: u32,
}

struct CubeChoice {
    cube: Cube,
    target: u64,
    unknowns: u32,
}

/// Picks the next cube: as many columns as allowed where e = 0 (their row-1
/// bits are already known constants), topped up with open e = 1 columns
/// whose a-bits the resulting system will constrain.
fn select_cube(context: &RecoveryContext, zero_budget: usize, rng: &mut impl Rng) -> CubeChoice {
    let mut chosen = 0u64;
    let zeros = context.e_zero_mask();
    if zeros.count_ones() as usize > zero_budget {
        while (chosen.count_ones() as usize) < zero_budget {
            if let Some(column) = random_column_of(rng, zeros & !chosen) {
                chosen |= column_mask(column);
            }
        }
    } else {
        chosen = zeros;
    }

    let mut unknowns = 0;
    while (chosen.count_ones() as usize) < PHASE2_CUBE_SIZE {
        let open = context.open_mask() & !chosen;
        if let Some(column) = random_column_of(rng, open) {
            chosen |= column_mask(column);
            unknowns += 1;
        } else if let Some(column) = random_column_of(rng, context.e & !chosen) {
            // Every open column is already in the cube; pad with recovered
            // e = 1 columns rather than spinning.
            chosen |= column_mask(column);
        } else {
            break;
        }
    }

    CubeChoice {
        cube: Cube::from_mask(chosen),
        target: chosen,
        unknowns,
    }
}

/// Runs the recovery loop until every open bit is closed or the try budget
/// is exhausted; the returned context carries whatever was recovered.
pub fn run(
    config: &AttackConfig,
    solver: &dyn Solver,
    mut context: RecoveryContext,
    rng: &mut impl Rng,
) -> Result<RecoveryOutcome> {
    fs::create_dir_all(&config.results_dir).with_context(|| {
        format!("cannot create results directory {}", config.results_dir.display())
    })?;
    println!("open a-bits: {}", context.unknown_count());

    let mut tries = 0;
    while !context.is_complete() && tries < config.phase2_max_tries {
        tries += 1;
        let choice = select_cube(&context, config.phase2_zero_budget, rng);
        println!(
            "try {tries}: cube {:016x}, {} open bits inside",
            choice.target, choice.unknowns
        );

        write_parameters(
            &config.results_dir.join("parameters.txt"),
            &Parameters {
                a: context.a,
                e: context.e,
                cubes: vec![choice.target],
            },
        )
        .context("writing parameters")?;

        let start = SymbolicState::phase2_initial(
            &choice.cube,
            context.a,
            context.e,
            context.recovered,
            context.recovered_one,
        );
        let l4 = state_to_poly_maps(&first_four_rounds(&start, &PHASE2_DEGREES));

        let mut lines = Vec::new();
        let mut non_constant = 0u32;
        for col in 0..64 {
            let started = Instant::now();
            let coefficient = dense::recover_coefficient(col, &l4, choice.target);
            let rendered = dense::render_coefficient(&coefficient);
            println!(
                "column {col}: {} terms in {:.1?}",
                coefficient.len(),
                started.elapsed()
            );
            if rendered != "0" && rendered != "1" {
                non_constant += 1;
            }
            lines.push(rendered);
            // Equations beyond twice the unknown count rarely add rank;
            // cutting the cube short here is an empirical heuristic, not a
            // completeness argument.
            if non_constant > 2 * choice.unknowns {
                break;
            }
        }
        let polynomials = config.results_dir.join("polynomials.txt");
        fs::write(&polynomials, lines.join("\n") + "\n")
            .with_context(|| format!("writing {}", polynomials.display()))?;

        values::phase2_cube_sums(&config.results_dir, rng).context("cube-sum recovery")?;

        let recovered = solver
            .solve(&config.results_dir)
            .context("external solver")?;
        context.absorb(&recovered);
        println!(
            "solver returned {} assignments; {} bits still open",
            recovered.len(),
            context.unknown_count()
        );
    }

    Ok(RecoveryOutcome { context, tries })
}
