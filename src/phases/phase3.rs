// Degree-31 coefficient recovery with a and e fully known. Emits one
// polynomial system per cube; the matching measurements come from the
// cube-sums subcommand, and the solver closes the system on rows 2 and 3.

use std::fs;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use rand::Rng;

use crate::algebra::poly_map::state_to_compact_maps;
use crate::algebra::state::SymbolicState;
use crate::config::AttackConfig;
use crate::constants::{PHASE3_CUBE_SIZE, PHASE3_DEGREES};
use crate::cube::{column_mask, random_column_of, Cube};
use crate::extraction::compact;
use crate::io::{write_parameters, Parameters};
use crate::propagation::first_four_rounds;

/// Draws one degree-31 cube: as many e = 0 columns as the budget allows,
/// topped up from the e = 1 columns.
fn draw_cube(e: u64, zero_budget: usize, rng: &mut impl Rng) -> Cube {
    let mut chosen = 0u64;
    let zeros = !e;
    if zeros.count_ones() as usize > zero_budget {
        while (chosen.count_ones() as usize) < zero_budget {
            if let Some(column) = random_column_of(rng, zeros & !chosen) {
                chosen |= column_mask(column);
            }
        }
    } else {
        chosen = zeros;
    }
    while (chosen.count_ones() as usize) < PHASE3_CUBE_SIZE {
        if let Some(column) = random_column_of(rng, e & !chosen) {
            chosen |= column_mask(column);
        } else if let Some(column) = random_column_of(rng, zeros & !chosen) {
            // Too few e = 1 columns exist; spill over the zero budget rather
            // than spinning.
            chosen |= column_mask(column);
        } else {
            break;
        }
    }
    Cube::from_mask(chosen)
}

/// Recovers the 64 coefficients of each cube's maximal monomial and writes
/// them to `polynomials_cube_{k}.txt`. With `parallel_columns` every
/// column's round-5 products are held in memory at once; the sequential
/// default caps RAM at one column's working set.
pub fn run(
    config: &AttackConfig,
    a: u64,
    e: u64,
    parallel_columns: bool,
    rng: &mut impl Rng,
) -> Result<()> {
    fs::create_dir_all(&config.results_dir).with_context(|| {
        format!("cannot create results directory {}", config.results_dir.display())
    })?;

    let cubes: Vec<Cube> = (0..config.phase3_cubes)
        .map(|_| draw_cube(e, config.phase3_zero_budget, rng))
        .collect();
    for (i, first) in cubes.iter().enumerate() {
        for second in &cubes[i + 1..] {
            if first == second {
                bail!("duplicate cubes drawn; rerun with a different seed");
            }
        }
    }

    write_parameters(
        &config.results_dir.join("parameters.txt"),
        &Parameters {
            a,
            e,
            cubes: cubes.iter().map(Cube::mask).collect(),
        },
    )
    .context("writing parameters")?;

    for (k, cube) in cubes.iter().enumerate() {
        let target = cube.mask();
        println!("cube {k}: {target:016x}");

        let start = SymbolicState::phase3_initial(cube, a, e);
        let l4 = state_to_compact_maps(&first_four_rounds(&start, &PHASE3_DEGREES));

        let lines: Vec<String> = if parallel_columns {
            compact::recover_all_columns(&l4, target)
                .iter()
                .map(|coefficient| coefficient.render())
                .collect()
        } else {
            (0..64)
                .map(|col| {
                    let started = Instant::now();
                    let coefficient = compact::recover_coefficient(col, &l4, target);
                    println!(
                        "cube {k} column {col}: {} terms in {:.1?}",
                        coefficient.term_count(),
                        started.elapsed()
                    );
                    coefficient.render()
                })
                .collect()
        };

        let path = config.results_dir.join(format!("polynomials_cube_{k}.txt"));
        fs::write(&path, lines.join("\n") + "\n")
            .with_context(|| format!("writing {}", path.display()))?;
    }
    Ok(())
}
