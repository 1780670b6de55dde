// Cube-sum vector recovery: measures the sums that the emitted polynomial
// systems are matched against. The degree-32 coefficients do not depend on
// rows 2 and 3, so fresh random values are drawn for them; phase 3 records
// the drawn values because they are exactly what its system solves for.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use rand::Rng;

use crate::constants::ATTACK_ROUNDS;
use crate::cube::{random_word, Cube};
use crate::cube_sum::cube_sum;
use crate::io::{read_parameters, write_hex_lines};

/// Builds the capacity rows from the recovered values: row 4 encodes
/// d = c ^ (e ^ 1).
fn capacity(a: u64, b: u64, c: u64, e: u64) -> [u64; 5] {
    [0, a, b, c, !(c ^ e)]
}

/// Phase-2 measurement: one sum for the single cube in `parameters.txt`,
/// written to `cube_sum_vectors.txt`.
pub fn phase2_cube_sums(results_dir: &Path, rng: &mut impl Rng) -> Result<()> {
    let parameters = read_parameters(&results_dir.join("parameters.txt"))
        .context("reading phase-2 parameters")?;
    let b = random_word(rng);
    let c = random_word(rng);

    let cube = Cube::from_mask(parameters.cubes[0]);
    let mut state = capacity(parameters.a, b, c, parameters.e);
    cube_sum(&mut state, ATTACK_ROUNDS, &cube, false, false);

    let output = results_dir.join("cube_sum_vectors.txt");
    write_hex_lines(&output, &[state[0]])
        .with_context(|| format!("writing {}", output.display()))?;
    Ok(())
}

/// Phase-3 measurement: the drawn b and c first, then one sum per cube in
/// `parameters.txt`.
pub fn phase3_cube_sums(results_dir: &Path, rng: &mut impl Rng) -> Result<()> {
    let parameters = read_parameters(&results_dir.join("parameters.txt"))
        .context("reading phase-3 parameters")?;
    let b = random_word(rng);
    let c = random_word(rng);

    let mut lines = vec![b, c];
    for &mask in &parameters.cubes {
        let started = Instant::now();
        let cube = Cube::from_mask(mask);
        let mut state = capacity(parameters.a, b, c, parameters.e);
        cube_sum(&mut state, ATTACK_ROUNDS, &cube, false, false);
        println!(
            "cube {mask:016x}: sum {:016x} in {:.1?}",
            state[0],
            started.elapsed()
        );
        lines.push(state[0]);
    }

    let output = results_dir.join("cube_sum_vectors.txt");
    write_hex_lines(&output, &lines)
        .with_context(|| format!("writing {}", output.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::{write_parameters, Parameters};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_phase2_writes_one_sum() {
        let dir = std::env::temp_dir().join(format!("cube-attack-values-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        write_parameters(
            &dir.join("parameters.txt"),
            &Parameters {
                a: 0x123,
                e: 0x456,
                cubes: vec![crate::cube::Cube::new(vec![0, 1, 2]).mask()],
            },
        )
        .unwrap();
        let mut rng = StdRng::seed_from_u64(11);
        phase2_cube_sums(&dir, &mut rng).unwrap();
        let sums = crate::io::read_hex_lines(&dir.join("cube_sum_vectors.txt")).unwrap();
        assert_eq!(sums.len(), 1);
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
