// Numeric cube-sum evaluation: XOR of the permutation output over every
// assignment of the cube variables. Subsets are independent, so the whole
// enumeration fans out over the worker pool and folds back through the
// associative-commutative XOR reduction.

use rayon::prelude::*;

use crate::cube::Cube;
use crate::permutation::{permute, State};

/// Computes the cube sum over all 2^|cube| assignments of the cube columns.
///
/// On input, rows 1..=4 of `state` hold the capacity and row 0 is ignored;
/// on return the whole state is replaced by the five XOR accumulators.
pub fn cube_sum(state: &mut State, rounds: u32, cube: &Cube, last_linear: bool, add_constants: bool) {
    assert!(cube.len() < 64, "cube too large to enumerate");
    let capacity = *state;
    let subsets = 1u64 << cube.len();

    *state = (0..subsets)
        .into_par_iter()
        .map(|subset| {
            let mut x: State = [
                cube.subset_mask(subset),
                capacity[1],
                capacity[2],
                capacity[3],
                capacity[4],
            ];
            permute(&mut x, rounds, last_linear, add_constants);
            x
        })
        .reduce(|| [0u64; 5], xor_states);
}

fn xor_states(a: State, b: State) -> State {
    [a[0] ^ b[0], a[1] ^ b[1], a[2] ^ b[2], a[3] ^ b[3], a[4] ^ b[4]]
}
