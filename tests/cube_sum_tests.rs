// Numeric cube-sum laws: the one-round two-state identity, the
// subset-parity harness, and linearity in the capacity where it holds.

use ascon_cube_attack::cube::column_mask;
use ascon_cube_attack::permutation::permute;
use ascon_cube_attack::{cube_sum, Cube};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn test_single_variable_one_round_sum() {
    // With a zero capacity and cube {0}, one round and the last linear
    // layer on, the sum is sigma(S(e0)) ^ sigma(S(0)) by definition.
    let cube = Cube::new(vec![0]);
    let mut summed = [0u64; 5];
    cube_sum(&mut summed, 1, &cube, true, false);

    let mut with_bit = [column_mask(0), 0, 0, 0, 0];
    permute(&mut with_bit, 1, true, false);
    let mut without_bit = [0u64; 5];
    permute(&mut without_bit, 1, true, false);

    for row in 0..5 {
        assert_eq!(summed[row], with_bit[row] ^ without_bit[row], "row {row}");
    }
}

#[test]
fn test_identity_permutation_subset_parity() {
    // With zero rounds the permutation is the identity, so rows 1..=4 are
    // XORed an even number of times and row 0 collects the XOR of all
    // subset masks, which is zero for any non-empty cube.
    let cube = Cube::new(vec![3, 17, 40]);
    let mut state = [0, 0xaaaa, 0xbbbb, 0xcccc, 0xdddd];
    cube_sum(&mut state, 0, &cube, true, true);
    assert_eq!(state, [0; 5]);
}

#[test]
fn test_capacity_linearity_at_zero_rounds() {
    let cube = Cube::new(vec![1, 2]);
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..10 {
        let x: [u64; 5] = core::array::from_fn(|_| rng.gen());
        let y: [u64; 5] = core::array::from_fn(|_| rng.gen());

        let mut sum_x = x;
        cube_sum(&mut sum_x, 0, &cube, true, false);
        let mut sum_y = y;
        cube_sum(&mut sum_y, 0, &cube, true, false);
        let mut sum_xy = core::array::from_fn(|i| x[i] ^ y[i]);
        cube_sum(&mut sum_xy, 0, &cube, true, false);

        for row in 0..5 {
            assert_eq!(sum_xy[row], sum_x[row] ^ sum_y[row]);
        }
    }
}

#[test]
fn test_parallel_reduction_matches_sequential() {
    let cube = Cube::new(vec![5, 9, 20, 33]);
    let capacity = [0u64, 0x1111, 0x2222, 0x3333, 0x4444];

    let mut parallel = capacity;
    cube_sum(&mut parallel, 3, &cube, true, true);

    let mut sequential = [0u64; 5];
    for subset in 0..(1u64 << cube.len()) {
        let mut state = [
            cube.subset_mask(subset),
            capacity[1],
            capacity[2],
            capacity[3],
            capacity[4],
        ];
        permute(&mut state, 3, true, true);
        for row in 0..5 {
            sequential[row] ^= state[row];
        }
    }
    assert_eq!(parallel, sequential);
}
