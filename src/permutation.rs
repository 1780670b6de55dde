// Bit-sliced ASCON permutation.
//
// The 320-bit state is five 64-bit rows; column j of a row occupies bit
// (63 - j), so the leftmost hex digit of a row holds columns 0..=3. Every
// mask in the crate follows this layout.

use crate::constants::SIGMA_ROTATIONS;

/// The five rows of a bit-sliced state. Row 0 is the rate, rows 1..=4 the
/// capacity.
pub type State = [u64; 5];

/// Per-row diffusion: x ^ ROTR(x, alpha_i) ^ ROTR(x, beta_i).
pub fn sigma(x: u64, row: usize) -> u64 {
    let (alpha, beta) = SIGMA_ROTATIONS[row];
    x ^ x.rotate_right(alpha) ^ x.rotate_right(beta)
}

/// S-box layer, applied to all 64 columns at once.
pub fn sbox(x: &mut State) {
    x[0] ^= x[4];
    x[2] ^= x[1];
    x[4] ^= x[3];
    let t0 = !x[0] & x[1];
    let t1 = !x[1] & x[2];
    let t2 = !x[2] & x[3];
    let t3 = !x[3] & x[4];
    let t4 = !x[4] & x[0];
    x[0] ^= t1;
    x[1] ^= t2;
    x[2] ^= t3;
    x[3] ^= t4;
    x[4] ^= t0;
    x[1] ^= x[0];
    x[3] ^= x[2];
    x[0] ^= x[4];
    x[2] = !x[2];
}

/// Constant added into row 2 during round `index` of an `rounds`-round
/// schedule; for `rounds` < 12 this is the tail of the 12-round sequence.
pub fn round_constant(index: u32, rounds: u32) -> u64 {
    let i = index + 12 - rounds;
    u64::from(i ^ ((15 - i) << 4))
}

/// Linear layer: sigma_i on every row.
pub fn linear_layer(x: &mut State) {
    for (row, word) in x.iter_mut().enumerate() {
        *word = sigma(*word, row);
    }
}

/// Applies `rounds` rounds in place. Zero rounds is the identity; more than
/// twelve is a precondition violation. The final linear layer can be skipped
/// (it is invertible, so an attacker loses nothing by peeling it off) and the
/// round-constant additions can be disabled.
pub fn permute(x: &mut State, rounds: u32, last_linear: bool, add_constants: bool) {
    debug_assert!(rounds <= 12, "the permutation has at most 12 rounds");
    for i in 0..rounds {
        if add_constants {
            x[2] ^= round_constant(i, rounds);
        }
        sbox(x);
        if i != rounds - 1 || last_linear {
            linear_layer(x);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Published 5-bit S-box, x0 as the most significant input/output bit.
    pub const SBOX_TABLE: [u8; 32] = [
        4, 11, 31, 20, 26, 21, 9, 2, 27, 5, 8, 18, 29, 3, 6, 28, 30, 19, 7, 14, 0, 13, 17, 24, 16,
        12, 1, 25, 22, 10, 15, 23,
    ];

    fn sbox_on_column(input: u8) -> u8 {
        let mut state = [0u64; 5];
        for row in 0..5 {
            if (input >> (4 - row)) & 1 == 1 {
                state[row] = 1;
            }
        }
        sbox(&mut state);
        let mut out = 0u8;
        for row in 0..5 {
            out |= ((state[row] & 1) as u8) << (4 - row);
        }
        out
    }

    #[test]
    fn test_sbox_matches_published_table() {
        for input in 0..32u8 {
            assert_eq!(sbox_on_column(input), SBOX_TABLE[input as usize]);
        }
    }

    #[test]
    fn test_round_constants_full_schedule() {
        let expected = [
            0xf0, 0xe1, 0xd2, 0xc3, 0xb4, 0xa5, 0x96, 0x87, 0x78, 0x69, 0x5a, 0x4b,
        ];
        for (i, &rc) in expected.iter().enumerate() {
            assert_eq!(round_constant(i as u32, 12), rc);
        }
    }

    #[test]
    fn test_round_constants_six_round_suffix() {
        let expected = [0x96, 0x87, 0x78, 0x69, 0x5a, 0x4b];
        for (i, &rc) in expected.iter().enumerate() {
            assert_eq!(round_constant(i as u32, 6), rc);
        }
    }

    #[test]
    fn test_sigma_fixes_zero() {
        for row in 0..5 {
            assert_eq!(sigma(0, row), 0);
        }
    }

    #[test]
    fn test_zero_rounds_is_identity() {
        let mut state = [1, 2, 3, 4, 5];
        permute(&mut state, 0, true, true);
        assert_eq!(state, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_skipping_last_linear_layer() {
        let start = [
            0x0123456789abcdef,
            0xfedcba9876543210,
            0x0f1e2d3c4b5a6978,
            0x1122334455667788,
            0x99aabbccddeeff00,
        ];
        let mut with = start;
        permute(&mut with, 6, true, true);
        let mut without = start;
        permute(&mut without, 6, false, true);
        linear_layer(&mut without);
        assert_eq!(with, without);
    }
}
