// Fixed parameters of the 6-round attack.
//
// The cube degrees, degree schedules and verification cubes are tied to the
// trail catalogue in `trails.rs`; changing one without the others breaks the
// coefficient extraction.

/// Rotation pairs (alpha, beta) of the per-row diffusion sigma_0..sigma_4.
pub const SIGMA_ROTATIONS: [(u32, u32); 5] = [(19, 28), (61, 39), (1, 6), (10, 17), (7, 41)];

/// Rounds of the reduced permutation targeted by the attack.
pub const ATTACK_ROUNDS: u32 = 6;

/// Cube size for the degree-32 coefficient recovery.
pub const PHASE2_CUBE_SIZE: usize = 32;

/// Cube size for the degree-31 coefficient recovery.
pub const PHASE3_CUBE_SIZE: usize = 31;

/// Public-variable degrees kept after the quadratic S-box of rounds 2 to 4.
///
/// Only monomials whose degree lies in the per-round set can still reach the
/// targeted cube degree at round 6 through a catalogued trail; everything
/// else is dropped on the spot.
#[derive(Debug, Clone, Copy)]
pub struct DegreeSchedule {
    pub round2: &'static [u32],
    pub round3: &'static [u32],
    pub round4: &'static [u32],
}

/// Schedule for the degree-32 target: 32 = 8 + 8 + 8 + 8, so every factor
/// degree is even and exact.
pub const PHASE2_DEGREES: DegreeSchedule = DegreeSchedule {
    round2: &[2],
    round3: &[4],
    round4: &[8],
};

/// Schedule for the degree-31 target. The minimal factor degree through the
/// two multiplication layers above round 4 is 31 - 3 * 8 = 7, which needs a
/// degree-3 factor at round 3 and a degree-1 factor at round 2; the
/// odd-degree monomials are exactly the carriers of the b/c unknowns.
pub const PHASE3_DEGREES: DegreeSchedule = DegreeSchedule {
    round2: &[1, 2],
    round3: &[3, 4],
    round4: &[7, 8],
};

/// First verification cube (selector 0).
pub const PHASE1_CUBE_V: [usize; 32] = [
    0, 1, 4, 5, 6, 8, 14, 15, 16, 26, 27, 30, 34, 37, 38, 48, 49, 50, 56, 58, 59, 60, 63, 17, 35,
    40, 46, 55, 9, 12, 18, 19,
];

/// Second verification cube (any other selector); shares 28 columns with the
/// first.
pub const PHASE1_CUBE_W: [usize; 32] = [
    0, 1, 4, 5, 6, 8, 14, 15, 16, 26, 27, 30, 34, 37, 38, 48, 49, 50, 56, 58, 59, 60, 63, 17, 35,
    40, 46, 55, 7, 24, 41, 43,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verification_cubes_are_valid() {
        for cube in [&PHASE1_CUBE_V, &PHASE1_CUBE_W] {
            assert_eq!(cube.len(), PHASE2_CUBE_SIZE);
            assert!(cube.iter().all(|&j| j < 64));
            let mut sorted = cube.to_vec();
            sorted.sort_unstable();
            sorted.dedup();
            assert_eq!(sorted.len(), cube.len());
        }
    }

    #[test]
    fn test_verification_cubes_share_a_core() {
        let shared = PHASE1_CUBE_V.iter().filter(|j| PHASE1_CUBE_W.contains(j)).count();
        assert_eq!(shared, 28);
    }

    #[test]
    fn test_degree_schedules_are_increasing() {
        for schedule in [PHASE2_DEGREES, PHASE3_DEGREES] {
            let max2 = schedule.round2.iter().max().unwrap();
            let max3 = schedule.round3.iter().max().unwrap();
            let max4 = schedule.round4.iter().max().unwrap();
            assert!(max2 < max3 && max3 < max4);
        }
    }
}
