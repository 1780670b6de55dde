// Attack drivers. Phase 1 checks the distinguishing property of the two
// published cubes; phase 2 recovers the open bits of row 1; phase 3 recovers
// rows 2 and 3 once rows 1 and 3+4 are known.

pub mod phase1;
pub mod phase2;
pub mod phase3;
pub mod values;

use rand::Rng;

use crate::cube::{column_mask, random_word};
use crate::solver::Assignments;

/// Recovery progress threaded through the drivers: the secret rows under
/// attack and which a-bits are known so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecoveryContext {
    pub a: u64,
    pub e: u64,
    /// Mask of recovered a positions.
    pub recovered: u64,
    /// Mask of positions recovered with value 1.
    pub recovered_one: u64,
}

impl RecoveryContext {
    /// Fresh context over uniformly sampled secret rows.
    pub fn sample(rng: &mut impl Rng) -> Self {
        RecoveryContext {
            a: random_word(rng),
            e: random_word(rng),
            recovered: 0,
            recovered_one: 0,
        }
    }

    /// Columns where e is zero; their a-bits are exposed by the first phase.
    pub fn e_zero_mask(&self) -> u64 {
        !self.e
    }

    /// a-bits still to recover: e = 1 positions not yet closed.
    pub fn open_mask(&self) -> u64 {
        self.e & !self.recovered
    }

    pub fn unknown_count(&self) -> u32 {
        self.open_mask().count_ones()
    }

    pub fn is_complete(&self) -> bool {
        self.open_mask() == 0
    }

    /// Folds solver output into the context.
    pub fn absorb(&mut self, assignments: &Assignments) {
        for (&column, &value) in assignments {
            self.recovered |= column_mask(column);
            if value {
                self.recovered_one |= column_mask(column);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_mask_tracks_progress() {
        let mut context = RecoveryContext {
            a: 0,
            e: column_mask(1) | column_mask(5),
            recovered: 0,
            recovered_one: 0,
        };
        assert_eq!(context.unknown_count(), 2);
        assert!(!context.is_complete());

        let mut assignments = Assignments::new();
        assignments.insert(1, true);
        assignments.insert(5, false);
        context.absorb(&assignments);
        assert!(context.is_complete());
        assert_eq!(context.recovered_one, column_mask(1));
        assert_eq!(context.recovered, column_mask(1) | column_mask(5));
    }

    #[test]
    fn test_e_zero_mask_is_complement() {
        let context = RecoveryContext {
            a: 0,
            e: 0xff00ff00ff00ff00,
            recovered: 0,
            recovered_one: 0,
        };
        assert_eq!(context.e_zero_mask(), 0x00ff00ff00ff00ff);
    }
}
