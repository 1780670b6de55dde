// The 320-coordinate symbolic state and its per-phase initial contents.

use super::coor::Coor;
use super::monom::{Monom, BANK_A, BANK_B, BANK_C, BANK_PUBLIC, STATE_BANKS};
use crate::cube::{column_bit, column_mask, Cube};

/// Coordinates of the symbolic state, row-major like the numeric rows.
pub const STATE_COORDS: usize = 320;

/// Symbolic ASCON state: one GF(2) polynomial per output bit.
#[derive(Clone, PartialEq, Eq)]
pub struct SymbolicState(Vec<Coor>);

impl SymbolicState {
    pub fn empty() -> Self {
        SymbolicState(vec![Coor::zero(); STATE_COORDS])
    }

    pub(crate) fn from_coords(coords: Vec<Coor>) -> Self {
        assert_eq!(coords.len(), STATE_COORDS);
        SymbolicState(coords)
    }

    pub fn coord(&self, row: usize, col: usize) -> &Coor {
        &self.0[row * 64 + col]
    }

    pub fn coord_mut(&mut self, row: usize, col: usize) -> &mut Coor {
        &mut self.0[row * 64 + col]
    }

    /// Coordinate by row-major position.
    pub fn at(&self, position: usize) -> &Coor {
        &self.0[position]
    }

    pub fn coords(&self) -> &[Coor] {
        &self.0
    }

    /// Total number of monomials across the state; a cheap progress gauge
    /// for the propagation.
    pub fn monomial_count(&self) -> usize {
        self.0.iter().map(Coor::len).sum()
    }

    /// Evaluates every coordinate at `assignment`, returning numeric rows.
    pub fn evaluate(&self, assignment: &[u64; STATE_BANKS]) -> [u64; 5] {
        let mut rows = [0u64; 5];
        for (row, word) in rows.iter_mut().enumerate() {
            for col in 0..64 {
                if self.coord(row, col).evaluate(assignment) {
                    *word |= column_mask(col);
                }
            }
        }
        rows
    }

    /// Initial state for the degree-32 recovery: e fully known, a partially.
    ///
    /// Row 0 carries the cube variables. Row 1 entries exist only on cube
    /// columns: a known bit of value 1 enters as the constant 1 (either
    /// e_j = 0 revealed it during the first phase, or it was recovered
    /// since), a known 0 enters as nothing, and an open bit enters as the
    /// variable a_j. Rows 3 and 4 carry c_j, with row 4 absorbing the
    /// constant of d = c ^ (e ^ 1); row 2 stays empty because no catalogued
    /// trail reads b.
    pub fn phase2_initial(cube: &Cube, a: u64, e: u64, recovered: u64, recovered_one: u64) -> Self {
        let mut s = Self::empty();
        for j in 0..64 {
            if cube.contains(j) {
                s.coord_mut(0, j).toggle(Monom::variable(BANK_PUBLIC, j));
                let e_zero = !column_bit(e, j);
                if (e_zero && column_bit(a, j)) || column_bit(recovered_one, j) {
                    s.coord_mut(1, j).toggle(Monom::ONE);
                } else if !e_zero && !column_bit(recovered, j) {
                    s.coord_mut(1, j).toggle(Monom::variable(BANK_A, j));
                }
            }
            s.coord_mut(3, j).toggle(Monom::variable(BANK_C, j));
            s.coord_mut(4, j).toggle(Monom::variable(BANK_C, j));
            if !column_bit(e, j) {
                s.coord_mut(4, j).toggle(Monom::ONE);
            }
        }
        s
    }

    /// Initial state for the degree-31 recovery: a and e fully known, b and
    /// c free variables on every column.
    pub fn phase3_initial(cube: &Cube, a: u64, e: u64) -> Self {
        let mut s = Self::empty();
        for j in 0..64 {
            if cube.contains(j) {
                s.coord_mut(0, j).toggle(Monom::variable(BANK_PUBLIC, j));
            }
            if column_bit(a, j) {
                s.coord_mut(1, j).toggle(Monom::ONE);
            }
            s.coord_mut(2, j).toggle(Monom::variable(BANK_B, j));
            s.coord_mut(3, j).toggle(Monom::variable(BANK_C, j));
            s.coord_mut(4, j).toggle(Monom::variable(BANK_C, j));
            if !column_bit(e, j) {
                s.coord_mut(4, j).toggle(Monom::ONE);
            }
        }
        s
    }
}
