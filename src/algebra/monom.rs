// Bit-packed monomials.
//
// Variables live in disjoint banks of 64; bit (63 - j) of a bank marks
// variable j, matching the column layout of the numeric state.

use std::fmt;

use crate::cube::{column_bit, column_mask};

/// Banks carried by the symbolic state: public v, secret a, b, c, and one
/// reserved slot.
pub const STATE_BANKS: usize = 5;

pub const BANK_PUBLIC: usize = 0;
pub const BANK_A: usize = 1;
pub const BANK_B: usize = 2;
pub const BANK_C: usize = 3;

/// A square-free monomial across `B` banks. The all-zero record is the
/// constant 1. The derived order is lexicographic over the bank words, which
/// is the key discipline of every monomial set in the crate.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Monomial<const B: usize>(pub [u64; B]);

/// Monomial of the full symbolic state.
pub type Monom = Monomial<STATE_BANKS>;

impl<const B: usize> Monomial<B> {
    /// The empty product.
    pub const ONE: Self = Monomial([0; B]);

    /// Single variable `col` of `bank`.
    pub fn variable(bank: usize, col: usize) -> Self {
        let mut words = [0u64; B];
        words[bank] = column_mask(col);
        Monomial(words)
    }

    /// Monomial product: bankwise OR, because variables are idempotent over
    /// GF(2).
    pub fn product(&self, other: &Self) -> Self {
        let mut words = [0u64; B];
        for (i, word) in words.iter_mut().enumerate() {
            *word = self.0[i] | other.0[i];
        }
        Monomial(words)
    }

    pub fn bank(&self, index: usize) -> u64 {
        self.0[index]
    }

    /// Degree in the public variables.
    pub fn public_degree(&self) -> u32 {
        self.0[0].count_ones()
    }

    pub fn is_one(&self) -> bool {
        self.0 == [0; B]
    }

    /// Same monomial with the public bank cleared.
    pub fn residue(&self) -> Self {
        let mut words = self.0;
        words[0] = 0;
        Monomial(words)
    }

    /// True iff every indicated variable is 1 under `assignment` (one word
    /// per bank).
    pub fn evaluate(&self, assignment: &[u64; B]) -> bool {
        self.0
            .iter()
            .zip(assignment)
            .all(|(&vars, &values)| vars & values == vars)
    }
}

impl<const B: usize> fmt::Debug for Monomial<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_one() {
            return write!(f, "1");
        }
        let names = ["v", "a", "b", "c", "d"];
        let mut first = true;
        for (bank, &word) in self.0.iter().enumerate() {
            for col in 0..64 {
                if column_bit(word, col) {
                    if !first {
                        write!(f, "*")?;
                    }
                    first = false;
                    write!(f, "{}{col}", names.get(bank).unwrap_or(&"x"))?;
                }
            }
        }
        Ok(())
    }
}
