// A coordinate of the symbolic state: the XOR of a set of monomials.

use std::collections::BTreeSet;
use std::ops::{Add, AddAssign};

use super::monom::{Monom, STATE_BANKS};

/// GF(2) polynomial as an ordered monomial set. Insertion toggles, so
/// duplicates cancel and the empty set is the zero polynomial; iteration
/// follows the monomial order, which keeps serialisation deterministic.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Coor(BTreeSet<Monom>);

impl Coor {
    pub fn zero() -> Self {
        Coor::default()
    }

    /// The constant polynomial 1.
    pub fn one() -> Self {
        let mut c = Coor::zero();
        c.toggle(Monom::ONE);
        c
    }

    pub fn from_monomials<I: IntoIterator<Item = Monom>>(monomials: I) -> Self {
        let mut c = Coor::zero();
        for m in monomials {
            c.toggle(m);
        }
        c
    }

    /// Adds one monomial mod 2: inserts it, or removes it when present.
    pub fn toggle(&mut self, m: Monom) {
        if !self.0.remove(&m) {
            self.0.insert(m);
        }
    }

    pub fn contains(&self, m: &Monom) -> bool {
        self.0.contains(m)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Monom> {
        self.0.iter()
    }

    /// Product keeping only monomials accepted by `keep`. Every pairwise
    /// product is formed; rejected ones are dropped before they can toggle.
    pub fn mul_filtered(&self, other: &Coor, keep: impl Fn(&Monom) -> bool) -> Coor {
        let mut out = Coor::zero();
        for x in &self.0 {
            for y in &other.0 {
                let m = x.product(y);
                if keep(&m) {
                    out.toggle(m);
                }
            }
        }
        out
    }

    /// Evaluates the polynomial at `assignment` (one word per bank).
    pub fn evaluate(&self, assignment: &[u64; STATE_BANKS]) -> bool {
        self.0.iter().filter(|m| m.evaluate(assignment)).count() % 2 == 1
    }
}

/// GF(2) sum: the symmetric difference of the two sets.
impl Add<&Coor> for &Coor {
    type Output = Coor;

    fn add(self, rhs: &Coor) -> Coor {
        Coor(self.0.symmetric_difference(&rhs.0).copied().collect())
    }
}

impl Add<&Coor> for Coor {
    type Output = Coor;

    fn add(mut self, rhs: &Coor) -> Coor {
        self += rhs;
        self
    }
}

impl AddAssign<&Coor> for Coor {
    fn add_assign(&mut self, rhs: &Coor) {
        for m in &rhs.0 {
            self.toggle(*m);
        }
    }
}

impl std::fmt::Debug for Coor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.0.iter()).finish()
    }
}
