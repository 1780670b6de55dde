// The F[v][rest] view of the state after round 4: every coordinate becomes a
// map from its public-variable monomial to the coefficient in the remaining
// banks.

use std::collections::BTreeMap;

use rayon::prelude::*;

use super::coefficient::CompactCoeff;
use super::coor::Coor;
use super::state::SymbolicState;

/// Coefficient map of one coordinate; keys are bank-0 masks. A key is
/// present iff its coefficient is non-zero.
pub type PolyMap = BTreeMap<u64, Coor>;

/// Phase-3 variant with compact coefficients; same key invariant.
pub type CompactMap = BTreeMap<u64, CompactCoeff>;

/// Splits one coordinate by public monomial. Residues drop their bank-0
/// word; keys whose coefficient cancels to zero are removed.
pub fn coor_to_poly_map(coordinate: &Coor) -> PolyMap {
    let mut map = PolyMap::new();
    for m in coordinate.iter() {
        map.entry(m.bank(0)).or_default().toggle(m.residue());
    }
    map.retain(|_, coefficient| !coefficient.is_empty());
    map
}

/// Compact conversion for the degree-31 recovery.
pub fn coor_to_compact_map(coordinate: &Coor) -> CompactMap {
    let mut map = CompactMap::new();
    for m in coordinate.iter() {
        map.entry(m.bank(0))
            .or_default()
            .toggle_residue(&m.residue());
    }
    map.retain(|_, coefficient| !coefficient.is_zero());
    // Maximal-degree keys come from two disjoint pure products, so their
    // coefficient can only be the constant; the round-6 covering lookup
    // depends on this.
    debug_assert!(map
        .iter()
        .filter(|(key, _)| key.count_ones() == 8)
        .all(|(_, coefficient)| *coefficient == CompactCoeff::ONE));
    map
}

/// Converts the whole post-round-4 state, one map per coordinate.
pub fn state_to_poly_maps(state: &SymbolicState) -> Vec<PolyMap> {
    state.coords().par_iter().map(coor_to_poly_map).collect()
}

/// Compact conversion of the whole state.
pub fn state_to_compact_maps(state: &SymbolicState) -> Vec<CompactMap> {
    state.coords().par_iter().map(coor_to_compact_map).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algebra::monom::{Monom, BANK_A, BANK_B, BANK_PUBLIC};

    fn v(col: usize) -> Monom {
        Monom::variable(BANK_PUBLIC, col)
    }

    #[test]
    fn test_split_groups_by_public_monomial() {
        // v0*a1 + v0*a2 + v3 -> {v0: a1 + a2, v3: 1}
        let coordinate = Coor::from_monomials([
            v(0).product(&Monom::variable(BANK_A, 1)),
            v(0).product(&Monom::variable(BANK_A, 2)),
            v(3),
        ]);
        let map = coor_to_poly_map(&coordinate);
        assert_eq!(map.len(), 2);
        let coefficient = &map[&v(0).bank(0)];
        assert_eq!(coefficient.len(), 2);
        assert!(coefficient.contains(&Monom::variable(BANK_A, 1)));
        assert_eq!(map[&v(3).bank(0)], Coor::one());
    }

    #[test]
    fn test_cancelled_keys_are_pruned() {
        // Both monomials share key v0 and the same residue, so the
        // coefficient cancels and the key must disappear.
        let mut coordinate = Coor::zero();
        coordinate.toggle(v(0).product(&Monom::variable(BANK_A, 1)));
        let map = coor_to_poly_map(&(&coordinate + &coordinate));
        assert!(map.is_empty());
        // Every surviving key carries a non-empty coefficient.
        let map = coor_to_poly_map(&Coor::from_monomials([v(0), v(1)]));
        assert!(map.values().all(|c| !c.is_empty()));
    }

    #[test]
    fn test_compact_conversion() {
        let coordinate = Coor::from_monomials([
            v(0).product(&Monom::variable(BANK_B, 9)),
            v(0).product(&Monom::ONE),
            v(1),
        ]);
        let map = coor_to_compact_map(&coordinate);
        assert_eq!(map[&v(0).bank(0)].render(), "1 + b9");
        assert_eq!(map[&v(1).bank(0)], CompactCoeff::ONE);
    }
}
