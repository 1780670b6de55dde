// Degree-31 coefficient extraction (a and e known, b and c unknown).
//
// Round-5 keys of degree 15 or 16 can still cover the degree-31 target.
// Every round-4 factor is either degree 7 (carrying the open coefficient)
// or degree 8 (carrying the constant 1), so coefficient multiplication
// reduces to selecting the non-trivial side.

use rayon::prelude::*;
use std::collections::HashMap;

use crate::algebra::coefficient::CompactCoeff;
use crate::algebra::poly_map::CompactMap;
use crate::extraction::pair_products_for_column;
use crate::trails::TRAILS;

/// Partial round-5 product of two degree-{7,8} maps, keeping keys of degree
/// at least 15.
pub fn multiply_maps_s5(p: &CompactMap, q: &CompactMap) -> CompactMap {
    let mut product = CompactMap::new();
    for (&k1, c1) in p {
        let first_is_open = k1.count_ones() == 7;
        for (&k2, c2) in q {
            let key = k1 | k2;
            if key.count_ones() >= 15 {
                // At most one factor has degree 7 (two of them overlap in at
                // most 14 columns), so the other coefficient is constant 1.
                let coefficient = if first_is_open { c1 } else { c2 };
                *product.entry(key).or_default() += coefficient;
            }
        }
    }
    product.retain(|_, coefficient| !coefficient.is_zero());
    product
}

/// Coefficient of the degree-31 `target` in the round-6 product of two
/// degree-{15,16} maps.
///
/// A degree-15 key pairs with its exact degree-16 complement. A degree-16
/// key pairs either with its degree-15 complement, or with a degree-16
/// covering key sharing exactly one column; the shared column collapses
/// under idempotency and both coefficients are then the constant 1.
pub fn multiply_maps_s6(p: &CompactMap, q: &CompactMap, target: u64) -> CompactCoeff {
    let (outer, inner) = if q.len() < p.len() { (q, p) } else { (p, q) };
    let mut accumulator = CompactCoeff::ZERO;
    for (&key, coefficient) in outer {
        let subleading = key.count_ones() == 15;
        let complement = !key & target;
        if let Some(other) = inner.get(&complement) {
            accumulator += if subleading { coefficient } else { other };
        }
        if !subleading {
            for bit in 0..64 {
                let single = 1u64 << bit;
                if key & single != 0 {
                    if let Some(covering) = inner.get(&(complement | single)) {
                        if covering.has_constant() {
                            accumulator += CompactCoeff::ONE;
                        }
                    }
                }
            }
        }
    }
    accumulator
}

/// Coefficient of `target` in output coordinate (0, col) after round 6.
pub fn recover_coefficient(col: usize, l4: &[CompactMap], target: u64) -> CompactCoeff {
    let products = pair_products_for_column(l4, col, multiply_maps_s5);
    TRAILS
        .par_iter()
        .filter_map(|(first, second)| {
            let p = &products[first];
            let q = &products[second];
            if p.is_empty() || q.is_empty() {
                return None;
            }
            Some(multiply_maps_s6(p, q, target))
        })
        .reduce(
            || CompactCoeff::ZERO,
            |mut lhs, rhs| {
                lhs += rhs;
                lhs
            },
        )
}

/// Row pairs multiplied by the catalogued products.
const ROW_PAIRS: [(usize, usize); 6] = [(0, 1), (1, 2), (1, 3), (1, 4), (2, 3), (3, 4)];

/// All 64 coefficients at once. Every column's six row-pair products stay
/// resident simultaneously, trading memory for wall-clock; the per-column
/// path is the low-memory default.
pub fn recover_all_columns(l4: &[CompactMap], target: u64) -> Vec<CompactCoeff> {
    let tables: Vec<HashMap<(usize, usize), CompactMap>> = (0..64usize)
        .into_par_iter()
        .map(|j| {
            ROW_PAIRS
                .iter()
                .map(|&(y1, y2)| {
                    ((y1, y2), multiply_maps_s5(&l4[y1 * 64 + j], &l4[y2 * 64 + j]))
                })
                .collect()
        })
        .collect();

    (0..64)
        .map(|col| {
            TRAILS
                .par_iter()
                .filter_map(|(first, second)| {
                    let p = &tables[(first.offset + col) % 64][&first.rows];
                    let q = &tables[(second.offset + col) % 64][&second.rows];
                    if p.is_empty() || q.is_empty() {
                        return None;
                    }
                    Some(multiply_maps_s6(p, q, target))
                })
                .reduce(
                    || CompactCoeff::ZERO,
                    |mut lhs, rhs| {
                        lhs += rhs;
                        lhs
                    },
                )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cube::column_mask;

    fn key_of(columns: &[usize]) -> u64 {
        columns.iter().fold(0, |acc, &j| acc | column_mask(j))
    }

    fn open(word_index: usize, col: usize) -> CompactCoeff {
        let mut coefficient = CompactCoeff::ZERO;
        coefficient.0[word_index] = column_mask(col);
        coefficient
    }

    #[test]
    fn test_s5_selects_open_coefficient() {
        let deg7 = key_of(&(0..7).collect::<Vec<_>>());
        let deg8 = key_of(&(7..15).collect::<Vec<_>>());
        let mut p = CompactMap::new();
        p.insert(deg7, open(2, 40)); // b40
        let mut q = CompactMap::new();
        q.insert(deg8, CompactCoeff::ONE);
        let product = multiply_maps_s5(&p, &q);
        assert_eq!(product.len(), 1);
        assert_eq!(product[&(deg7 | deg8)], open(2, 40));
        // Swapped argument order selects the same coefficient.
        let swapped = multiply_maps_s5(&q, &p);
        assert_eq!(swapped[&(deg7 | deg8)], open(2, 40));
    }

    #[test]
    fn test_s5_drops_low_degree_products() {
        let deg7a = key_of(&(0..7).collect::<Vec<_>>());
        let deg7b = key_of(&(3..10).collect::<Vec<_>>());
        let mut p = CompactMap::new();
        p.insert(deg7a, open(3, 1));
        let mut q = CompactMap::new();
        q.insert(deg7b, open(3, 2));
        assert!(multiply_maps_s5(&p, &q).is_empty());
    }

    #[test]
    fn test_s6_complement_lookup() {
        let target = key_of(&(0..31).collect::<Vec<_>>());
        let deg15 = key_of(&(0..15).collect::<Vec<_>>());
        let deg16 = key_of(&(15..31).collect::<Vec<_>>());
        let mut p = CompactMap::new();
        p.insert(deg15, open(1, 9)); // b9*c9
        let mut q = CompactMap::new();
        q.insert(deg16, CompactCoeff::ONE);
        assert_eq!(multiply_maps_s6(&p, &q, target), open(1, 9));
    }

    #[test]
    fn test_s6_covering_pairs() {
        // Two degree-16 keys overlapping in exactly column 0 cover the
        // degree-31 target; the contribution is the constant 1.
        let target = key_of(&(0..31).collect::<Vec<_>>());
        let first = key_of(&(0..16).collect::<Vec<_>>());
        let second = key_of(&(0..1).chain(16..31).collect::<Vec<_>>());
        let mut p = CompactMap::new();
        p.insert(first, CompactCoeff::ONE);
        let mut q = CompactMap::new();
        q.insert(second, CompactCoeff::ONE);
        assert_eq!(multiply_maps_s6(&p, &q, target), CompactCoeff::ONE);
        // A second covering with a different shared column makes the
        // contributions cancel.
        q.insert(
            key_of(&(1..2).chain(16..31).collect::<Vec<_>>()),
            CompactCoeff::ONE,
        );
        assert!(multiply_maps_s6(&p, &q, target).is_zero());
    }

    #[test]
    fn test_row_pairs_cover_catalogue() {
        for product in crate::trails::PAIR_PRODUCTS {
            assert!(ROW_PAIRS.contains(&product.rows));
        }
    }
}
