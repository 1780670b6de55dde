// Degree-32 coefficient extraction (e known, a partially known).
//
// Round-5 products keep only keys of degree 16: the target has degree 32,
// so each half of the final multiplication must contribute exactly half of
// it. Round 6 then pairs every key with its complement in the target.

use itertools::Itertools;
use rayon::prelude::*;

use crate::algebra::coor::Coor;
use crate::algebra::monom::BANK_A;
use crate::algebra::poly_map::PolyMap;
use crate::cube::column_bit;
use crate::extraction::pair_products_for_column;
use crate::trails::TRAILS;

/// Partial round-5 product of two coordinate maps: all key pairs are formed,
/// only degree-16 results are kept, and coefficients multiply unfiltered.
pub fn multiply_maps_s5(p: &PolyMap, q: &PolyMap) -> PolyMap {
    let mut product = PolyMap::new();
    for (&k1, c1) in p {
        for (&k2, c2) in q {
            let key = k1 | k2;
            if key.count_ones() == 16 {
                let term = c1.mul_filtered(c2, |_| true);
                *product.entry(key).or_default() += &term;
            }
        }
    }
    product.retain(|_, coefficient| !coefficient.is_empty());
    product
}

/// Coefficient of `target` in the round-6 product of two degree-16 maps.
/// Every key of one map is paired with its complement in the other; the
/// smaller map drives the loop.
pub fn multiply_maps_s6(p: &PolyMap, q: &PolyMap, target: u64) -> Coor {
    let (outer, inner) = if q.len() < p.len() { (q, p) } else { (p, q) };
    let mut accumulator = Coor::zero();
    for (&key, coefficient) in outer {
        let complement = !key & target;
        if let Some(other) = inner.get(&complement) {
            accumulator += &coefficient.mul_filtered(other, |_| true);
        }
    }
    accumulator
}

/// Coefficient of `target` in output coordinate (0, col) after round 6:
/// the 22 pair-products once, then the XOR of every trail's contribution.
pub fn recover_coefficient(col: usize, l4: &[PolyMap], target: u64) -> Coor {
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
        .reduce(Coor::zero, |lhs, rhs| lhs + &rhs)
}

/// Renders a coefficient as a sum of a_i products; the empty polynomial is
/// "0" and the lone constant monomial is "1".
pub fn render_coefficient(coefficient: &Coor) -> String {
    if coefficient.is_empty() {
        return "0".to_string();
    }
    coefficient
        .iter()
        .map(|m| {
            let factors: Vec<String> = (0..64)
                .filter(|&j| column_bit(m.bank(BANK_A), j))
                .map(|j| format!("a{j}"))
                .collect();
            if factors.is_empty() {
                "1".to_string()
            } else {
                factors.join("*")
            }
        })
        .join(" + ")
}
