// Rounds 5 and 6, restricted to the trail catalogue: instead of expanding
// two more S-box layers, only the catalogued pair-products are formed and
// only the coefficient of the target monomial is extracted from each trail.

pub mod compact;
pub mod dense;

use std::collections::HashMap;

use rayon::prelude::*;

use crate::trails::{PairProduct, PAIR_PRODUCTS};

/// Computes every catalogued pair-product for output column `col`. Each
/// product touches two round-4 coordinates shifted by the product's offset;
/// the 22 tasks are independent.
pub(crate) fn pair_products_for_column<M, R, P>(
    maps: &[M],
    col: usize,
    multiply: P,
) -> HashMap<PairProduct, R>
where
    M: Sync,
    R: Send,
    P: Fn(&M, &M) -> R + Sync,
{
    PAIR_PRODUCTS
        .par_iter()
        .map(|product| {
            let (first, second) = product.coordinate_indices(col);
            (*product, multiply(&maps[first], &maps[second]))
        })
        .collect()
}
