// Trail catalogue for the last two rounds.
//
// A pair-product names two state rows multiplied by the round-5 S-box at a
// common column offset; a trail is an ordered pair of such products whose
// combined rotations land in row 0 after round 6. Both tables are exhaustive
// for the 6-round attack against row 0 and must not be edited piecemeal.

/// One row-pair product at a fixed column offset from the extracted column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PairProduct {
    /// Column offset added to the output column (mod 64).
    pub offset: usize,
    /// The two state rows being multiplied, lower row first.
    pub rows: (usize, usize),
}

impl PairProduct {
    /// Row-major indices of the two round-4 coordinates entering this
    /// product when extracting output column `col`.
    pub fn coordinate_indices(&self, col: usize) -> (usize, usize) {
        let shifted = (self.offset + col) % 64;
        (self.rows.0 * 64 + shifted, self.rows.1 * 64 + shifted)
    }
}

const fn p(offset: usize, lo: usize, hi: usize) -> PairProduct {
    PairProduct { offset, rows: (lo, hi) }
}

/// Pair-products appearing in at least one trail.
pub const PAIR_PRODUCTS: [PairProduct; 22] = [
    p(0, 1, 2), p(0, 1, 3), p(0, 2, 3), p(0, 3, 4), p(3, 1, 2), p(3, 1, 3),
    p(3, 2, 3), p(23, 0, 1), p(23, 1, 4), p(25, 1, 2), p(25, 1, 3), p(25, 2, 3),
    p(36, 0, 1), p(36, 1, 2), p(36, 1, 4), p(45, 0, 1), p(45, 1, 2), p(45, 1, 4),
    p(57, 0, 1), p(57, 1, 4), p(58, 3, 4), p(63, 3, 4),
];

/// Trails of four round-4 coordinates reaching output row 0 through the
/// round-5 products and the round-6 multiplication.
pub const TRAILS: [(PairProduct, PairProduct); 121] = [
    (p(25, 2, 3), p(63, 3, 4)), (p(25, 2, 3), p(58, 3, 4)), (p(0, 3, 4), p(25, 2, 3)),
    (p(3, 2, 3), p(63, 3, 4)), (p(58, 3, 4), p(3, 2, 3)), (p(0, 3, 4), p(3, 2, 3)),
    (p(0, 2, 3), p(63, 3, 4)), (p(0, 2, 3), p(58, 3, 4)), (p(57, 1, 4), p(25, 2, 3)),
    (p(57, 1, 4), p(3, 2, 3)), (p(0, 2, 3), p(57, 1, 4)), (p(25, 2, 3), p(45, 1, 4)),
    (p(25, 2, 3), p(45, 1, 2)), (p(3, 2, 3), p(45, 1, 4)), (p(3, 2, 3), p(45, 1, 2)),
    (p(0, 2, 3), p(45, 1, 4)), (p(0, 2, 3), p(45, 1, 2)), (p(25, 2, 3), p(36, 1, 4)),
    (p(25, 2, 3), p(36, 1, 2)), (p(3, 2, 3), p(36, 1, 4)), (p(3, 2, 3), p(36, 1, 2)),
    (p(0, 2, 3), p(36, 1, 4)), (p(0, 2, 3), p(36, 1, 2)), (p(25, 1, 3), p(63, 3, 4)),
    (p(25, 1, 3), p(58, 3, 4)), (p(0, 3, 4), p(25, 1, 3)), (p(25, 1, 2), p(63, 3, 4)),
    (p(25, 1, 2), p(58, 3, 4)), (p(0, 3, 4), p(25, 1, 2)), (p(25, 1, 3), p(57, 1, 4)),
    (p(25, 1, 2), p(57, 1, 4)), (p(25, 1, 3), p(45, 1, 4)), (p(25, 1, 3), p(45, 1, 2)),
    (p(25, 1, 2), p(45, 1, 4)), (p(25, 1, 2), p(45, 1, 2)), (p(25, 1, 3), p(36, 1, 4)),
    (p(25, 1, 3), p(36, 1, 2)), (p(25, 1, 2), p(36, 1, 4)), (p(25, 1, 2), p(36, 1, 2)),
    (p(25, 2, 3), p(23, 1, 4)), (p(3, 2, 3), p(23, 1, 4)), (p(0, 2, 3), p(23, 1, 4)),
    (p(25, 1, 3), p(23, 1, 4)), (p(25, 1, 2), p(23, 1, 4)), (p(3, 1, 3), p(63, 3, 4)),
    (p(58, 3, 4), p(3, 1, 3)), (p(0, 3, 4), p(3, 1, 3)), (p(3, 1, 2), p(63, 3, 4)),
    (p(58, 3, 4), p(3, 1, 2)), (p(0, 3, 4), p(3, 1, 2)), (p(57, 1, 4), p(3, 1, 3)),
    (p(57, 1, 4), p(3, 1, 2)), (p(3, 1, 3), p(45, 1, 4)), (p(3, 1, 3), p(45, 1, 2)),
    (p(3, 1, 2), p(45, 1, 4)), (p(3, 1, 2), p(45, 1, 2)), (p(3, 1, 3), p(36, 1, 4)),
    (p(3, 1, 3), p(36, 1, 2)), (p(3, 1, 2), p(36, 1, 4)), (p(3, 1, 2), p(36, 1, 2)),
    (p(3, 1, 3), p(23, 1, 4)), (p(3, 1, 2), p(23, 1, 4)), (p(0, 1, 3), p(63, 3, 4)),
    (p(0, 1, 3), p(58, 3, 4)), (p(0, 1, 2), p(63, 3, 4)), (p(0, 1, 2), p(58, 3, 4)),
    (p(0, 1, 2), p(0, 3, 4)), (p(0, 1, 2), p(25, 2, 3)), (p(0, 1, 2), p(3, 2, 3)),
    (p(0, 1, 3), p(57, 1, 4)), (p(0, 1, 2), p(57, 1, 4)), (p(0, 1, 3), p(45, 1, 4)),
    (p(0, 1, 3), p(45, 1, 2)), (p(0, 1, 2), p(45, 1, 4)), (p(0, 1, 2), p(45, 1, 2)),
    (p(0, 1, 3), p(36, 1, 4)), (p(0, 1, 3), p(36, 1, 2)), (p(0, 1, 2), p(36, 1, 4)),
    (p(0, 1, 2), p(36, 1, 2)), (p(0, 1, 2), p(25, 1, 3)), (p(0, 1, 2), p(25, 1, 2)),
    (p(0, 1, 3), p(23, 1, 4)), (p(0, 1, 2), p(23, 1, 4)), (p(0, 1, 2), p(3, 1, 3)),
    (p(0, 1, 2), p(3, 1, 2)), (p(57, 0, 1), p(25, 2, 3)), (p(57, 0, 1), p(3, 2, 3)),
    (p(0, 2, 3), p(57, 0, 1)), (p(57, 0, 1), p(25, 1, 3)), (p(57, 0, 1), p(25, 1, 2)),
    (p(57, 0, 1), p(3, 1, 3)), (p(57, 0, 1), p(3, 1, 2)), (p(0, 1, 3), p(57, 0, 1)),
    (p(0, 1, 2), p(57, 0, 1)), (p(25, 2, 3), p(45, 0, 1)), (p(3, 2, 3), p(45, 0, 1)),
    (p(0, 2, 3), p(45, 0, 1)), (p(25, 1, 3), p(45, 0, 1)), (p(25, 1, 2), p(45, 0, 1)),
    (p(3, 1, 3), p(45, 0, 1)), (p(3, 1, 2), p(45, 0, 1)), (p(0, 1, 3), p(45, 0, 1)),
    (p(0, 1, 2), p(45, 0, 1)), (p(25, 2, 3), p(36, 0, 1)), (p(3, 2, 3), p(36, 0, 1)),
    (p(0, 2, 3), p(36, 0, 1)), (p(25, 1, 3), p(36, 0, 1)), (p(25, 1, 2), p(36, 0, 1)),
    (p(3, 1, 3), p(36, 0, 1)), (p(3, 1, 2), p(36, 0, 1)), (p(0, 1, 3), p(36, 0, 1)),
    (p(0, 1, 2), p(36, 0, 1)), (p(25, 2, 3), p(23, 0, 1)), (p(3, 2, 3), p(23, 0, 1)),
    (p(0, 2, 3), p(23, 0, 1)), (p(25, 1, 3), p(23, 0, 1)), (p(25, 1, 2), p(23, 0, 1)),
    (p(3, 1, 3), p(23, 0, 1)), (p(3, 1, 2), p(23, 0, 1)), (p(0, 1, 3), p(23, 0, 1)),
    (p(0, 1, 2), p(23, 0, 1)),
];
