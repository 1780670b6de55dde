// Cube handling: a cube is a set of public-variable columns of row 0,
// stored both as ordered indices and as the 64-bit mask used in files.

use rand::Rng;

/// Mask with only column `col` set.
pub fn column_mask(col: usize) -> u64 {
    debug_assert!(col < 64);
    1u64 << (63 - col)
}

/// Value of column `col` in `word`.
pub fn column_bit(word: u64, col: usize) -> bool {
    word & column_mask(col) != 0
}

/// A chosen set of distinct cube columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cube {
    indices: Vec<usize>,
}

impl Cube {
    /// Builds a cube from column indices; duplicates collapse and the order
    /// is normalised.
    pub fn new(mut indices: Vec<usize>) -> Self {
        assert!(indices.iter().all(|&j| j < 64), "cube columns must be in 0..64");
        indices.sort_unstable();
        indices.dedup();
        Cube { indices }
    }

    /// Builds a cube from its mask representation.
    pub fn from_mask(mask: u64) -> Self {
        Cube {
            indices: (0..64).filter(|&j| column_bit(mask, j)).collect(),
        }
    }

    /// Mask with every cube column set.
    pub fn mask(&self) -> u64 {
        self.indices.iter().fold(0, |acc, &j| acc | column_mask(j))
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn contains(&self, col: usize) -> bool {
        self.indices.binary_search(&col).is_ok()
    }

    /// Row-0 word of the cube subset with incidence vector `subset`: bit i
    /// of `subset` selects the i-th cube column.
    pub fn subset_mask(&self, subset: u64) -> u64 {
        let mut mask = 0;
        for (i, &col) in self.indices.iter().enumerate() {
            if (subset >> i) & 1 == 1 {
                mask |= column_mask(col);
            }
        }
        mask
    }
}

/// Uniformly random 64-bit word.
pub fn random_word(rng: &mut impl Rng) -> u64 {
    rng.gen()
}

/// Random 64-bit word of Hamming weight `weight`.
pub fn random_word_of_weight(rng: &mut impl Rng, weight: u32) -> u64 {
    assert!(weight <= 64);
    let mut word = 0u64;
    while word.count_ones() < weight {
        word |= 1u64 << rng.gen_range(0..64);
    }
    word
}

/// Uniformly random set column of `mask`, or None when the mask is empty.
pub fn random_column_of(rng: &mut impl Rng, mask: u64) -> Option<usize> {
    let population = mask.count_ones();
    if population == 0 {
        return None;
    }
    let pick = rng.gen_range(0..population) as usize;
    (0..64).filter(|&j| column_bit(mask, j)).nth(pick)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_column_layout_is_big_endian() {
        assert_eq!(column_mask(0), 1 << 63);
        assert_eq!(column_mask(63), 1);
        assert!(column_bit(0x8000000000000001, 0));
        assert!(column_bit(0x8000000000000001, 63));
        assert!(!column_bit(0x8000000000000001, 1));
    }

    #[test]
    fn test_cube_mask_round_trip() {
        let cube = Cube::new(vec![0, 5, 17, 63]);
        assert_eq!(Cube::from_mask(cube.mask()), cube);
        assert_eq!(cube.len(), 4);
        assert!(cube.contains(17));
        assert!(!cube.contains(16));
    }

    #[test]
    fn test_new_normalises() {
        assert_eq!(Cube::new(vec![9, 3, 9, 1]), Cube::new(vec![1, 3, 9]));
    }

    #[test]
    fn test_subset_masks() {
        let cube = Cube::new(vec![3, 17]);
        assert_eq!(cube.subset_mask(0b00), 0);
        assert_eq!(cube.subset_mask(0b01), column_mask(3));
        assert_eq!(cube.subset_mask(0b10), column_mask(17));
        assert_eq!(cube.subset_mask(0b11), column_mask(3) | column_mask(17));
    }

    #[test]
    fn test_random_word_of_weight() {
        let mut rng = StdRng::seed_from_u64(1);
        for weight in [0, 1, 13, 64] {
            assert_eq!(random_word_of_weight(&mut rng, weight).count_ones(), weight);
        }
    }

    #[test]
    fn test_random_column_stays_in_mask() {
        let mut rng = StdRng::seed_from_u64(2);
        let mask = 0x8001000000400000;
        for _ in 0..50 {
            let col = random_column_of(&mut rng, mask).unwrap();
            assert!(column_bit(mask, col));
        }
        assert_eq!(random_column_of(&mut rng, 0), None);
    }
}
