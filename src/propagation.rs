// Rounds 1 to 4 of the symbolic propagation.
//
// The first round applies the true S-box; the following rounds only keep
// the quadratic part, because the degree filter would erase every
// lower-degree term a full S-box could add to the monomials of interest.

use rayon::prelude::*;

use crate::algebra::coor::Coor;
use crate::algebra::monom::Monom;
use crate::algebra::state::{SymbolicState, STATE_COORDS};
use crate::constants::{DegreeSchedule, SIGMA_ROTATIONS};

/// Symbolic S-box on one column, x0..x4 to y0..y4. `keep` filters every
/// monomial produced by a coordinate multiplication; with `quadratic` the
/// affine part of the S-box is skipped.
pub fn sbox_coordinates<F>(x: [&Coor; 5], quadratic: bool, keep: &F) -> [Coor; 5]
where
    F: Fn(&Monom) -> bool,
{
    let x2x1 = x[2].mul_filtered(x[1], keep);
    let mut y2 = x[4].mul_filtered(x[3], keep);
    let mut y3 = x[0].mul_filtered(&(x[3] + x[4]), keep);
    let mut y4 = x[1].mul_filtered(&(x[4] + x[0]), keep);
    let mut y1 = (x[2] + x[1]).mul_filtered(x[3], keep) + &x2x1;
    let mut y0 = x2x1 + &y4;

    if !quadratic {
        let x0123 = x[0] + x[1] + &(x[2] + x[3]);
        y0 += &x0123;
        y1 += &x0123;
        y1 += x[4];
        y2 += x[1];
        y2 += x[2];
        y2 += &Coor::one();
        y2 += x[4];
        y3 += &x0123;
        y3 += x[4];
        y4 += x[1];
        y4 += x[3];
        y4 += x[4];
    }

    [y0, y1, y2, y3, y4]
}

/// S-box layer over all 64 columns.
pub fn sbox_layer<F>(state: &SymbolicState, quadratic: bool, keep: &F) -> SymbolicState
where
    F: Fn(&Monom) -> bool + Sync,
{
    let columns: Vec<[Coor; 5]> = (0..64usize)
        .into_par_iter()
        .map(|j| {
            sbox_coordinates(
                [
                    state.coord(0, j),
                    state.coord(1, j),
                    state.coord(2, j),
                    state.coord(3, j),
                    state.coord(4, j),
                ],
                quadratic,
                keep,
            )
        })
        .collect();

    let mut out = SymbolicState::empty();
    for (j, column) in columns.into_iter().enumerate() {
        for (row, coordinate) in column.into_iter().enumerate() {
            *out.coord_mut(row, j) = coordinate;
        }
    }
    out
}

/// Coordinate-wise linear layer. Rotating a row right by alpha moves column
/// (j + 64 - alpha) % 64 into column j, so each output coordinate is the sum
/// of three input coordinates of the same row.
pub fn linear_layer(state: &SymbolicState) -> SymbolicState {
    let coords: Vec<Coor> = (0..STATE_COORDS)
        .into_par_iter()
        .map(|position| {
            let row = position / 64;
            let j = position % 64;
            let (alpha, beta) = SIGMA_ROTATIONS[row];
            let ja = (j + 64 - alpha as usize) % 64;
            let jb = (j + 64 - beta as usize) % 64;
            state.at(row * 64 + j) + state.at(row * 64 + ja) + state.at(row * 64 + jb)
        })
        .collect();
    SymbolicState::from_coords(coords)
}

/// One symbolic round: S-box layer then linear layer.
pub fn round<F>(state: &SymbolicState, quadratic: bool, keep: &F) -> SymbolicState
where
    F: Fn(&Monom) -> bool + Sync,
{
    linear_layer(&sbox_layer(state, quadratic, keep))
}

/// Keep-predicate accepting monomials whose public degree lies in `degrees`.
pub fn degree_in(degrees: &[u32]) -> impl Fn(&Monom) -> bool + Sync + '_ {
    move |m| degrees.contains(&m.public_degree())
}

/// Rounds 1 to 4: the true S-box once, then three filtered quadratic passes,
/// each followed by the linear layer. Returns the state after the fourth
/// linear layer.
pub fn first_four_rounds(start: &SymbolicState, schedule: &DegreeSchedule) -> SymbolicState {
    let keep_all = |_: &Monom| true;
    let state = round(start, false, &keep_all);
    println!("round 1: {} monomials", state.monomial_count());
    let state = round(&state, true, &degree_in(schedule.round2));
    println!("round 2: {} monomials", state.monomial_count());
    let state = round(&state, true, &degree_in(schedule.round3));
    println!("round 3: {} monomials", state.monomial_count());
    let state = round(&state, true, &degree_in(schedule.round4));
    println!("round 4: {} monomials", state.monomial_count());
    state
}
