mod common;

use cellroute_lib::{estimate, Cell, CELL_SIZE};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use common::cell;

fn random_point_in(rng: &mut StdRng, cell: Cell) -> (f64, f64) {
    let (x, y) = cell.origin();
    (
        x + rng.gen::<f64>() * CELL_SIZE,
        y + rng.gen::<f64>() * CELL_SIZE,
    )
}

#[test]
fn identical_cells_estimate_zero() {
    for id in 0..=99 {
        assert_eq!(estimate(cell(id), cell(id)), 0.0, "cell {id}");
    }
}

#[test]
fn every_pair_is_finite_and_non_negative() {
    for a in 0..=99 {
        for b in 0..=99 {
            let value = estimate(cell(a), cell(b));
            assert!(value.is_finite() && value >= 0.0, "{a} -> {b}: {value}");
        }
    }
}

#[test]
fn never_exceeds_distance_between_points_in_the_cells() {
    let mut rng = StdRng::seed_from_u64(0xce11);

    for _ in 0..20_000 {
        let a = cell(rng.gen_range(0..100));
        let b = cell(rng.gen_range(0..100));
        let (ax, ay) = random_point_in(&mut rng, a);
        let (bx, by) = random_point_in(&mut rng, b);
        let actual = (ax - bx).hypot(ay - by);

        assert!(
            estimate(a, b) <= actual + 1e-9,
            "cells {a} and {b}: estimate {} above {actual}",
            estimate(a, b)
        );
    }
}

#[test]
fn bound_is_tight_at_facing_corners() {
    // The closest points of cells 0 and 22 are the corners (100, 100) and (200, 200).
    let expected = (100.0f64 * 100.0 * 2.0).sqrt();
    assert_eq!(estimate(cell(0), cell(22)), expected);
}

#[test]
fn single_digit_cells_sit_in_the_first_row() {
    assert_eq!(estimate(cell(3), cell(33)), 200.0);
    assert_eq!(estimate(cell(0), cell(9)), 800.0);
}
