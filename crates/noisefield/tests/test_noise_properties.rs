//! Structural properties of the simplex evaluators: corner ordering,
//! continuity, and agreement with a sort-based formulation.

use std::array;

use noisefield::gradient::{GRAD3, GRAD4};
use noisefield::math::{F3, F4, G3, G4};
use noisefield::simplex::{pentachoron_corners, tetrahedron_corners};
use noisefield::{DeterministicRng, PermutationTable, SimplexNoise};

/// Every ordering of `values`, generated by Heap's algorithm.
fn permutations<const N: usize>(values: [f64; N]) -> Vec<[f64; N]> {
    fn heap<const N: usize>(k: usize, a: &mut [f64; N], out: &mut Vec<[f64; N]>) {
        if k == 1 {
            out.push(*a);
            return;
        }
        heap(k - 1, a, out);
        for i in 0..k - 1 {
            if k % 2 == 0 {
                a.swap(i, k - 1);
            } else {
                a.swap(0, k - 1);
            }
            heap(k - 1, a, out);
        }
    }

    let mut a = values;
    let mut out = Vec::new();
    heap(N, &mut a, &mut out);
    out
}

/// Axis indices sorted by descending value.
fn descending_axes<const N: usize>(values: &[f64; N]) -> [usize; N] {
    let mut order: [usize; N] = array::from_fn(|a| a);
    order.sort_by(|&a, &b| values[b].total_cmp(&values[a]));
    order
}

/// Corner offsets after stepping along the `steps` largest axes.
fn expected_corner<const N: usize>(order: &[usize; N], steps: usize) -> [usize; N] {
    let mut corner = [0; N];
    for &axis in &order[..steps] {
        corner[axis] = 1;
    }
    corner
}

/// Maps skewed-space coordinates `cell + u` back to input space.
fn unskew<const N: usize>(cell: [i64; N], u: [f64; N], g: f64) -> [f64; N] {
    let skewed: [f64; N] = array::from_fn(|a| cell[a] as f64 + u[a]);
    let sum: f64 = skewed.iter().sum();
    skewed.map(|v| v - g * sum)
}

// ============================================================================
// Sort-Based Reference Evaluators
// ============================================================================

fn reference_3d(perm: &PermutationTable, p: [f64; 3]) -> f64 {
    let s = (p[0] + p[1] + p[2]) * F3;
    let cell: [i64; 3] = p.map(|v| (v + s).floor() as i64);
    let t = (cell[0] + cell[1] + cell[2]) as f64 * G3;
    let local: [f64; 3] = array::from_fn(|a| p[a] - (cell[a] as f64 - t));
    let order = descending_axes(&local);
    let wrapped = cell.map(|c| c.rem_euclid(256) as usize);
    let table = perm.expanded();

    let mut total = 0.0;
    for step in 0..=3 {
        let corner = expected_corner(&order, step);
        let offset: [f64; 3] =
            array::from_fn(|a| local[a] - corner[a] as f64 + step as f64 * G3);
        let inner = table[wrapped[2] + corner[2]] as usize;
        let middle = table[wrapped[1] + corner[1] + inner] as usize;
        let hash = table[wrapped[0] + corner[0] + middle] as usize % 12;
        let g = GRAD3[hash];

        let r = 0.6 - offset.iter().map(|o| o * o).sum::<f64>();
        if r > 0.0 {
            let dot: f64 = (0..3).map(|a| f64::from(g[a]) * offset[a]).sum();
            total += r * r * r * r * dot;
        }
    }
    32.0 * total
}

fn reference_4d(perm: &PermutationTable, p: [f64; 4]) -> f64 {
    let s = (p[0] + p[1] + p[2] + p[3]) * F4;
    let cell: [i64; 4] = p.map(|v| (v + s).floor() as i64);
    let t = (cell[0] + cell[1] + cell[2] + cell[3]) as f64 * G4;
    let local: [f64; 4] = array::from_fn(|a| p[a] - (cell[a] as f64 - t));
    let order = descending_axes(&local);
    let wrapped = cell.map(|c| c.rem_euclid(256) as usize);
    let table = perm.expanded();

    let mut total = 0.0;
    for step in 0..=4 {
        let corner = expected_corner(&order, step);
        let offset: [f64; 4] =
            array::from_fn(|a| local[a] - corner[a] as f64 + step as f64 * G4);
        let mut hash = 0;
        for axis in (0..4).rev() {
            hash = table[wrapped[axis] + corner[axis] + hash] as usize;
        }
        let g = GRAD4[hash % 32];

        let r = 0.6 - offset.iter().map(|o| o * o).sum::<f64>();
        if r > 0.0 {
            let dot: f64 = (0..4).map(|a| f64::from(g[a]) * offset[a]).sum();
            total += r * r * r * r * dot;
        }
    }
    27.0 * total
}

// ============================================================================
// Corner Ordering
// ============================================================================

#[test]
fn test_all_tetrahedron_orderings() {
    let orderings = permutations([0.15, 0.45, 0.75]);
    assert_eq!(orderings.len(), 6);

    for u in orderings {
        let p = unskew([3, -2, 5], u, G3);
        let s = (p[0] + p[1] + p[2]) * F3;
        let cell = p.map(|v| (v + s).floor() as i64);
        assert_eq!(cell, [3, -2, 5], "cell for {u:?}");

        let t = (cell[0] + cell[1] + cell[2]) as f64 * G3;
        let local: [f64; 3] = array::from_fn(|a| p[a] - (cell[a] as f64 - t));
        let order = descending_axes(&u);
        assert_eq!(
            tetrahedron_corners(local[0], local[1], local[2]),
            [expected_corner(&order, 1), expected_corner(&order, 2)],
            "corners for {u:?}"
        );
    }
}

#[test]
fn test_all_pentachoron_orderings() {
    let orderings = permutations([0.1, 0.3, 0.5, 0.7]);
    assert_eq!(orderings.len(), 24);

    for u in orderings {
        let p = unskew([3, -2, 5, -7], u, G4);
        let s = (p[0] + p[1] + p[2] + p[3]) * F4;
        let cell = p.map(|v| (v + s).floor() as i64);
        assert_eq!(cell, [3, -2, 5, -7], "cell for {u:?}");

        let t = (cell[0] + cell[1] + cell[2] + cell[3]) as f64 * G4;
        let local: [f64; 4] = array::from_fn(|a| p[a] - (cell[a] as f64 - t));
        let order = descending_axes(&u);
        assert_eq!(
            pentachoron_corners(local[0], local[1], local[2], local[3]),
            [
                expected_corner(&order, 1),
                expected_corner(&order, 2),
                expected_corner(&order, 3)
            ],
            "corners for {u:?}"
        );
    }
}

// ============================================================================
// Agreement With The Sort-Based Formulation
// ============================================================================

#[test]
fn test_value_3d_matches_sorted_reference() {
    for noise in [SimplexNoise::default(), SimplexNoise::with_seed(31)] {
        for u in permutations([0.15, 0.45, 0.75]) {
            let p = unskew([3, -2, 5], u, G3);
            let actual = noise.value_3d(p[0], p[1], p[2]);
            let expected = reference_3d(noise.permutation(), p);
            assert!((actual - expected).abs() < 1e-12, "{p:?}: {actual} vs {expected}");
        }

        let mut rng = DeterministicRng::new(303);
        for _ in 0..2_000 {
            let p: [f64; 3] = array::from_fn(|_| rng.gen_range(-40.0..40.0));
            let actual = noise.value_3d(p[0], p[1], p[2]);
            let expected = reference_3d(noise.permutation(), p);
            assert!((actual - expected).abs() < 1e-12, "{p:?}: {actual} vs {expected}");
        }
    }
}

#[test]
fn test_value_4d_matches_sorted_reference() {
    for noise in [SimplexNoise::default(), SimplexNoise::with_seed(31)] {
        for u in permutations([0.1, 0.3, 0.5, 0.7]) {
            let p = unskew([3, -2, 5, -7], u, G4);
            let actual = noise.value_4d(p[0], p[1], p[2], p[3]);
            let expected = reference_4d(noise.permutation(), p);
            assert!((actual - expected).abs() < 1e-12, "{p:?}: {actual} vs {expected}");
        }

        let mut rng = DeterministicRng::new(404);
        for _ in 0..2_000 {
            let p: [f64; 4] = array::from_fn(|_| rng.gen_range(-40.0..40.0));
            let actual = noise.value_4d(p[0], p[1], p[2], p[3]);
            let expected = reference_4d(noise.permutation(), p);
            assert!((actual - expected).abs() < 1e-12, "{p:?}: {actual} vs {expected}");
        }
    }
}

// ============================================================================
// Continuity
// ============================================================================

/// 2D contributions vanish before reaching any neighbouring simplex, so the
/// field is Lipschitz everywhere, including across cell edges.
#[test]
fn test_2d_is_continuous() {
    const EPS: f64 = 1e-7;
    let noise = SimplexNoise::with_seed(8);
    let mut rng = DeterministicRng::new(88);

    for _ in 0..2_000 {
        let x = rng.gen_range(-64.0..64.0);
        let y = rng.gen_range(-64.0..64.0);
        let here = noise.value_2d(x, y);

        let nudged = noise.value_2d(x + EPS, y + EPS);
        assert!((nudged - here).abs() <= 50.0 * EPS, "jump near ({x}, {y})");

        // (a + e, a - e) and (a - e, a + e) sit on opposite sides of the
        // diagonal edge splitting each cell.
        let lower = noise.value_2d(x + EPS, x - EPS);
        let upper = noise.value_2d(x - EPS, x + EPS);
        assert!((lower - upper).abs() <= 50.0 * EPS, "seam jump at ({x}, {x})");
    }
}

/// With a 0.6 kernel radius, 3D and 4D corner contributions reach slightly
/// past the opposite face, so crossing an interior face drops a small tail.
#[test]
fn test_3d_face_seams_stay_small() {
    const EPS: f64 = 1e-9;
    let noise = SimplexNoise::default();
    let mut rng = DeterministicRng::new(33);
    let mut largest: f64 = 0.0;

    for _ in 0..2_000 {
        let a = rng.gen_range(-5.0..5.0);
        let b = rng.gen_range(-5.0..5.0);
        let jump = (noise.value_3d(a + EPS, a - EPS, b) - noise.value_3d(a - EPS, a + EPS, b)).abs();
        assert!(jump < 0.01, "seam jump {jump} at ({a}, {a}, {b})");
        largest = largest.max(jump);
    }

    assert!(largest > 1e-5, "expected visible seams, largest jump {largest}");
}

#[test]
fn test_4d_face_seams_stay_small() {
    const EPS: f64 = 1e-9;
    let noise = SimplexNoise::default();
    let mut rng = DeterministicRng::new(44);
    let mut largest: f64 = 0.0;

    for _ in 0..2_000 {
        let a = rng.gen_range(-5.0..5.0);
        let b = rng.gen_range(-5.0..5.0);
        let c = rng.gen_range(-5.0..5.0);
        let jump = (noise.value_4d(a + EPS, a - EPS, b, c)
            - noise.value_4d(a - EPS, a + EPS, b, c))
        .abs();
        assert!(jump < 0.01, "seam jump {jump} at ({a}, {a}, {b}, {c})");
        largest = largest.max(jump);
    }

    assert!(largest > 1e-5, "expected visible seams, largest jump {largest}");
}
