use std::collections::{BTreeSet, HashSet};
use std::str::FromStr;

use super::core::{GeomResult, GeometryError};
use super::points::*;

/// Hull vertices together with the number of orientation tests spent on them.
///
/// Every call to a hull builder returns a fresh value; nothing is shared or
/// accumulated between calls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HullResult {
    pub hull: Vec<Point>,
    pub iterations: u64,
}

impl HullResult {
    /// The hull vertices as a set, ignoring traversal order
    pub fn vertex_set(&self) -> BTreeSet<Point> {
        self.hull.iter().copied().collect()
    }

    /// Whether both results describe the same hull vertices
    pub fn same_vertices(&self, other: &HullResult) -> bool {
        self.vertex_set() == other.vertex_set()
    }
}

/// Choice of hull builder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    /// Monotone chain, O(n log n)
    Fast,
    /// Brute force edge test, O(n^3)
    Slow,
}

impl Algorithm {
    /// Run the selected builder over the given points
    pub fn run(&self, points: &[Point]) -> HullResult {
        match self {
            Algorithm::Fast => find_fast_convex_hull(points),
            Algorithm::Slow => find_slow_convex_hull(points),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Algorithm::Fast => "Fast",
            Algorithm::Slow => "Slow",
        }
    }
}

impl FromStr for Algorithm {
    type Err = GeometryError;

    fn from_str(s: &str) -> GeomResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fast" => Ok(Algorithm::Fast),
            "slow" => Ok(Algorithm::Slow),
            other => Err(GeometryError::ParameterError(format!(
                "Unknown algorithm '{other}', expected 'fast' or 'slow'"
            ))),
        }
    }
}

/// Compute the convex hull of a set of points with the monotone chain algorithm.
///
/// The hull is returned counter-clockwise, starting at the lexicographically
/// smallest point. Collinear points on the boundary are dropped. Inputs with
/// two points or fewer are returned unchanged with zero iterations. The
/// iteration count is the number of orientation tests made while building
/// both chains.
///
/// Examples
/// ```rust
/// use hulllib::{find_fast_convex_hull, Point};
/// let points = vec![
///    Point::new(0, 0),
///    Point::new(10, 10),
///    Point::new(10, 0),
///    Point::new(0, 10),
///    Point::new(5, 5),
/// ];
/// let res = find_fast_convex_hull(&points);
/// assert_eq!(res.hull.len(), 4);
/// ```
pub fn find_fast_convex_hull(points: &[Point]) -> HullResult {
    if points.len() <= 2 {
        return HullResult {
            hull: points.to_vec(),
            iterations: 0,
        };
    }

    let sorted = sort_lex(points.to_vec());
    let (mut hull, lower_iters) = half_hull(sorted.iter());
    let (mut upper, upper_iters) = half_hull(sorted.iter().rev());

    // Each chain ends where the other one starts
    hull.pop();
    upper.pop();
    hull.append(&mut upper);

    if hull.len() == 2 && hull[0] == hull[1] {
        log::warn!("All {} input points coincide", points.len());
        hull.truncate(1);
    }

    let iterations = lower_iters + upper_iters;
    log::debug!(
        "Monotone chain: {} points -> {} hull vertices in {iterations} iterations",
        points.len(),
        hull.len()
    );
    HullResult { hull, iterations }
}

// Compute half a convex hull from lexicographically sorted points, counting the
// orientation tests made
fn half_hull<'a>(points: impl Iterator<Item = &'a Point>) -> (Vec<Point>, u64) {
    let mut chain: Vec<Point> = Vec::with_capacity(points.size_hint().0);
    let mut iterations = 0;

    for pt in points {
        while chain.len() >= 2 {
            iterations += 1;
            if orientation(&chain[chain.len() - 2], &chain[chain.len() - 1], pt) > 0 {
                break;
            }
            chain.pop();
        }
        chain.push(*pt);
    }
    (chain, iterations)
}

/// Compute the convex hull of a set of points by testing every directed edge.
///
/// A directed edge `i -> j` belongs to the hull when no other point lies strictly
/// to its right. The end points of such edges are collected without duplicates,
/// then every vertex but the first is sorted by polar angle around the first.
/// Fewer than three input points yield an empty hull. The iteration count is
/// the number of side tests made, including the one that ends a scan early.
///
/// Points collinear with a hull edge pass the side test and are reported as
/// hull vertices.
pub fn find_slow_convex_hull(points: &[Point]) -> HullResult {
    let n = points.len();
    if n < 3 {
        return HullResult::default();
    }

    let mut iterations: u64 = 0;
    let mut hull: Vec<Point> = Vec::new();
    let mut seen: HashSet<Point> = HashSet::new();

    for i in 0..n {
        for j in 0..n {
            if i == j {
                continue;
            }

            let mut all_on_left = true;
            for k in 0..n {
                if k == i || k == j {
                    continue;
                }
                iterations += 1;
                if orientation(&points[i], &points[j], &points[k]) < 0 {
                    all_on_left = false;
                    break;
                }
            }

            if all_on_left {
                for pt in [points[i], points[j]] {
                    if seen.insert(pt) {
                        hull.push(pt);
                    }
                }
            }
        }
    }

    if let Some((center, rest)) = hull.split_first_mut() {
        let center = *center;
        rest.sort_by(|a, b| a.angle_from(&center).total_cmp(&b.angle_from(&center)));
    }

    log::debug!(
        "Brute force: {n} points -> {} hull vertices in {iterations} iterations",
        hull.len()
    );
    HullResult { hull, iterations }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::{Rng, rng};

    fn pts(raw: &[(i32, i32)]) -> Vec<Point> {
        raw.iter().map(|&p| Point::from(p)).collect()
    }

    // Random points with coordinates in [0, extent)
    fn get_random_points(total: usize, extent: i32) -> Vec<Point> {
        let mut random = rng();
        (0..total)
            .map(|_| Point::new(random.random_range(0..extent), random.random_range(0..extent)))
            .collect()
    }

    // Distinct points on a circle of radius 1000
    fn circle_points(total: usize) -> Vec<Point> {
        let mut out: Vec<Point> = Vec::new();
        for i in 0..total {
            let theta = (i as f64) * std::f64::consts::TAU / (total as f64);
            let pt = Point::new(
                (1000.0 * theta.cos()).round() as i32,
                (1000.0 * theta.sin()).round() as i32,
            );
            if !out.contains(&pt) {
                out.push(pt);
            }
        }
        out
    }

    fn no_three_collinear(points: &[Point]) -> bool {
        let n = points.len();
        for i in 0..n {
            for j in (i + 1)..n {
                for k in (j + 1)..n {
                    if orientation(&points[i], &points[j], &points[k]) == 0 {
                        return false;
                    }
                }
            }
        }
        true
    }

    fn is_ccw_convex(hull: &[Point]) -> bool {
        let n = hull.len();
        (0..n).all(|i| orientation(&hull[i], &hull[(i + 1) % n], &hull[(i + 2) % n]) > 0)
    }

    #[test]
    fn test_fast_hull_square() {
        let points = pts(&[(0, 0), (0, 10), (10, 0), (10, 10)]);
        let res = find_fast_convex_hull(&points);

        assert_eq!(res.hull, pts(&[(0, 0), (10, 0), (10, 10), (0, 10)]));
        assert!(res.iterations > 0);
    }

    #[test]
    fn test_slow_hull_square() {
        let points = pts(&[(0, 0), (0, 10), (10, 0), (10, 10)]);
        let res = find_slow_convex_hull(&points);

        assert_eq!(res.hull.len(), 4);
        assert_eq!(res.vertex_set(), points.iter().copied().collect::<BTreeSet<Point>>());
        assert!(res.iterations > 0);
    }

    #[test]
    fn test_interior_point_excluded() {
        let points = pts(&[(0, 0), (10, 0), (0, 10), (3, 3)]);
        let expected: BTreeSet<Point> = pts(&[(0, 0), (10, 0), (0, 10)]).into_iter().collect();

        for algo in [Algorithm::Fast, Algorithm::Slow] {
            let res = algo.run(&points);
            assert_eq!(res.hull.len(), 3);
            assert_eq!(res.vertex_set(), expected);
        }
    }

    #[test]
    fn test_fast_hull_collinear() {
        let points: Vec<Point> = (0..10).map(|x| Point::new(x, 0)).collect();
        let res = find_fast_convex_hull(&points);
        assert_eq!(res.hull, pts(&[(0, 0), (9, 0)]));
    }

    #[test]
    fn test_slow_hull_collinear_keeps_every_point() {
        let points: Vec<Point> = (0..5).map(|x| Point::new(x, 2 * x)).collect();
        let res = find_slow_convex_hull(&points);
        assert_eq!(res.hull.len(), 5);
        // Every ordered pair scans the three other points in full
        assert_eq!(res.iterations, 5 * 4 * 3);
    }

    #[test]
    fn test_degenerate_inputs() {
        for raw in [vec![], vec![(1, 2)], vec![(1, 2), (-4, 0)]] {
            let points = pts(&raw);

            let fast = find_fast_convex_hull(&points);
            assert_eq!(fast.hull, points);
            assert_eq!(fast.iterations, 0);

            let slow = find_slow_convex_hull(&points);
            assert!(slow.hull.is_empty());
            assert_eq!(slow.iterations, 0);
        }
    }

    #[test]
    fn test_fast_hull_identical_points() {
        let points = pts(&[(3, 3), (3, 3), (3, 3), (3, 3)]);
        let res = find_fast_convex_hull(&points);
        assert_eq!(res.hull, pts(&[(3, 3)]));
    }

    #[test]
    fn test_fast_hull_duplicates_tolerated() {
        let points = pts(&[(0, 0), (10, 0), (0, 0), (10, 10), (0, 10), (10, 10), (5, 5)]);
        let res = find_fast_convex_hull(&points);
        assert_eq!(res.hull, pts(&[(0, 0), (10, 0), (10, 10), (0, 10)]));
    }

    #[test]
    fn test_fast_iterations_triangle() {
        // Lower chain: (5, 10) is popped when (10, 0) arrives. Upper chain: (0, 0)
        // makes a left turn on the first test.
        let points = pts(&[(0, 0), (5, 10), (10, 0)]);
        let res = find_fast_convex_hull(&points);
        assert_eq!(res.hull, pts(&[(0, 0), (10, 0), (5, 10)]));
        assert_eq!(res.iterations, 2);
    }

    #[test]
    fn test_slow_iterations_triangle() {
        // Three points: 6 ordered pairs with a single candidate each
        let points = pts(&[(0, 0), (10, 0), (0, 10)]);
        let res = find_slow_convex_hull(&points);
        assert_eq!(res.iterations, 6);
        assert_eq!(res.hull.len(), 3);
    }

    #[test]
    fn test_slow_iterations_stop_at_first_right_point() {
        // The four hull edges scan both candidates. Each diagonal stops after one or
        // two tests, as does each reversed edge: 8 + 10 = 18 of 24 possible tests.
        let points = pts(&[(0, 0), (10, 0), (10, 10), (0, 10)]);
        let res = find_slow_convex_hull(&points);
        assert_eq!(res.iterations, 18);
        assert_eq!(res.hull, points);
    }

    #[test]
    fn test_input_not_mutated() {
        let points = pts(&[(9, 9), (0, 0), (5, 1), (1, 5), (3, 3)]);
        let copy = points.clone();
        find_fast_convex_hull(&points);
        find_slow_convex_hull(&points);
        assert_eq!(points, copy);
    }

    #[test]
    fn test_slow_hull_angular_order() {
        let points = pts(&[(0, 0), (10, 0), (10, 10), (0, 10), (4, 6)]);
        let res = find_slow_convex_hull(&points);
        let center = res.hull[0];
        let angles: Vec<f64> = res.hull[1..].iter().map(|p| p.angle_from(&center)).collect();
        assert!(angles.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_slow_more_iterations_than_fast() {
        for total in [6, 8, 12, 20] {
            let points = circle_points(total);
            let fast = find_fast_convex_hull(&points);
            let slow = find_slow_convex_hull(&points);
            assert!(slow.iterations > fast.iterations);
        }
    }

    #[test]
    fn test_convex_hull_random() {
        let raw_pts = get_random_points(250, 10_000);
        let res = find_fast_convex_hull(&raw_pts);
        assert!(res.hull.len() <= raw_pts.len());
        assert!(is_ccw_convex(&res.hull));
        assert_eq!(res.hull[0], *raw_pts.iter().min().unwrap());
    }

    #[test]
    fn test_algorithm_from_str() {
        assert_eq!("fast".parse::<Algorithm>().unwrap(), Algorithm::Fast);
        assert_eq!(" SLOW ".parse::<Algorithm>().unwrap(), Algorithm::Slow);
        assert!("medium".parse::<Algorithm>().is_err());
        assert_eq!(Algorithm::Slow.label(), "Slow");
    }

    proptest! {
        #[test]
        fn builders_agree_in_general_position(
            raw in proptest::collection::vec((-500i32..500, -500i32..500), 3..16)
        ) {
            let points = pts(&raw);
            prop_assume!(no_three_collinear(&points));

            let fast = find_fast_convex_hull(&points);
            let slow = find_slow_convex_hull(&points);
            prop_assert_eq!(fast.vertex_set(), slow.vertex_set());
        }

        #[test]
        fn fast_hull_is_idempotent(
            raw in proptest::collection::vec((-1000i32..1000, -1000i32..1000), 0..60)
        ) {
            let first = find_fast_convex_hull(&pts(&raw));
            let second = find_fast_convex_hull(&first.hull);
            prop_assert_eq!(first.vertex_set(), second.vertex_set());
        }

        #[test]
        fn slow_hull_is_idempotent(
            raw in proptest::collection::vec((-100i32..100, -100i32..100), 3..16)
        ) {
            // Repeated points pass the side test against themselves
            let distinct: BTreeSet<Point> = pts(&raw).into_iter().collect();
            let points: Vec<Point> = distinct.into_iter().collect();
            let first = find_slow_convex_hull(&points);
            prop_assume!(first.hull.len() >= 3);
            let second = find_slow_convex_hull(&first.hull);
            prop_assert_eq!(first.vertex_set(), second.vertex_set());
        }

        #[test]
        fn fast_hull_has_no_point_outside(
            raw in proptest::collection::vec((-1000i32..1000, -1000i32..1000), 3..80)
        ) {
            let points = pts(&raw);
            let res = find_fast_convex_hull(&points);
            let n = res.hull.len();
            prop_assume!(n >= 3);
            for pt in &points {
                for i in 0..n {
                    prop_assert!(orientation(&res.hull[i], &res.hull[(i + 1) % n], pt) >= 0);
                }
            }
        }
    }
}
