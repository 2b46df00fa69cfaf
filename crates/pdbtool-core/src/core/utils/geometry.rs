use nalgebra::Point3;

/// Largest Euclidean distance between any two of the given points.
///
/// Every unordered pair is visited once, so the cost is quadratic in the
/// number of points. Fewer than two points yield `0.0`.
pub fn max_pairwise_distance(points: &[Point3<f64>]) -> f64 {
    let mut max_distance = 0.0_f64;
    for (i, a) in points.iter().enumerate() {
        for b in &points[i + 1..] {
            max_distance = max_distance.max(nalgebra::distance(a, b));
        }
    }
    max_distance
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn empty_and_single_point_sets_have_zero_extent() {
        assert_eq!(max_pairwise_distance(&[]), 0.0);
        assert_eq!(max_pairwise_distance(&[Point3::new(1.0, 2.0, 3.0)]), 0.0);
    }

    #[test]
    fn two_points_give_their_distance() {
        let points = [Point3::new(0.0, 0.0, 0.0), Point3::new(3.0, 4.0, 0.0)];
        assert!(approx_eq(max_pairwise_distance(&points), 5.0));
    }

    #[test]
    fn picks_the_farthest_pair_regardless_of_order() {
        let points = [
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(-2.0, 0.0, 0.0),
            Point3::new(0.0, 0.5, 0.0),
            Point3::new(4.0, 0.0, 0.0),
        ];
        assert!(approx_eq(max_pairwise_distance(&points), 6.0));
    }

    #[test]
    fn colinear_points_use_the_generic_maximum() {
        let points = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 1.0),
            Point3::new(2.0, 2.0, 2.0),
        ];
        assert!(approx_eq(max_pairwise_distance(&points), 12.0_f64.sqrt()));
    }

    #[test]
    fn coincident_points_have_zero_extent() {
        let p = Point3::new(7.5, -1.25, 3.0);
        assert_eq!(max_pairwise_distance(&[p, p, p]), 0.0);
    }
}
