//! Geometry utilities shared by the sampler and the symmetric renderer.

use crate::draw::Point;

/// Rotates `point` by `angle` radians around `center`.
///
/// Standard 2D rotation: `x' = (x-cx)cosθ - (y-cy)sinθ + cx`,
/// `y' = (x-cx)sinθ + (y-cy)cosθ + cy`.
pub fn rotate_about(point: Point, center: Point, angle: f64) -> Point {
    let (sin, cos) = angle.sin_cos();
    let dx = point.x - center.x;
    let dy = point.y - center.y;
    Point {
        x: dx * cos - dy * sin + center.x,
        y: dx * sin + dy * cos + center.y,
    }
}

/// Straight-line distance between two points.
pub fn distance(a: Point, b: Point) -> f64 {
    ((b.x - a.x).powi(2) + (b.y - a.y).powi(2)).sqrt()
}

/// Expand tilde (~) in path strings.
pub fn expand_tilde(path: &str) -> std::path::PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    std::path::PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    const EPS: f64 = 1e-9;

    fn close(a: Point, b: Point) {
        assert!(
            (a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS,
            "{a:?} != {b:?}"
        );
    }

    #[test]
    fn quarter_turn_about_origin() {
        let p = rotate_about(Point::new(1.0, 0.0), Point::new(0.0, 0.0), PI / 2.0);
        close(p, Point::new(0.0, 1.0));
    }

    #[test]
    fn rotation_about_offset_center() {
        let center = Point::new(400.0, 400.0);
        let p = rotate_about(Point::new(110.0, 100.0), center, PI / 2.0);
        close(p, Point::new(700.0, 110.0));
    }

    #[test]
    fn rotation_preserves_segment_length() {
        let center = Point::new(50.0, 50.0);
        let a = Point::new(12.0, 34.0);
        let b = Point::new(78.0, 9.0);
        let original = distance(a, b);

        for i in 0..8 {
            let angle = 2.0 * PI * i as f64 / 8.0;
            let ra = rotate_about(a, center, angle);
            let rb = rotate_about(b, center, angle);
            assert!((distance(ra, rb) - original).abs() < EPS);
        }
    }

    #[test]
    fn n_fold_set_maps_onto_itself() {
        // Rotating the full set of N copies by one step reproduces the set.
        let center = Point::new(100.0, 100.0);
        let seed = Point::new(130.0, 90.0);
        let n = 6;
        let step = 2.0 * PI / n as f64;

        let copies: Vec<Point> = (0..n)
            .map(|i| rotate_about(seed, center, step * i as f64))
            .collect();

        for p in &copies {
            let shifted = rotate_about(*p, center, step);
            assert!(
                copies
                    .iter()
                    .any(|q| (q.x - shifted.x).abs() < 1e-6 && (q.y - shifted.y).abs() < 1e-6),
                "{shifted:?} not in rotated set"
            );
        }
    }

    #[test]
    fn full_turn_is_identity() {
        let p = Point::new(3.5, -8.25);
        let center = Point::new(1.0, 2.0);
        close(rotate_about(p, center, 2.0 * PI), p);
    }

    #[test]
    fn expand_tilde_leaves_absolute_paths() {
        assert_eq!(
            expand_tilde("/absolute/path"),
            std::path::PathBuf::from("/absolute/path")
        );
        assert!(!expand_tilde("~/Pictures").to_string_lossy().starts_with('~'));
    }
}
