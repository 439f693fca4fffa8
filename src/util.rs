//! Utility functions for colors and stroke geometry.
//!
//! This module provides:
//! - Color name lookup for configuration files
//! - Drag box normalization for rectangles and ellipses
//! - Freehand path simplification

use crate::draw::{Color, Point, color::*};

// ============================================================================
// Box Geometry
// ============================================================================

/// Normalizes a drag from `start` to `end` into `(x, y, w, h)` with
/// non-negative width and height.
pub fn normalize_box(start: Point, end: Point) -> (i32, i32, i32, i32) {
    let x = start.0.min(end.0);
    let y = start.1.min(end.1);
    let w = (end.0 - start.0).abs();
    let h = (end.1 - start.1).abs();
    (x, y, w, h)
}

/// Computes the ellipse `(cx, cy, rx, ry)` inscribed in the drag box.
pub fn ellipse_in_box(start: Point, end: Point) -> (i32, i32, i32, i32) {
    let (x, y, w, h) = normalize_box(start, end);
    (x + w / 2, y + h / 2, w / 2, h / 2)
}

// ============================================================================
// Path Simplification
// ============================================================================

/// Simplifies a polyline with the Ramer-Douglas-Peucker algorithm.
///
/// Points closer than `tolerance` pixels to the chord between kept points are
/// dropped. The first and last points are always kept.
pub fn simplify_path(points: &[Point], tolerance: f64) -> Vec<Point> {
    if points.len() < 3 {
        return points.to_vec();
    }

    let mut keep = vec![false; points.len()];
    keep[0] = true;
    keep[points.len() - 1] = true;

    // Explicit stack instead of recursion; long strokes can have thousands of points.
    let mut stack = vec![(0usize, points.len() - 1)];
    while let Some((first, last)) = stack.pop() {
        if last <= first + 1 {
            continue;
        }

        let mut max_dist = 0.0;
        let mut max_index = first;
        for i in first + 1..last {
            let dist = distance_to_segment(points[i], points[first], points[last]);
            if dist > max_dist {
                max_dist = dist;
                max_index = i;
            }
        }

        if max_dist > tolerance {
            keep[max_index] = true;
            stack.push((first, max_index));
            stack.push((max_index, last));
        }
    }

    points
        .iter()
        .zip(keep)
        .filter_map(|(point, kept)| kept.then_some(*point))
        .collect()
}

fn distance_to_segment(p: Point, a: Point, b: Point) -> f64 {
    let (px, py) = (p.0 as f64, p.1 as f64);
    let (ax, ay) = (a.0 as f64, a.1 as f64);
    let (bx, by) = (b.0 as f64, b.1 as f64);
    let dx = bx - ax;
    let dy = by - ay;
    let len_sq = dx * dx + dy * dy;

    if len_sq == 0.0 {
        return ((px - ax).powi(2) + (py - ay).powi(2)).sqrt();
    }

    let t = (((px - ax) * dx + (py - ay) * dy) / len_sq).clamp(0.0, 1.0);
    let proj_x = ax + t * dx;
    let proj_y = ay + t * dy;
    ((px - proj_x).powi(2) + (py - proj_y).powi(2)).sqrt()
}

// ============================================================================
// Color Mapping
// ============================================================================

/// Maps color name strings to Color values.
///
/// Used by the configuration system to parse color names from the config file.
///
/// # Supported Names (case-insensitive)
/// - "red" / "coral", "yellow" / "sunflower", "green" / "leaf",
///   "blue" / "ocean", "purple" / "plum", "white", "black"
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.to_lowercase().as_str() {
        "red" | "coral" => Some(CORAL),
        "yellow" | "sunflower" => Some(SUNFLOWER),
        "green" | "leaf" => Some(LEAF),
        "blue" | "ocean" => Some(OCEAN),
        "purple" | "plum" => Some(PLUM),
        "white" => Some(WHITE),
        "black" => Some(BLACK),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_box_handles_reverse_drag() {
        assert_eq!(normalize_box((10, 10), (0, 4)), (0, 4, 10, 6));
    }

    #[test]
    fn ellipse_in_box_centers() {
        assert_eq!(ellipse_in_box((0, 0), (20, 10)), (10, 5, 10, 5));
    }

    #[test]
    fn simplify_drops_collinear_points() {
        let points: Vec<Point> = (0..=10).map(|i| (i, 0)).collect();
        assert_eq!(simplify_path(&points, 1.0), vec![(0, 0), (10, 0)]);
    }

    #[test]
    fn simplify_keeps_corners() {
        let points = vec![(0, 0), (5, 0), (10, 0), (10, 5), (10, 10)];
        assert_eq!(
            simplify_path(&points, 1.0),
            vec![(0, 0), (10, 0), (10, 10)]
        );
    }

    #[test]
    fn simplify_leaves_short_paths_alone() {
        assert_eq!(simplify_path(&[(1, 1), (2, 2)], 5.0), vec![(1, 1), (2, 2)]);
    }

    #[test]
    fn name_to_color_is_case_insensitive() {
        assert_eq!(name_to_color("Ocean"), Some(OCEAN));
        assert_eq!(name_to_color("BLUE"), Some(OCEAN));
        assert_eq!(name_to_color("teal"), None);
    }
}
