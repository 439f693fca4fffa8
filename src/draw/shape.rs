//! Committed stroke definitions.

use super::brush::{Brush, DrawMode};
use super::color::Color;
use crate::util;
use serde::{Deserialize, Serialize};

/// Canvas coordinate in pixels.
pub type Point = (i32, i32);

/// Represents a committed stroke on a page.
///
/// Each variant stores its own color and size so a page can be redrawn without
/// knowing which brush was active when it was drawn.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Shape {
    /// Freehand drawing - polyline through the pointer path
    Freehand {
        points: Vec<Point>,
        color: Color,
        size: f64,
    },
    /// Straight line, optionally with an arrowhead at the end point
    Line {
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        color: Color,
        size: f64,
        #[serde(default, skip_serializing_if = "std::ops::Not::not")]
        arrow_end: bool,
    },
    /// Rectangle outline, normalized so `w` and `h` are non-negative
    Rectangle {
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        color: Color,
        size: f64,
    },
    /// Ellipse outline inscribed in the drag box
    Ellipse {
        cx: i32,
        cy: i32,
        rx: i32,
        ry: i32,
        color: Color,
        size: f64,
    },
}

/// Pixel tolerance used when simplifying freehand paths.
const SIMPLIFY_TOLERANCE: f64 = 1.5;

impl Shape {
    /// Builds the shape a brush produces for the given pointer path.
    ///
    /// Returns `None` for degenerate input (a freehand stroke with a single
    /// point, or a drag that never left its start point).
    pub fn from_path(brush: &Brush, path: &[Point]) -> Option<Self> {
        let (&start, &end) = (path.first()?, path.last()?);
        let color = brush.color;
        let size = brush.size;

        match brush.mode {
            DrawMode::Draw => {
                if path.len() < 2 {
                    return None;
                }
                let points = if brush.simplify {
                    util::simplify_path(path, SIMPLIFY_TOLERANCE)
                } else {
                    path.to_vec()
                };
                Some(Shape::Freehand {
                    points,
                    color,
                    size,
                })
            }
            _ if start == end => None,
            DrawMode::Line => Some(Shape::Line {
                x1: start.0,
                y1: start.1,
                x2: end.0,
                y2: end.1,
                color,
                size,
                arrow_end: brush.arrow_end,
            }),
            DrawMode::Rectangle => {
                let (x, y, w, h) = util::normalize_box(start, end);
                Some(Shape::Rectangle {
                    x,
                    y,
                    w,
                    h,
                    color,
                    size,
                })
            }
            DrawMode::Ellipse => {
                let (cx, cy, rx, ry) = util::ellipse_in_box(start, end);
                Some(Shape::Ellipse {
                    cx,
                    cy,
                    rx,
                    ry,
                    color,
                    size,
                })
            }
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Shape::Freehand { color, .. }
            | Shape::Line { color, .. }
            | Shape::Rectangle { color, .. }
            | Shape::Ellipse { color, .. } => *color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{CORAL, OCEAN};

    fn brush(mode: DrawMode) -> Brush {
        let mut brush = Brush::new(CORAL, 4.0);
        brush.mode = mode;
        brush
    }

    #[test]
    fn single_point_freehand_is_discarded() {
        assert_eq!(Shape::from_path(&brush(DrawMode::Draw), &[(3, 3)]), None);
    }

    #[test]
    fn zero_length_drag_is_discarded() {
        let path = [(10, 10), (20, 20), (10, 10)];
        assert_eq!(Shape::from_path(&brush(DrawMode::Line), &path), None);
        assert_eq!(Shape::from_path(&brush(DrawMode::Rectangle), &path), None);
    }

    #[test]
    fn line_uses_first_and_last_point_and_arrow_flag() {
        let mut b = brush(DrawMode::Line);
        b.arrow_end = true;
        b.color = OCEAN;
        let shape = Shape::from_path(&b, &[(0, 0), (5, 5), (10, 0)]).unwrap();
        assert_eq!(
            shape,
            Shape::Line {
                x1: 0,
                y1: 0,
                x2: 10,
                y2: 0,
                color: OCEAN,
                size: 4.0,
                arrow_end: true,
            }
        );
    }

    #[test]
    fn rectangle_is_normalized() {
        let shape = Shape::from_path(&brush(DrawMode::Rectangle), &[(50, 40), (10, 20)]).unwrap();
        assert!(matches!(
            shape,
            Shape::Rectangle {
                x: 10,
                y: 20,
                w: 40,
                h: 20,
                ..
            }
        ));
    }

    #[test]
    fn line_without_arrow_omits_flag_in_json() {
        let shape = Shape::from_path(&brush(DrawMode::Line), &[(0, 0), (1, 1)]).unwrap();
        let json = serde_json::to_string(&shape).unwrap();
        assert!(!json.contains("arrow_end"));
        assert!(json.contains("\"kind\":\"line\""));
    }
}
