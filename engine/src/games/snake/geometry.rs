//! Helpers for axis-aligned polylines.

use super::types::Position;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Axis {
    Vertical,
    Horizontal,
}

/// Manhattan length. Equals the real length only for axis-aligned segments.
pub fn segment_length(a: Position, b: Position) -> i32 {
    b.x.abs_diff(a.x)
        .saturating_add(b.y.abs_diff(a.y))
        .try_into()
        .unwrap_or(i32::MAX)
}

pub fn polyline_length(points: &[Position]) -> i32 {
    points
        .windows(2)
        .map(|pair| segment_length(pair[0], pair[1]))
        .fold(0, i32::saturating_add)
}

fn top_left_first(p1: Position, p2: Position) -> (Position, Position) {
    if p1.x > p2.x || p1.y > p2.y {
        (p2, p1)
    } else {
        (p1, p2)
    }
}

/// `None` for zero-length and diagonal segments.
fn axis_of(p1: Position, p2: Position) -> Option<Axis> {
    match (p1.x == p2.x, p1.y == p2.y) {
        (true, false) => Some(Axis::Vertical),
        (false, true) => Some(Axis::Horizontal),
        _ => None,
    }
}

/// Strict interior crossing of a vertical and a horizontal segment.
fn vertical_crosses_horizontal(v1: Position, v2: Position, h1: Position, h2: Position) -> bool {
    h1.x < v1.x && h2.x > v1.x && v1.y < h1.y && v2.y > h1.y
}

/// Whether segment `a1-a2` crosses segment `b1-b2`.
///
/// Only perpendicular pairs can cross, and only through each other's interiors:
/// touching at an endpoint does not count. Parallel segments never cross, even
/// when they overlap.
pub fn segments_cross(a1: Position, a2: Position, b1: Position, b2: Position) -> bool {
    let (a1, a2) = top_left_first(a1, a2);
    let (b1, b2) = top_left_first(b1, b2);

    match (axis_of(a1, a2), axis_of(b1, b2)) {
        (Some(Axis::Vertical), Some(Axis::Horizontal)) => {
            vertical_crosses_horizontal(a1, a2, b1, b2)
        }
        (Some(Axis::Horizontal), Some(Axis::Vertical)) => {
            vertical_crosses_horizontal(b1, b2, a1, a2)
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: i32, y: i32) -> Position {
        Position::new(x, y)
    }

    #[test]
    fn test_segment_length_is_manhattan() {
        assert_eq!(segment_length(p(0, 0), p(0, 7)), 7);
        assert_eq!(segment_length(p(5, 3), p(1, 3)), 4);
        assert_eq!(segment_length(p(2, 2), p(2, 2)), 0);
    }

    #[test]
    fn test_polyline_length_sums_segments() {
        let points = [p(0, 0), p(10, 0), p(10, 5), p(4, 5)];
        assert_eq!(polyline_length(&points), 21);
        assert_eq!(polyline_length(&points[..1]), 0);
        assert_eq!(polyline_length(&[]), 0);
    }

    #[test]
    fn test_lengths_saturate_instead_of_overflowing() {
        assert_eq!(segment_length(p(i32::MIN, 0), p(i32::MAX, 0)), i32::MAX);
        let points = [p(0, 0), p(i32::MAX, 0), p(i32::MAX, i32::MAX)];
        assert_eq!(polyline_length(&points), i32::MAX);
    }

    #[test]
    fn test_perpendicular_segments_cross() {
        assert!(segments_cross(p(5, 0), p(5, 10), p(0, 5), p(10, 5)));
        assert!(segments_cross(p(5, 10), p(5, 0), p(10, 5), p(0, 5)));
    }

    #[test]
    fn test_touching_endpoints_do_not_cross() {
        assert!(!segments_cross(p(5, 0), p(5, 10), p(5, 10), p(15, 10)));
        assert!(!segments_cross(p(5, 0), p(5, 10), p(0, 10), p(10, 10)));
        assert!(!segments_cross(p(5, 0), p(5, 10), p(5, 5), p(10, 5)));
    }

    #[test]
    fn test_disjoint_perpendicular_segments() {
        assert!(!segments_cross(p(5, 0), p(5, 10), p(6, 5), p(10, 5)));
        assert!(!segments_cross(p(5, 0), p(5, 4), p(0, 5), p(10, 5)));
    }

    #[test]
    fn test_parallel_segments_never_cross() {
        assert!(!segments_cross(p(0, 0), p(0, 10), p(0, 5), p(0, 15)));
        assert!(!segments_cross(p(0, 0), p(10, 0), p(5, 0), p(15, 0)));
        assert!(!segments_cross(p(0, 0), p(10, 0), p(0, 3), p(10, 3)));
    }

    #[test]
    fn test_zero_length_segments_never_cross() {
        assert!(!segments_cross(p(5, 5), p(5, 5), p(0, 5), p(10, 5)));
        assert!(!segments_cross(p(0, 5), p(10, 5), p(5, 5), p(5, 5)));
    }

    #[test]
    fn test_crossing_is_symmetric() {
        let segments = [
            (p(5, 0), p(5, 10)),
            (p(0, 5), p(10, 5)),
            (p(10, 5), p(0, 5)),
            (p(6, 5), p(10, 5)),
            (p(0, 0), p(0, 10)),
            (p(3, 3), p(3, 3)),
            (p(5, 10), p(5, 20)),
            (p(-4, 8), p(12, 8)),
        ];
        for (a1, a2) in segments {
            for (b1, b2) in segments {
                assert_eq!(
                    segments_cross(a1, a2, b1, b2),
                    segments_cross(b1, b2, a1, a2),
                    "{:?}-{:?} vs {:?}-{:?}",
                    a1,
                    a2,
                    b1,
                    b2
                );
            }
        }
    }
}
