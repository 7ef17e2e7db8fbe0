use crate::config::GridSize;

/// Grid position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns true when the position lies inside the bounds.
    #[must_use]
    pub fn is_within_bounds(self, bounds: GridSize) -> bool {
        !is_out_of_bounds(self, bounds)
    }

    /// Returns this position wrapped into bounds on both axes.
    ///
    /// Stepping left past `x = 0` lands on `x = width - 1`, and symmetrically for
    /// the other three edges.
    #[must_use]
    pub fn wrapped(self, bounds: GridSize) -> Self {
        Self {
            x: wrap_axis(self.x, i32::from(bounds.width)),
            y: wrap_axis(self.y, i32::from(bounds.height)),
        }
    }
}

fn wrap_axis(value: i32, upper_bound: i32) -> i32 {
    let wrapped = value % upper_bound;
    if wrapped < 0 {
        wrapped + upper_bound
    } else {
        wrapped
    }
}

/// Row-major linear index of `position`.
///
/// No validation: positions outside the grid map to indices outside
/// `0..width * height` (possibly negative).
#[must_use]
pub fn index_of(position: Position, width: u16) -> i32 {
    position.x + position.y * i32::from(width)
}

/// Inverse of [`index_of`] for in-range indices.
#[must_use]
pub fn position_of(index: i32, width: u16) -> Position {
    let width = i32::from(width);
    Position {
        x: index % width,
        y: index / width,
    }
}

/// Returns true when `position` lies outside `[0, width) x [0, height)`.
#[must_use]
pub fn is_out_of_bounds(position: Position, bounds: GridSize) -> bool {
    position.x < 0
        || position.y < 0
        || position.x >= i32::from(bounds.width)
        || position.y >= i32::from(bounds.height)
}

#[cfg(test)]
mod tests {
    use crate::config::GridSize;

    use super::{Position, index_of, is_out_of_bounds, position_of};

    const BOUNDS: GridSize = GridSize {
        width: 10,
        height: 5,
    };

    #[test]
    fn index_and_position_are_inverse_over_the_grid() {
        for index in 0..50 {
            let position = position_of(index, BOUNDS.width);
            assert!(position.is_within_bounds(BOUNDS));
            assert_eq!(index_of(position, BOUNDS.width), index);
        }
    }

    #[test]
    fn index_is_row_major() {
        assert_eq!(index_of(Position::new(3, 0), 10), 3);
        assert_eq!(index_of(Position::new(4, 3), 10), 34);
        assert_eq!(position_of(31, 10), Position::new(1, 3));
    }

    #[test]
    fn out_of_bounds_covers_all_four_edges() {
        assert!(is_out_of_bounds(Position::new(-1, 0), BOUNDS));
        assert!(is_out_of_bounds(Position::new(10, 0), BOUNDS));
        assert!(is_out_of_bounds(Position::new(0, -1), BOUNDS));
        assert!(is_out_of_bounds(Position::new(0, 5), BOUNDS));
        assert!(!is_out_of_bounds(Position::new(9, 4), BOUNDS));
        assert!(!is_out_of_bounds(Position::new(0, 0), BOUNDS));
    }

    #[test]
    fn position_wrapping_keeps_coordinates_inside_bounds() {
        let wrapped_left = Position::new(-1, 3).wrapped(BOUNDS);
        let wrapped_right = Position::new(10, 3).wrapped(BOUNDS);
        let wrapped_top = Position::new(4, -1).wrapped(BOUNDS);
        let wrapped_bottom = Position::new(4, 5).wrapped(BOUNDS);

        assert_eq!(wrapped_left, Position::new(9, 3));
        assert_eq!(wrapped_right, Position::new(0, 3));
        assert_eq!(wrapped_top, Position::new(4, 4));
        assert_eq!(wrapped_bottom, Position::new(4, 0));
    }
}
