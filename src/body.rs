use std::collections::VecDeque;

use thiserror::Error;

use crate::grid::Position;

/// Errors raised when an operation would break the body's shape invariants.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
pub enum BodyError {
    #[error("invariant violation: a snake body cannot be built from zero segments")]
    Empty,
    #[error("invariant violation: cannot remove the only remaining segment")]
    SoleSegment,
}

/// Ordered snake segments, head first.
///
/// Backed by a ring buffer so the head is replaced in constant time. The body
/// always holds at least one segment.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Body {
    segments: VecDeque<Position>,
}

impl Body {
    /// Creates a one-segment body at `start`.
    #[must_use]
    pub fn new(start: Position) -> Self {
        let mut segments = VecDeque::new();
        segments.push_front(start);
        Self { segments }
    }

    /// Builds a body from head-to-tail ordered positions.
    pub fn from_ordered<I>(positions: I) -> Result<Self, BodyError>
    where
        I: IntoIterator<Item = Position>,
    {
        let segments: VecDeque<Position> = positions.into_iter().collect();
        if segments.is_empty() {
            return Err(BodyError::Empty);
        }
        Ok(Self { segments })
    }

    /// Makes `position` the new head.
    pub fn push_head(&mut self, position: Position) {
        self.segments.push_front(position);
    }

    /// Appends `position` behind the current tail.
    pub fn push_tail(&mut self, position: Position) {
        self.segments.push_back(position);
    }

    /// Removes and returns the tail segment.
    pub fn pop_tail(&mut self) -> Result<Position, BodyError> {
        if self.segments.len() == 1 {
            return Err(BodyError::SoleSegment);
        }
        self.segments.pop_back().ok_or(BodyError::Empty)
    }

    /// Reverses the ordering so the tail becomes the head.
    pub fn reverse(&mut self) {
        self.segments.make_contiguous().reverse();
    }

    /// Returns the head-to-tail listing.
    #[must_use]
    pub fn to_ordered_sequence(&self) -> Vec<Position> {
        self.segments.iter().copied().collect()
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        *self
            .segments
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns the segment directly behind the head.
    #[must_use]
    pub fn neck(&self) -> Option<Position> {
        self.segments.get(1).copied()
    }

    /// Returns the last segment.
    #[must_use]
    pub fn tail(&self) -> Position {
        *self
            .segments
            .back()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns the segment directly in front of the tail.
    #[must_use]
    pub fn before_tail(&self) -> Option<Position> {
        let len = self.segments.len();
        if len < 2 {
            return None;
        }
        self.segments.get(len - 2).copied()
    }

    /// Returns the head-to-tail index of the segment at `position`.
    #[must_use]
    pub fn index_of(&self, position: Position) -> Option<usize> {
        self.segments.iter().position(|segment| *segment == position)
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn contains(&self, position: Position) -> bool {
        self.segments.contains(&position)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Always false; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Iterates over segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.segments.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::{Body, BodyError};
    use crate::grid::Position;

    fn row(xs: &[i32]) -> Vec<Position> {
        xs.iter().map(|&x| Position::new(x, 0)).collect()
    }

    #[test]
    fn new_body_has_single_segment() {
        let body = Body::new(Position::new(0, 0));

        assert_eq!(body.len(), 1);
        assert_eq!(body.head(), Position::new(0, 0));
        assert_eq!(body.tail(), Position::new(0, 0));
        assert_eq!(body.neck(), None);
        assert_eq!(body.before_tail(), None);
    }

    #[test]
    fn from_ordered_round_trips() {
        let positions = vec![
            Position::new(4, 0),
            Position::new(4, 1),
            Position::new(3, 1),
            Position::new(3, 2),
        ];

        let body = Body::from_ordered(positions.clone()).expect("non-empty input");

        assert_eq!(body.to_ordered_sequence(), positions);
        assert_eq!(body.head(), Position::new(4, 0));
    }

    #[test]
    fn from_ordered_rejects_empty_input() {
        assert_eq!(Body::from_ordered(Vec::new()), Err(BodyError::Empty));
    }

    #[test]
    fn push_tail_appends_behind_tail() {
        let mut body = Body::new(Position::new(0, 0));

        body.push_tail(Position::new(1, 0));

        assert_eq!(body.to_ordered_sequence(), row(&[0, 1]));
    }

    #[test]
    fn push_head_prepends_in_front_of_head() {
        let mut body = Body::new(Position::new(1, 1));

        body.push_head(Position::new(0, 0));

        assert_eq!(
            body.to_ordered_sequence(),
            vec![Position::new(0, 0), Position::new(1, 1)]
        );
    }

    #[test]
    fn successive_head_pushes_list_newest_first() {
        let mut body = Body::new(Position::new(0, 0));
        for x in 1..5 {
            body.push_head(Position::new(x, 0));
        }

        assert_eq!(body.to_ordered_sequence(), row(&[4, 3, 2, 1, 0]));
        assert_eq!(
            Body::from_ordered(row(&[4, 3, 2, 1, 0])).expect("non-empty input"),
            body
        );
    }

    #[test]
    fn pop_tail_shrinks_down_to_the_head() {
        let mut body = Body::new(Position::new(0, 0));
        for x in 1..6 {
            body.push_tail(Position::new(x, 0));
        }
        assert_eq!(body.to_ordered_sequence(), row(&[0, 1, 2, 3, 4, 5]));

        for expected in (1..6).rev() {
            assert_eq!(body.pop_tail(), Ok(Position::new(expected, 0)));
        }

        assert_eq!(body.to_ordered_sequence(), row(&[0]));
        assert_eq!(body.pop_tail(), Err(BodyError::SoleSegment));
        assert_eq!(body.len(), 1);
    }

    #[test]
    fn reverse_swaps_head_and_tail() {
        let mut body = Body::from_ordered(row(&[0, 1, 2, 3, 4])).expect("non-empty input");

        body.reverse();

        assert_eq!(body.to_ordered_sequence(), row(&[4, 3, 2, 1, 0]));
        assert_eq!(body.head(), Position::new(4, 0));
        assert_eq!(body.neck(), Some(Position::new(3, 0)));
    }

    #[test]
    fn reverse_after_wrapping_head_pushes() {
        let mut body = Body::from_ordered(row(&[2, 1, 0])).expect("non-empty input");
        body.push_head(Position::new(3, 0));
        let _ = body.pop_tail();
        body.push_head(Position::new(4, 0));
        let _ = body.pop_tail();

        body.reverse();

        assert_eq!(body.to_ordered_sequence(), row(&[2, 3, 4]));
    }

    #[test]
    fn lookups_follow_head_to_tail_order() {
        let body = Body::from_ordered(row(&[5, 6, 7])).expect("non-empty input");

        assert_eq!(body.index_of(Position::new(5, 0)), Some(0));
        assert_eq!(body.index_of(Position::new(7, 0)), Some(2));
        assert_eq!(body.index_of(Position::new(8, 0)), None);
        assert_eq!(body.before_tail(), Some(Position::new(6, 0)));
        assert!(body.contains(Position::new(6, 0)));
        assert!(!body.is_empty());
    }
}
