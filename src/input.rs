use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::grid::Position;

/// Canonical movement directions for snake input.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    #[must_use]
    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }

    #[must_use]
    pub fn is_vertical(self) -> bool {
        matches!(self, Self::Up | Self::Down)
    }

    /// Returns true when both directions lie on the same axis.
    #[must_use]
    pub fn shares_axis_with(self, other: Self) -> bool {
        self.is_horizontal() == other.is_horizontal()
    }

    /// Returns the neighbouring cell of `from` in this direction, unbounded.
    #[must_use]
    pub fn step(self, from: Position) -> Position {
        match self {
            Self::Up => Position {
                x: from.x,
                y: from.y - 1,
            },
            Self::Down => Position {
                x: from.x,
                y: from.y + 1,
            },
            Self::Left => Position {
                x: from.x - 1,
                y: from.y,
            },
            Self::Right => Position {
                x: from.x + 1,
                y: from.y,
            },
        }
    }

    /// Derives the heading of a segment at `head` that is followed by `next`.
    ///
    /// Compares x first: equal x means a vertical heading.
    #[must_use]
    pub fn away_from(head: Position, next: Position) -> Self {
        if head.x == next.x {
            if head.y > next.y { Self::Down } else { Self::Up }
        } else if head.x > next.x {
            Self::Right
        } else {
            Self::Left
        }
    }
}

/// High-level input events consumed by the game loop.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameInput {
    Direction(Direction),
    Restart,
    Quit,
}

/// Polls the terminal for at most `timeout` and maps the next key press.
pub fn poll_input(timeout: Duration) -> io::Result<Option<GameInput>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }

    match event::read()? {
        Event::Key(key) => Ok(map_key(key)),
        _ => Ok(None),
    }
}

/// Maps a key press to a game input. Releases and repeats are ignored.
#[must_use]
pub fn map_key(key: KeyEvent) -> Option<GameInput> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return matches!(key.code, KeyCode::Char('c')).then_some(GameInput::Quit);
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('w' | 'W') => Some(GameInput::Direction(Direction::Up)),
        KeyCode::Down | KeyCode::Char('s' | 'S') => Some(GameInput::Direction(Direction::Down)),
        KeyCode::Left | KeyCode::Char('a' | 'A') => Some(GameInput::Direction(Direction::Left)),
        KeyCode::Right | KeyCode::Char('d' | 'D') => {
            Some(GameInput::Direction(Direction::Right))
        }
        KeyCode::Char(' ') => Some(GameInput::Restart),
        KeyCode::Char('q' | 'Q') | KeyCode::Esc => Some(GameInput::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

    use super::{Direction, GameInput, map_key};
    use crate::grid::Position;

    #[test]
    fn opposite_direction_is_correct() {
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Down.opposite(), Direction::Up);
        assert_eq!(Direction::Left.opposite(), Direction::Right);
        assert_eq!(Direction::Right.opposite(), Direction::Left);
    }

    #[test]
    fn axis_classification() {
        assert!(Direction::Left.shares_axis_with(Direction::Right));
        assert!(Direction::Up.shares_axis_with(Direction::Up));
        assert!(!Direction::Up.shares_axis_with(Direction::Left));
        assert!(Direction::Down.is_vertical());
        assert!(Direction::Left.is_horizontal());
    }

    #[test]
    fn step_moves_one_cell() {
        let origin = Position::new(3, 3);
        assert_eq!(Direction::Up.step(origin), Position::new(3, 2));
        assert_eq!(Direction::Down.step(origin), Position::new(3, 4));
        assert_eq!(Direction::Left.step(origin), Position::new(2, 3));
        assert_eq!(Direction::Right.step(origin), Position::new(4, 3));
    }

    #[test]
    fn heading_is_derived_from_head_and_next_segment() {
        let next = Position::new(2, 2);
        assert_eq!(Direction::away_from(Position::new(1, 2), next), Direction::Left);
        assert_eq!(Direction::away_from(Position::new(3, 2), next), Direction::Right);
        assert_eq!(Direction::away_from(Position::new(2, 1), next), Direction::Up);
        assert_eq!(Direction::away_from(Position::new(2, 3), next), Direction::Down);
    }

    #[test]
    fn arrows_and_wasd_map_to_directions() {
        let press = |code| KeyEvent::new(code, KeyModifiers::NONE);

        assert_eq!(
            map_key(press(KeyCode::Up)),
            Some(GameInput::Direction(Direction::Up))
        );
        assert_eq!(
            map_key(press(KeyCode::Char('a'))),
            Some(GameInput::Direction(Direction::Left))
        );
        assert_eq!(map_key(press(KeyCode::Char(' '))), Some(GameInput::Restart));
        assert_eq!(map_key(press(KeyCode::Esc)), Some(GameInput::Quit));
        assert_eq!(map_key(press(KeyCode::Tab)), None);
    }

    #[test]
    fn ctrl_c_quits_and_releases_are_ignored() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(ctrl_c), Some(GameInput::Quit));

        let mut release = KeyEvent::new(KeyCode::Up, KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        assert_eq!(map_key(release), None);
    }
}
