use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ParseDirectionError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: &Position) -> f64 {
        let dx = f64::from(other.x) - f64::from(self.x);
        let dy = f64::from(other.y) - f64::from(self.y);
        (dx * dx + dy * dy).sqrt()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Food {
    pub position: Position,
}

impl Food {
    pub fn new(position: Position) -> Self {
        Self { position }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    NotInitialized,
    New,
    Running,
    Finished,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Right => "right",
            Direction::Down => "down",
            Direction::Left => "left",
        }
    }

    /// `from` moved `distance` units along this direction. Screen coordinates:
    /// y grows downwards.
    pub fn offset(&self, from: Position, distance: i32) -> Position {
        match self {
            Direction::Up => Position::new(from.x, from.y.saturating_sub(distance)),
            Direction::Down => Position::new(from.x, from.y.saturating_add(distance)),
            Direction::Left => Position::new(from.x.saturating_sub(distance), from.y),
            Direction::Right => Position::new(from.x.saturating_add(distance), from.y),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Direction::ALL
            .into_iter()
            .find(|direction| direction.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseDirectionError::new(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_direction() {
        assert_eq!("up".parse::<Direction>(), Ok(Direction::Up));
        assert_eq!("Down".parse::<Direction>(), Ok(Direction::Down));
        assert_eq!("LEFT".parse::<Direction>(), Ok(Direction::Left));
        assert_eq!("right".parse::<Direction>(), Ok(Direction::Right));
    }

    #[test]
    fn test_parse_direction_rejects_unknown() {
        let err = "sideways".parse::<Direction>().unwrap_err();
        assert_eq!(err.input(), "sideways");
        assert!("".parse::<Direction>().is_err());
    }

    #[test]
    fn test_offset_uses_screen_axes() {
        let origin = Position::new(10, 10);
        assert_eq!(Direction::Up.offset(origin, 3), Position::new(10, 7));
        assert_eq!(Direction::Down.offset(origin, 3), Position::new(10, 13));
        assert_eq!(Direction::Left.offset(origin, 3), Position::new(7, 10));
        assert_eq!(Direction::Right.offset(origin, 3), Position::new(13, 10));
    }

    #[test]
    fn test_offset_saturates_at_coordinate_limits() {
        let origin = Position::new(5, -5);
        assert_eq!(Direction::Right.offset(origin, i32::MAX), Position::new(i32::MAX, -5));
        assert_eq!(Direction::Up.offset(origin, i32::MAX), Position::new(5, i32::MIN));
    }

    #[test]
    fn test_distance_is_euclidean() {
        let a = Position::new(0, 0);
        let b = Position::new(3, 4);
        assert_eq!(a.distance(&b), 5.0);
        assert_eq!(b.distance(&a), 5.0);
    }
}
