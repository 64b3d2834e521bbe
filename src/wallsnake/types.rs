use std::{fmt, slice::Iter};

use serde::{Deserialize, Serialize};

#[derive(Serialize, Debug)]
pub enum APIVersion {
    #[serde(rename = "1")]
    One,
}

#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Directions in the order the safe-move scan tries them.
    pub fn iter() -> Iter<'static, Direction> {
        static DIRECTIONS: [Direction; 4] = [
            Direction::Up,
            Direction::Right,
            Direction::Down,
            Direction::Left,
        ];
        DIRECTIONS.iter()
    }

    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Coarse direction from one coordinate towards another. The x axis is
    /// checked before the y axis, and equal coordinates resolve to up. This
    /// ignores anything between the two cells; callers do their own safety
    /// checks on the destination.
    pub fn towards(from: Coord, to: Coord) -> Direction {
        if to.x > from.x {
            Direction::Right
        } else if to.x < from.x {
            Direction::Left
        } else if to.y > from.y {
            Direction::Up
        } else if to.y < from.y {
            Direction::Down
        } else {
            Direction::Up
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Direction::Up => "up",
                Direction::Down => "down",
                Direction::Left => "left",
                Direction::Right => "right",
            }
        )
    }
}

#[derive(Deserialize, Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Coord {
    pub fn neighbour(&self, direction: Direction) -> Coord {
        Coord {
            x: self.x
                + match direction {
                    Direction::Right => 1,
                    Direction::Left => -1,
                    _ => 0,
                },
            y: self.y
                + match direction {
                    Direction::Up => 1,
                    Direction::Down => -1,
                    _ => 0,
                },
        }
    }
}

#[derive(Serialize, Debug)]
pub enum Head {
    #[serde(rename = "default")]
    Default,
    #[serde(rename = "gamer")]
    Gamer,
    #[serde(rename = "safe")]
    Safe,
    #[serde(rename = "smile")]
    Smile,
    #[serde(rename = "silly")]
    Silly,
    #[serde(rename = "sand-worm")]
    SandWorm,
}

#[derive(Serialize, Debug)]
pub enum Tail {
    #[serde(rename = "default")]
    Default,
    #[serde(rename = "mouse")]
    Mouse,
    #[serde(rename = "curled")]
    Curled,
    #[serde(rename = "round-bum")]
    RoundBum,
    #[serde(rename = "hook")]
    Hook,
    #[serde(rename = "skinny")]
    Skinny,
}
