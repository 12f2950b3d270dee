use bevy::reflect::Reflect;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Reflect, Serialize, Deserialize)]
pub enum Direction {
    Left,
    #[default]
    Right,
}

impl Direction {
    // Polling order when both are held.
    pub const ALL: [Direction; 2] = [Direction::Left, Direction::Right];

    pub fn from_right(right: bool) -> Direction {
        if right { Direction::Right } else { Direction::Left }
    }

    pub fn is_right(self) -> bool {
        self == Direction::Right
    }

    pub fn index(self) -> usize {
        match self {
            Direction::Left => 0,
            Direction::Right => 1,
        }
    }

    // Right leans clockwise, which is a negative angle.
    pub fn turn_sign(self) -> f32 {
        match self {
            Direction::Left => 1.0,
            Direction::Right => -1.0,
        }
    }

    pub fn graphics_scale_x(self) -> f32 {
        match self {
            Direction::Left => 1.0,
            Direction::Right => -1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_right_maps_both_ways() {
        assert_eq!(Direction::from_right(true), Direction::Right);
        assert_eq!(Direction::from_right(false), Direction::Left);
    }

    #[test]
    fn right_turns_clockwise() {
        assert_eq!(Direction::Right.turn_sign(), -1.0);
        assert_eq!(Direction::Left.turn_sign(), 1.0);
    }

    #[test]
    fn left_keeps_the_sprite_and_right_mirrors_it() {
        assert_eq!(Direction::Left.graphics_scale_x(), 1.0);
        assert_eq!(Direction::Right.graphics_scale_x(), -1.0);
    }

    #[test]
    fn indices_are_distinct() {
        assert_eq!(Direction::Left.index(), 0);
        assert_eq!(Direction::Right.index(), 1);
    }
}
