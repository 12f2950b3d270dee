use bevy::{prelude::{Component, Input, KeyCode, ReflectComponent}, reflect::Reflect};
use tj_common::{components::direction::Direction, resources::touch::TouchButtons};

pub trait DirectionInput {
    fn is_pressed(&self, direction: Direction) -> bool;

    fn was_released(&self, direction: Direction) -> bool;
}

#[derive(Component, Reflect, Debug, Clone, Copy)]
#[reflect(Component)]
pub struct JumpKeys {
    pub left: KeyCode,
    pub right: KeyCode,
}

impl Default for JumpKeys {
    fn default() -> Self {
        Self {
            left: KeyCode::Left,
            right: KeyCode::Right,
        }
    }
}

impl JumpKeys {
    pub fn key(&self, direction: Direction) -> KeyCode {
        match direction {
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }
}

pub struct KeyboardTouchInput<'a> {
    pub keys: &'a Input<KeyCode>,
    pub bindings: &'a JumpKeys,
    pub touch: &'a TouchButtons,
}

impl DirectionInput for KeyboardTouchInput<'_> {
    fn is_pressed(&self, direction: Direction) -> bool {
        self.keys.pressed(self.bindings.key(direction)) || self.touch.is_pressed(direction)
    }

    fn was_released(&self, direction: Direction) -> bool {
        self.keys.just_released(self.bindings.key(direction)) || self.touch.just_released(direction)
    }
}
