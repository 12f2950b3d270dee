use bevy::prelude::Resource;

use crate::components::direction::Direction;

#[derive(Resource, Debug, Default, Clone)]
pub struct TouchButtons {
    pressed: [bool; 2],
    released: [bool; 2],
}

impl TouchButtons {
    pub fn update(&mut self, direction: Direction, held: bool) {
        let i = direction.index();
        self.released[i] = self.pressed[i] && !held;
        self.pressed[i] = held;
    }

    pub fn is_pressed(&self, direction: Direction) -> bool {
        self.pressed[direction.index()]
    }

    pub fn just_released(&self, direction: Direction) -> bool {
        self.released[direction.index()]
    }
}
