use bevy::prelude::{Entity, Event};
use tj_common::components::direction::Direction;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MovementCue {
    Jumped { launched: bool },
    Mirrored { facing: Direction, mirror_arm: bool },
}

pub trait MovementFeedback {
    fn cue(&mut self, cue: MovementCue);
}

impl MovementFeedback for Vec<MovementCue> {
    fn cue(&mut self, cue: MovementCue) {
        self.push(cue);
    }
}

#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct CharacterCue {
    pub entity: Entity,
    pub cue: MovementCue,
}
