use bevy::prelude::{Entity, Event};
use tj_common::components::direction::Direction;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MovementCommand {
    SetEnabled(bool),
    ForceDirection(Direction),
    StartTurn(Direction),
    Jump,
}

#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct MovementRequest {
    pub entity: Entity,
    pub command: MovementCommand,
}

impl MovementRequest {
    pub fn new(entity: Entity, command: MovementCommand) -> MovementRequest {
        MovementRequest { entity, command }
    }
}
