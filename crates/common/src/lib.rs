use bevy::prelude::{Plugin, App};
use components::{direction::Direction, player::Player, rig::{CharacterRig, PlayerGraphics, ArmPivot}};

pub mod components;
pub mod resources;

#[derive(Debug, Default)]
pub struct CommonPlugin {}

impl Plugin for CommonPlugin {
    fn build(&self, app: &mut App) {
        app
            .register_type::<Direction>()
            .register_type::<Player>()
            .register_type::<CharacterRig>()
            .register_type::<PlayerGraphics>()
            .register_type::<ArmPivot>();
    }
}
