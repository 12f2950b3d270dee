use bevy::prelude::{Plugin, App, Update, FixedUpdate, IntoSystemConfigs};
use systems::{apply_movement_requests, tick_movement_frame, mirror_character_rig, advance_turns, stabilize_on_contact};
use bevy_rapier2d::prelude::PhysicsSet;

pub mod body;
pub mod config;
pub mod controller;
pub mod feedback;
pub mod input;
pub mod probe;
pub mod rapier;
pub mod requests;
pub mod systems;

mod damper;
mod jumping;
mod turning;
mod upright;

pub use controller::{CharacterMovement, PlayerContext};
pub use feedback::{CharacterCue, MovementCue};
pub use requests::{MovementCommand, MovementRequest};

#[derive(Debug, Default)]
pub struct MovementPlugin {}

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app
            .register_type::<input::JumpKeys>()
            .register_type::<config::MovementConfig>()
            .add_event::<MovementRequest>()
            .add_event::<CharacterCue>()
            .add_systems(Update, (
                apply_movement_requests,
                tick_movement_frame,
                mirror_character_rig,
            ).chain())
            .add_systems(FixedUpdate, (
                advance_turns,
                stabilize_on_contact,
            ).chain().before(PhysicsSet::SyncBackend));
    }
}
