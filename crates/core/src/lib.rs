use bevy::{prelude::{Plugin, App, KeyCode}, input::common_conditions::input_toggle_active};
use bevy_inspector_egui::quick::WorldInspectorPlugin;
use camera::CameraPlugin;

use self::{physics::PhysicsPlugin, touch::TouchPlugin};

pub mod camera;
pub mod physics;
pub mod touch;

#[derive(Debug, Default)]
pub struct CorePlugin {}

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app
            .add_plugins(
                WorldInspectorPlugin::default().run_if(input_toggle_active(false, KeyCode::Grave)),
            )
            .add_plugins(CameraPlugin {})
            .add_plugins(TouchPlugin {})
            .add_plugins(PhysicsPlugin {
                debug_render: cfg!(debug_assertions),
            });
    }
}
