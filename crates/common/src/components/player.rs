use bevy::{prelude::{Component, ReflectComponent}, reflect::Reflect};
use bevy_inspector_egui::{InspectorOptions, prelude::ReflectInspectorOptions};

#[derive(Component, InspectorOptions, Reflect, Debug, Default)]
#[reflect(Component, InspectorOptions)]
pub struct Player {
    // Controlled from this machine's keyboard or touch screen.
    pub is_real: bool,
    pub is_dead: bool,
}

impl Player {
    pub fn local() -> Player {
        Player {
            is_real: true,
            is_dead: false,
        }
    }
}
