use bevy::{prelude::{Plugin, Query, With, Res, ResMut, App, PreUpdate, IntoSystemConfigs}, input::{touch::Touches, InputSystem}, window::{Window, PrimaryWindow}};
use tj_common::{components::direction::Direction, resources::touch::TouchButtons};

fn touch_side(x: f32, window_width: f32) -> Direction {
    Direction::from_right(x >= window_width * 0.5)
}

fn update_touch_buttons(
    q_window: Query<&Window, With<PrimaryWindow>>,
    touches: Res<Touches>,
    mut touch_buttons: ResMut<TouchButtons>,
) {
    let mut held = [false; 2];

    if let Ok(window) = q_window.get_single() {
        for touch in touches.iter() {
            held[touch_side(touch.position().x, window.width()).index()] = true;
        }
    }

    for direction in Direction::ALL {
        touch_buttons.update(direction, held[direction.index()]);
    }
}

#[derive(Debug, Default)]
pub struct TouchPlugin {}

impl Plugin for TouchPlugin {
    fn build(&self, app: &mut App) {
        app
            .init_resource::<TouchButtons>()
            .add_systems(PreUpdate, update_touch_buttons.after(InputSystem));
    }
}
