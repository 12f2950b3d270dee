use bevy::{prelude::*, window::PrimaryWindow};
use tj_util::constants::{VIEW_HEIGHT, VIEW_WIDTH};

fn spawn_camera(mut commands: Commands) {
    commands.spawn(Camera2dBundle {
        transform: Transform::from_xyz(0.0, VIEW_HEIGHT * 0.25, 0.0),
        ..default()
    });
}

pub fn auto_scale_sys(
    window_query: Query<&Window, With<PrimaryWindow>>,
    mut query: Query<&mut Transform, With<Camera>>,
) {
    let Ok(window) = window_query.get_single() else {
        return;
    };

    for mut transform in query.iter_mut() {
        let scale = (VIEW_HEIGHT / window.height()).max(VIEW_WIDTH / window.width());
        transform.scale = Vec3::new(scale, scale, 1.0);
    }
}

#[derive(Debug, Default)]
pub struct CameraPlugin {}

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app
            .insert_resource(ClearColor(Color::rgb(0.93, 0.91, 0.86)))
            .add_systems(Startup, spawn_camera)
            .add_systems(Update, auto_scale_sys);
    }
}
