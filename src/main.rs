use bevy::{prelude::{App, default, Commands, Res, ResMut, AssetServer, Vec2, SpatialBundle, Transform, BuildChildren, Startup, Query, Update, KeyCode, Input, Entity, With, Color, Quat, Name, EventReader, EventWriter, AudioBundle, PlaybackSettings, FixedTime, PluginGroup, info, warn}, DefaultPlugins, window::{WindowPlugin, Window, WindowResolution, PresentMode}, sprite::{SpriteBundle, Sprite}, ecs::schedule::ExecutorKind, audio::{PlaybackMode, Volume, VolumeLevel}};
use bevy_framepace::{FramepacePlugin, FramepaceSettings, Limiter};
use bevy_persistent::Persistent;
use bevy_rapier2d::prelude::{RigidBody, Collider, ColliderMassProperties, Velocity, ExternalImpulse, LockedAxes, ActiveEvents, CollidingEntities};
use settings::{init_settings, PlayerSettings};
use tj_common::{CommonPlugin, components::{player::Player, rig::{CharacterRig, PlayerGraphics, ArmPivot}}};
use tj_core::CorePlugin;
use tj_movement::{MovementPlugin, CharacterMovement, CharacterCue, MovementCue, MovementCommand, MovementRequest, input::JumpKeys};
use tj_util::constants::{WINDOW_TITLE, INITIAL_WINDOW_WIDTH, INITIAL_WINDOW_HEIGHT, PHYSICS_STEP, PLAYER_HALF_WIDTH, PLAYER_HALF_HEIGHT, PLAYER_MASS, ARENA_HALF_WIDTH, ARENA_FLOOR_Y, ARENA_WALL_HEIGHT, ARENA_THICKNESS};

pub mod settings;

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
              title: WINDOW_TITLE.to_string(),
              resizable: true,
              resolution: WindowResolution::new(INITIAL_WINDOW_WIDTH, INITIAL_WINDOW_HEIGHT),
              present_mode: PresentMode::AutoVsync,
              ..default()
            }),
            ..default()
        }))
        .add_plugins(FramepacePlugin)
        .add_plugins(CommonPlugin {})
        .add_plugins(CorePlugin {})
        .add_plugins(MovementPlugin {})
        .insert_resource(FramepaceSettings {
            limiter: Limiter::from_framerate(60.0)
        })
        .insert_resource(FixedTime::new_from_secs(PHYSICS_STEP))
        .edit_schedule(Update, |schedule| {
            schedule.set_executor_kind(ExecutorKind::SingleThreaded);
        });

    init_settings(&mut app);

    app.add_systems(Startup, (spawn_arena, spawn_player));
    app.add_systems(Update, (play_jump_sound, toggle_movement, adjust_sensitivity));

    app.run();
}

fn spawn_wall(commands: &mut Commands, name: &'static str, center: Vec2, half_size: Vec2) {
    commands.spawn((
        SpriteBundle {
            sprite: Sprite {
                color: Color::rgb(0.25, 0.24, 0.22),
                custom_size: Some(half_size * 2.0),
                ..default()
            },
            transform: Transform::from_xyz(center.x, center.y, 0.0),
            ..default()
        },
        RigidBody::Fixed,
        Collider::cuboid(half_size.x, half_size.y),
        Name::new(name),
    ));
}

fn spawn_arena(mut commands: Commands) {
    let half_thickness = ARENA_THICKNESS * 0.5;
    let wall_center_y = ARENA_FLOOR_Y + ARENA_WALL_HEIGHT * 0.5;

    spawn_wall(
        &mut commands,
        "Floor",
        Vec2::new(0.0, ARENA_FLOOR_Y - half_thickness),
        Vec2::new(ARENA_HALF_WIDTH + ARENA_THICKNESS, half_thickness),
    );
    spawn_wall(
        &mut commands,
        "LeftWall",
        Vec2::new(-ARENA_HALF_WIDTH - half_thickness, wall_center_y),
        Vec2::new(half_thickness, ARENA_WALL_HEIGHT * 0.5),
    );
    spawn_wall(
        &mut commands,
        "RightWall",
        Vec2::new(ARENA_HALF_WIDTH + half_thickness, wall_center_y),
        Vec2::new(half_thickness, ARENA_WALL_HEIGHT * 0.5),
    );

    // A ledge to jump onto.
    spawn_wall(
        &mut commands,
        "Ledge",
        Vec2::new(ARENA_HALF_WIDTH * 0.5, ARENA_FLOOR_Y + 2.0),
        Vec2::new(1.5, half_thickness),
    );
}

fn spawn_player(
    mut commands: Commands,
    settings: Option<Res<Persistent<PlayerSettings>>>,
) {
    let settings = settings
        .map(|settings| PlayerSettings::clone(&settings))
        .unwrap_or_default();

    let player = Player::local();
    let movement = CharacterMovement::new(settings.movement, settings.tuning(player.is_real));

    let graphics = commands.spawn((
        SpriteBundle {
            sprite: Sprite {
                color: Color::rgb(0.85, 0.33, 0.2),
                custom_size: Some(Vec2::new(PLAYER_HALF_WIDTH * 2.0, PLAYER_HALF_HEIGHT * 2.0)),
                ..default()
            },
            transform: Transform::from_xyz(0.0, PLAYER_HALF_HEIGHT, 0.1),
            ..default()
        },
        PlayerGraphics {},
        Name::new("PlayerGraphics"),
    )).id();

    let arm_pivot = commands.spawn((
        SpatialBundle::from_transform(
            Transform::from_xyz(0.0, PLAYER_HALF_HEIGHT * 1.3, 0.2)
                .with_rotation(Quat::from_rotation_z(0.6)),
        ),
        ArmPivot {},
        Name::new("ArmPivot"),
    )).with_children(|arm| {
        arm.spawn(SpriteBundle {
            sprite: Sprite {
                color: Color::rgb(0.3, 0.3, 0.35),
                custom_size: Some(Vec2::new(0.5, 0.08)),
                ..default()
            },
            transform: Transform::from_xyz(0.25, 0.0, 0.0),
            ..default()
        });
    }).id();

    // The body origin sits at the feet so the ground probe starts at the sole.
    commands.spawn((
        SpatialBundle::from_transform(Transform::from_xyz(0.0, ARENA_FLOOR_Y, 0.0)),
        RigidBody::Dynamic,
        Collider::compound(vec![(
            Vec2::new(0.0, PLAYER_HALF_HEIGHT),
            0.0,
            Collider::cuboid(PLAYER_HALF_WIDTH, PLAYER_HALF_HEIGHT),
        )]),
        ColliderMassProperties::Mass(PLAYER_MASS),
        Velocity::default(),
        ExternalImpulse::default(),
        LockedAxes::empty(),
        ActiveEvents::COLLISION_EVENTS,
        CollidingEntities::default(),
        movement,
        player,
        JumpKeys {
            left: KeyCode::A,
            right: KeyCode::D,
        },
        CharacterRig {
            graphics,
            arm_pivot: Some(arm_pivot),
        },
        Name::new("Player"),
    )).push_children(&[graphics, arm_pivot]);
}

// Every jump attempt is heard, including the ones that never leave the ground.
fn plays_jump_sound(cue: &MovementCue) -> bool {
    matches!(cue, MovementCue::Jumped { .. })
}

fn play_jump_sound(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    mut cues: EventReader<CharacterCue>,
) {
    for CharacterCue { cue, .. } in cues.iter() {
        if !plays_jump_sound(cue) {
            continue;
        }

        commands.spawn(AudioBundle {
            source: asset_server.load("audio/jump.wav"),
            settings: PlaybackSettings {
                volume: Volume::Relative(VolumeLevel::new(0.2)),
                mode: PlaybackMode::Despawn,
                ..default()
            },
        });
    }
}

fn toggle_movement(
    keyboard_input: Res<Input<KeyCode>>,
    q_players: Query<(Entity, &CharacterMovement), With<Player>>,
    mut requests: EventWriter<MovementRequest>,
) {
    if !keyboard_input.just_pressed(KeyCode::Escape) {
        return;
    }

    for (entity, movement) in q_players.iter() {
        let enabled = !movement.is_movement_enabled();
        info!("movement {}", if enabled { "enabled" } else { "disabled" });
        requests.send(MovementRequest::new(entity, MovementCommand::SetEnabled(enabled)));
    }
}

fn adjust_sensitivity(
    keyboard_input: Res<Input<KeyCode>>,
    settings: Option<ResMut<Persistent<PlayerSettings>>>,
    mut q_players: Query<(&mut CharacterMovement, &Player)>,
) {
    let up = if keyboard_input.just_pressed(KeyCode::BracketRight) {
        true
    } else if keyboard_input.just_pressed(KeyCode::BracketLeft) {
        false
    } else {
        return;
    };

    let Some(mut settings) = settings else {
        return;
    };

    if let Err(err) = settings.update(|settings| settings.step_sensitivity(up)) {
        warn!("could not save settings: {err:?}");
    }
    info!("turn sensitivity level {}", settings.turn_sensitivity);

    for (mut movement, player) in q_players.iter_mut() {
        movement.set_tuning(settings.tuning(player.is_real));
    }
}

#[cfg(test)]
mod tests {
    use tj_common::components::direction::Direction;

    use super::*;

    #[test]
    fn withheld_jumps_still_make_a_sound() {
        assert!(plays_jump_sound(&MovementCue::Jumped { launched: true }));
        assert!(plays_jump_sound(&MovementCue::Jumped { launched: false }));
    }

    #[test]
    fn turning_around_is_silent() {
        let cue = MovementCue::Mirrored {
            facing: Direction::Left,
            mirror_arm: true,
        };

        assert!(!plays_jump_sound(&cue));
    }
}
