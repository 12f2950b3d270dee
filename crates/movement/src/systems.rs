use bevy::prelude::{Entity, EulerRot, EventReader, EventWriter, FixedTime, Input, KeyCode, Quat, Query, Res, Time, Transform, With, Without, warn};
use bevy_rapier2d::prelude::{CollidingEntities, ExternalImpulse, LockedAxes, RapierContext, Velocity};
use tj_common::{components::{player::Player, rig::CharacterRig}, resources::touch::TouchButtons};

use crate::controller::CharacterMovement;
use crate::feedback::{CharacterCue, MovementCue};
use crate::input::{JumpKeys, KeyboardTouchInput};
use crate::rapier::{RapierBody, RapierProbe};
use crate::requests::{MovementCommand, MovementRequest};

type BodyComponents = (
    &'static mut Transform,
    &'static mut Velocity,
    &'static mut ExternalImpulse,
    &'static mut LockedAxes,
);

fn time_scale(time: &Time) -> f32 {
    if time.is_paused() {
        0.0
    } else {
        time.relative_speed()
    }
}

pub fn apply_movement_requests(
    mut requests: EventReader<MovementRequest>,
    mut q_characters: Query<(&mut CharacterMovement, BodyComponents)>,
    rapier_context: Res<RapierContext>,
    fixed_time: Res<FixedTime>,
    mut cue_writer: EventWriter<CharacterCue>,
) {
    let step = fixed_time.period.as_secs_f32();

    for request in requests.iter() {
        let Ok((mut movement, (transform, velocity, impulse, locked_axes))) = q_characters.get_mut(request.entity) else {
            warn!("movement request for {:?} without a character", request.entity);
            continue;
        };

        let mut body = RapierBody { transform, velocity, impulse, locked_axes, step };
        let probe = RapierProbe { context: &rapier_context, exclude: request.entity };
        let mut cues: Vec<MovementCue> = Vec::new();

        match request.command {
            MovementCommand::SetEnabled(enabled) => movement.set_movement_enabled(enabled, &mut body),
            MovementCommand::ForceDirection(direction) => movement.force_direction(direction.is_right(), &mut cues),
            MovementCommand::StartTurn(direction) => movement.start_turn(direction, &mut body, &mut cues),
            MovementCommand::Jump => {
                movement.jump(&mut body, &probe, &mut cues);
            }
        }

        cue_writer.send_batch(cues.into_iter().map(|cue| CharacterCue { entity: request.entity, cue }));
    }
}

pub fn tick_movement_frame(
    mut q_characters: Query<(Entity, &mut CharacterMovement, Option<&Player>, Option<&JumpKeys>, BodyComponents)>,
    rapier_context: Res<RapierContext>,
    keyboard_input: Res<Input<KeyCode>>,
    touch_buttons: Res<TouchButtons>,
    time: Res<Time>,
    fixed_time: Res<FixedTime>,
    mut cue_writer: EventWriter<CharacterCue>,
) {
    let dt = time.delta_seconds();
    let step = fixed_time.period.as_secs_f32();
    let default_keys = JumpKeys::default();

    for (entity, mut movement, player, jump_keys, (transform, velocity, impulse, locked_axes)) in q_characters.iter_mut() {
        let mut body = RapierBody { transform, velocity, impulse, locked_axes, step };
        let probe = RapierProbe { context: &rapier_context, exclude: entity };
        let input = KeyboardTouchInput {
            keys: &keyboard_input,
            bindings: jump_keys.unwrap_or(&default_keys),
            touch: &touch_buttons,
        };
        let mut cues: Vec<MovementCue> = Vec::new();

        movement.on_frame(dt, &mut body, &probe, &input, &player, &mut cues);

        cue_writer.send_batch(cues.into_iter().map(|cue| CharacterCue { entity, cue }));
    }
}

pub fn advance_turns(
    mut q_characters: Query<(&mut CharacterMovement, BodyComponents)>,
    time: Res<Time>,
    fixed_time: Res<FixedTime>,
) {
    let step = fixed_time.period.as_secs_f32();
    let time_scale = time_scale(&time);

    for (mut movement, (transform, velocity, impulse, locked_axes)) in q_characters.iter_mut() {
        if !movement.is_charging() {
            continue;
        }

        let mut body = RapierBody { transform, velocity, impulse, locked_axes, step };
        movement.on_physics_step(step, time_scale, &mut body);
    }
}

// One persisting contact per colliding entity.
pub fn stabilize_on_contact(
    mut q_characters: Query<(&mut CharacterMovement, &CollidingEntities, Option<&Player>, BodyComponents)>,
    fixed_time: Res<FixedTime>,
) {
    let step = fixed_time.period.as_secs_f32();

    for (mut movement, colliding, player, (transform, velocity, impulse, locked_axes)) in q_characters.iter_mut() {
        let mut body = RapierBody { transform, velocity, impulse, locked_axes, step };

        for _ in colliding.iter() {
            movement.on_ground_contact_persist(step, &mut body, &player);
        }
    }
}

pub fn mirror_character_rig(
    mut cues: EventReader<CharacterCue>,
    q_rigs: Query<&CharacterRig, With<CharacterMovement>>,
    mut q_parts: Query<&mut Transform, Without<CharacterMovement>>,
) {
    for CharacterCue { entity, cue } in cues.iter() {
        let MovementCue::Mirrored { facing, mirror_arm } = *cue else {
            continue;
        };

        let Ok(rig) = q_rigs.get(*entity) else {
            continue;
        };

        if let Ok(mut graphics) = q_parts.get_mut(rig.graphics) {
            graphics.scale.x = facing.graphics_scale_x();
        }

        if !mirror_arm {
            continue;
        }

        if let Some(mut arm) = rig.arm_pivot.and_then(|arm_pivot| q_parts.get_mut(arm_pivot).ok()) {
            let (z, _, _) = arm.rotation.to_euler(EulerRot::ZYX);
            arm.rotation = Quat::from_rotation_z(-z);
        }
    }
}
