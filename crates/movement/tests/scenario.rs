mod common;

use bevy::prelude::Vec2;
use common::{approx, approx_vec, frame, ready_movement, ScriptedInput, SimBody, TestWorld, STEP};
use tj_common::components::direction::Direction;
use tj_movement::body::body_up;
use tj_movement::MovementCue;

#[test]
fn charge_lean_and_release() {
    let world = TestWorld::with_floor();
    let mut body = SimBody::default();
    let mut movement = ready_movement(&mut body, &world);
    let threshold = movement.config().turn.max_jump_turn;

    frame(&mut movement, &mut body, &world, ScriptedInput::holding(Direction::Right));
    assert!(movement.is_charging());
    assert!(body.rotation_locked);

    let mut stopped_at = None;
    for _ in 0..30 {
        movement.on_physics_step(STEP, 1.0, &mut body);
        body.integrate(STEP);
        frame(&mut movement, &mut body, &world, ScriptedInput::holding(Direction::Right));

        if let Some(rotation) = stopped_at {
            assert_eq!(body.rotation, rotation);
        } else if body.rotation.abs() > threshold {
            stopped_at = Some(body.rotation);
        }
    }

    let lean = stopped_at.unwrap_or(0.0);
    assert!(lean < -threshold, "right charge should lean clockwise, got {lean}");

    let cues = frame(&mut movement, &mut body, &world, ScriptedInput::releasing(Direction::Right));

    assert_eq!(cues, vec![MovementCue::Jumped { launched: true }]);
    assert_eq!(body.impulses.len(), 1);
    assert!(approx_vec(body.impulses[0], body_up(lean) * 7.0));
    assert!(body.impulses[0].x > 0.0);
    assert!(approx(movement.jump_cooldown(), 0.15));
    assert!(!movement.is_charging());
    assert!(!body.rotation_locked);
}

#[test]
fn release_before_the_lean_still_jumps_straight_up() {
    let world = TestWorld::with_floor();
    let mut body = SimBody::default();
    let mut movement = ready_movement(&mut body, &world);

    frame(&mut movement, &mut body, &world, ScriptedInput::holding(Direction::Left));
    frame(&mut movement, &mut body, &world, ScriptedInput::releasing(Direction::Left));

    assert_eq!(body.impulses, vec![Vec2::new(-0.0, 7.0)]);
}

#[test]
fn next_charge_waits_for_the_cooldown() {
    let world = TestWorld::with_floor();
    let mut body = SimBody::default();
    let mut movement = ready_movement(&mut body, &world);

    frame(&mut movement, &mut body, &world, ScriptedInput::holding(Direction::Left));
    frame(&mut movement, &mut body, &world, ScriptedInput::releasing(Direction::Left));

    let mut frames_until_charge = 0;
    while !movement.is_charging() {
        frame(&mut movement, &mut body, &world, ScriptedInput::holding(Direction::Left));
        frames_until_charge += 1;
        assert!(frames_until_charge < 60);
    }

    assert!(frames_until_charge >= 9);
}
