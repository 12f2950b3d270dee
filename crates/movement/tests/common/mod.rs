#![allow(dead_code)]

use std::cell::RefCell;

use bevy::prelude::Vec2;
use tj_common::components::direction::Direction;
use tj_movement::body::{CharacterBody, SurfaceProbe};
use tj_movement::input::DirectionInput;
use tj_movement::{CharacterMovement, MovementCue, PlayerContext};

pub const FRAME: f32 = 1.0 / 60.0;
pub const STEP: f32 = 1.0 / 50.0;

/// Minimal rigid body with unit mass and inertia, angles in degrees.
#[derive(Debug, Default)]
pub struct SimBody {
    pub position: Vec2,
    pub rotation: f32,
    pub angular_velocity: f32,
    pub linear_velocity: Vec2,
    pub rotation_locked: bool,
    pub lock_writes: usize,
    pub impulses: Vec<Vec2>,
    pub torques: Vec<f32>,
    pub(crate) pending_torque: f32,
}

impl SimBody {
    pub fn at_rotation(rotation: f32) -> SimBody {
        SimBody {
            rotation,
            ..Default::default()
        }
    }

    /// Advances rotation by one step using the torque applied since the last call.
    pub fn integrate(&mut self, dt: f32) {
        if !self.rotation_locked {
            self.angular_velocity += self.pending_torque * dt;
            self.rotation += self.angular_velocity * dt;
        }
        self.pending_torque = 0.0;
    }
}

impl CharacterBody for SimBody {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn rotation_degrees(&self) -> f32 {
        self.rotation
    }

    fn set_rotation_degrees(&mut self, degrees: f32) {
        self.rotation = degrees;
    }

    fn angular_velocity(&self) -> f32 {
        self.angular_velocity
    }

    fn set_angular_velocity(&mut self, angular_velocity: f32) {
        self.angular_velocity = angular_velocity;
    }

    fn linear_velocity(&self) -> Vec2 {
        self.linear_velocity
    }

    fn apply_impulse(&mut self, impulse: Vec2) {
        self.impulses.push(impulse);
        self.linear_velocity += impulse;
    }

    fn apply_torque(&mut self, torque: f32) {
        self.torques.push(torque);
        self.pending_torque += torque;
    }

    fn set_rotation_locked(&mut self, locked: bool) {
        self.lock_writes += 1;
        self.rotation_locked = locked;
    }
}

/// A horizontal line segment rays can hit.
#[derive(Debug, Clone, Copy)]
pub struct FlatSurface {
    pub y: f32,
    pub min_x: f32,
    pub max_x: f32,
}

impl FlatSurface {
    pub fn floor(y: f32) -> FlatSurface {
        FlatSurface { y, min_x: -100.0, max_x: 100.0 }
    }

    /// A short segment centred on `point`.
    pub fn patch(point: Vec2, half_width: f32) -> FlatSurface {
        FlatSurface {
            y: point.y,
            min_x: point.x - half_width,
            max_x: point.x + half_width,
        }
    }
}

#[derive(Debug, Default)]
pub struct TestWorld {
    pub surfaces: Vec<FlatSurface>,
    pub casts: RefCell<Vec<(Vec2, Vec2, f32)>>,
}

impl TestWorld {
    pub fn empty() -> TestWorld {
        TestWorld::default()
    }

    /// Floor just under a body standing at the origin.
    pub fn with_floor() -> TestWorld {
        TestWorld::with_surfaces(vec![FlatSurface::floor(-0.1)])
    }

    pub fn with_surfaces(surfaces: Vec<FlatSurface>) -> TestWorld {
        TestWorld {
            surfaces,
            ..Default::default()
        }
    }
}

impl SurfaceProbe for TestWorld {
    fn cast_ray(&self, origin: Vec2, direction: Vec2, max_distance: f32) -> bool {
        self.casts.borrow_mut().push((origin, direction, max_distance));

        self.surfaces.iter().any(|surface| {
            if direction.y.abs() < 1e-6 {
                return false;
            }

            let t = (surface.y - origin.y) / direction.y;
            if t < 0.0 || t > max_distance {
                return false;
            }

            let x = origin.x + direction.x * t;
            x >= surface.min_x && x <= surface.max_x
        })
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ScriptedInput {
    pub pressed: [bool; 2],
    pub released: [bool; 2],
}

impl ScriptedInput {
    pub fn none() -> ScriptedInput {
        ScriptedInput::default()
    }

    pub fn holding(direction: Direction) -> ScriptedInput {
        let mut input = ScriptedInput::default();
        input.pressed[direction.index()] = true;
        input
    }

    pub fn releasing(direction: Direction) -> ScriptedInput {
        let mut input = ScriptedInput::default();
        input.released[direction.index()] = true;
        input
    }
}

impl DirectionInput for ScriptedInput {
    fn is_pressed(&self, direction: Direction) -> bool {
        self.pressed[direction.index()]
    }

    fn was_released(&self, direction: Direction) -> bool {
        self.released[direction.index()]
    }
}

#[derive(Debug, Clone, Copy)]
pub struct TestPlayer {
    pub real: bool,
    pub dead: bool,
}

impl TestPlayer {
    pub fn local() -> TestPlayer {
        TestPlayer { real: true, dead: false }
    }

    pub fn remote() -> TestPlayer {
        TestPlayer { real: false, dead: false }
    }

    pub fn dead() -> TestPlayer {
        TestPlayer { real: true, dead: true }
    }
}

impl PlayerContext for TestPlayer {
    fn is_real_player(&self) -> bool {
        self.real
    }

    fn is_dead(&self) -> bool {
        self.dead
    }
}

/// A controller whose spawn cooldown has already run out.
pub fn ready_movement(body: &mut SimBody, world: &TestWorld) -> CharacterMovement {
    let mut movement = CharacterMovement::default();
    let mut cues = Vec::new();
    movement.on_frame(1.0, body, world, &ScriptedInput::none(), &TestPlayer::local(), &mut cues);
    assert!(movement.cooldown_expired());
    movement
}

/// One frame with the given input for a local player.
pub fn frame(
    movement: &mut CharacterMovement,
    body: &mut SimBody,
    world: &TestWorld,
    input: ScriptedInput,
) -> Vec<MovementCue> {
    let mut cues = Vec::new();
    movement.on_frame(FRAME, body, world, &input, &TestPlayer::local(), &mut cues);
    cues
}

pub fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

pub fn approx_vec(a: Vec2, b: Vec2) -> bool {
    (a - b).length() < 1e-4
}
