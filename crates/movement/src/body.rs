use bevy::prelude::Vec2;

/// A 2D rigid body the controller can read and command.
///
/// Rotation is exchanged in degrees, counter-clockwise positive, in any range.
pub trait CharacterBody {
    fn position(&self) -> Vec2;

    fn rotation_degrees(&self) -> f32;

    /// Teleports the body to the given rotation, even while rotation is locked.
    fn set_rotation_degrees(&mut self, degrees: f32);

    fn angular_velocity(&self) -> f32;

    fn set_angular_velocity(&mut self, angular_velocity: f32);

    fn linear_velocity(&self) -> Vec2;

    fn apply_impulse(&mut self, impulse: Vec2);

    fn apply_torque(&mut self, torque: f32);

    /// Freezes or releases physics-driven rotation.
    ///
    /// Use [`RotationLock`] rather than calling this directly.
    fn set_rotation_locked(&mut self, locked: bool);
}

pub trait SurfaceProbe {
    fn cast_ray(&self, origin: Vec2, direction: Vec2, max_distance: f32) -> bool;
}

/// Proof that a body's rotation is frozen.
///
/// Only [`RotationLock::acquire`] creates one and only [`RotationLock::release`]
/// consumes it, so whoever holds the lock is responsible for unfreezing the body.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "dropping a RotationLock leaves the body frozen"]
pub struct RotationLock {
    _private: (),
}

impl RotationLock {
    pub fn acquire(body: &mut impl CharacterBody) -> RotationLock {
        body.set_rotation_locked(true);
        RotationLock { _private: () }
    }

    pub fn release(self, body: &mut impl CharacterBody) {
        body.set_rotation_locked(false);
    }
}

pub fn normalize_degrees(degrees: f32) -> f32 {
    let wrapped = degrees.rem_euclid(360.0);
    if wrapped > 180.0 {
        wrapped - 360.0
    } else {
        wrapped
    }
}

pub fn body_down(degrees: f32) -> Vec2 {
    let radians = degrees.to_radians();
    Vec2::new(radians.sin(), -radians.cos())
}

pub fn body_up(degrees: f32) -> Vec2 {
    -body_down(degrees)
}

pub fn body_right(degrees: f32) -> Vec2 {
    let down = body_down(degrees);
    Vec2::new(-down.y, down.x)
}
