use bevy::prelude::{default, Entity, EulerRot, Mut, Quat, Transform, Vec2};
use bevy_rapier2d::prelude::{ExternalImpulse, LockedAxes, QueryFilter, QueryFilterFlags, RapierContext, Velocity};

use crate::body::{CharacterBody, SurfaceProbe};

pub struct RapierBody<'a> {
    pub transform: Mut<'a, Transform>,
    pub velocity: Mut<'a, Velocity>,
    pub impulse: Mut<'a, ExternalImpulse>,
    pub locked_axes: Mut<'a, LockedAxes>,
    pub step: f32,
}

impl CharacterBody for RapierBody<'_> {
    fn position(&self) -> Vec2 {
        self.transform.translation.truncate()
    }

    fn rotation_degrees(&self) -> f32 {
        let (z, _, _) = self.transform.rotation.to_euler(EulerRot::ZYX);
        z.to_degrees()
    }

    fn set_rotation_degrees(&mut self, degrees: f32) {
        self.transform.rotation = Quat::from_rotation_z(degrees.to_radians());
    }

    fn angular_velocity(&self) -> f32 {
        self.velocity.angvel
    }

    fn set_angular_velocity(&mut self, angular_velocity: f32) {
        self.velocity.angvel = angular_velocity;
    }

    fn linear_velocity(&self) -> Vec2 {
        self.velocity.linvel
    }

    fn apply_impulse(&mut self, impulse: Vec2) {
        self.impulse.impulse += impulse;
    }

    fn apply_torque(&mut self, torque: f32) {
        self.impulse.torque_impulse += torque * self.step;
    }

    fn set_rotation_locked(&mut self, locked: bool) {
        if self.locked_axes.contains(LockedAxes::ROTATION_LOCKED) == locked {
            return;
        }

        if locked {
            self.locked_axes.insert(LockedAxes::ROTATION_LOCKED);
        } else {
            self.locked_axes.remove(LockedAxes::ROTATION_LOCKED);
        }
    }
}

pub struct RapierProbe<'a> {
    pub context: &'a RapierContext,
    pub exclude: Entity,
}

impl SurfaceProbe for RapierProbe<'_> {
    fn cast_ray(&self, origin: Vec2, direction: Vec2, max_distance: f32) -> bool {
        let filter = QueryFilter {
            flags: QueryFilterFlags::EXCLUDE_SENSORS,
            exclude_rigid_body: Some(self.exclude),
            ..default()
        };

        self.context
            .cast_ray(origin, direction, max_distance, true, filter)
            .is_some()
    }
}
