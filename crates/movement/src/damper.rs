use bevy::prelude::trace;

use crate::body::{normalize_degrees, CharacterBody};
use crate::controller::CharacterMovement;

impl CharacterMovement {
    pub fn damp_angular_velocity(&mut self, body: &mut impl CharacterBody) {
        if self.upright {
            return;
        }

        let rotation = normalize_degrees(body.rotation_degrees());
        let zone = self.config.upright.damp_zone;
        if rotation > -zone && rotation < zone {
            let damped = body.angular_velocity() / self.config.upright.damping_divisor;
            body.set_angular_velocity(damped);
            self.upright = true;
            trace!("settled upright at {rotation:.2} degrees");
        }
    }
}
