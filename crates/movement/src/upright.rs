use bevy::prelude::trace;

use crate::body::{normalize_degrees, CharacterBody};
use crate::controller::{CharacterMovement, PlayerContext};

impl CharacterMovement {
    // Skipped while charging, so a charge can end badly tilted until the next contact.
    pub fn stabilize_upright(
        &mut self,
        dt: f32,
        body: &mut impl CharacterBody,
        player: &impl PlayerContext,
    ) {
        if !self.enabled || player.is_dead() || self.is_charging() {
            return;
        }

        let upright = self.config.upright;
        let error = normalize_degrees(body.rotation_degrees()) / 180.0;

        if error.abs() <= upright.tolerance {
            self.off_balance_time = 0.0;
            return;
        }

        self.off_balance_time += dt;
        let multiplier = upright.force_multiplier(self.off_balance_time);
        let limit = upright.torque_limit;
        let torque = (-error * upright.error_gain).clamp(-limit, limit) * multiplier;

        body.apply_torque(torque * upright.torque_gain);
        self.upright = false;
        trace!(error, multiplier, "righting torque {torque:.2}");
    }
}
