use bevy::prelude::{debug, trace};
use tj_common::components::direction::Direction;

use crate::body::{normalize_degrees, CharacterBody, RotationLock};
use crate::controller::CharacterMovement;
use crate::feedback::{MovementCue, MovementFeedback};

impl CharacterMovement {
    pub fn start_turn(
        &mut self,
        direction: Direction,
        body: &mut impl CharacterBody,
        feedback: &mut impl MovementFeedback,
    ) {
        if !self.enabled || self.is_charging() {
            debug!(
                "ignoring turn {:?}: enabled {}, charging {}",
                direction,
                self.enabled,
                self.is_charging()
            );
            return;
        }

        self.charge = Some(RotationLock::acquire(body));

        if self.facing != direction {
            feedback.cue(MovementCue::Mirrored {
                facing: direction,
                mirror_arm: true,
            });
        }

        self.facing = direction;
        debug!("charging {:?}", direction);
    }

    /// Advances the charge by one fixed physics step.
    ///
    /// The turn rate ramps toward its maximum independent of the step size.
    /// The body keeps rotating toward the charge direction until it has
    /// leaned past `max_jump_turn`, then holds there.
    pub fn advance_turn(&mut self, step: f32, time_scale: f32, body: &mut impl CharacterBody) {
        if !self.is_charging() || time_scale == 0.0 {
            return;
        }

        let turn = self.config.turn;
        self.ramped_turn_rate = (self.ramped_turn_rate + step * turn.ramp_rate()).min(turn.max_turn_speed);

        let sign = self.facing.turn_sign();
        let rotation = normalize_degrees(body.rotation_degrees());
        let threshold = turn.max_jump_turn * sign;

        let short_of_threshold = match self.facing {
            Direction::Right => rotation >= threshold,
            Direction::Left => rotation < threshold,
        };

        if short_of_threshold {
            let rotated = rotation + self.ramped_turn_rate * step * self.turn_sensitivity * sign;
            body.set_rotation_degrees(rotated);
            trace!("turning {:?} to {rotated:.3} degrees", self.facing);
        }
    }
}
