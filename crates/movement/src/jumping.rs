use bevy::prelude::{debug, info};

use crate::body::{body_up, CharacterBody, SurfaceProbe};
use crate::controller::CharacterMovement;
use crate::feedback::{MovementCue, MovementFeedback};

impl CharacterMovement {
    // Always resets; only launches when grounded, off cooldown and not rising too fast.
    pub fn jump(
        &mut self,
        body: &mut impl CharacterBody,
        probe: &impl SurfaceProbe,
        feedback: &mut impl MovementFeedback,
    ) -> bool {
        let jump = self.config.jump;

        let cooldown_expired = self.cooldown_expired();
        if !cooldown_expired {
            info!("jump is still waiting {:.3}s", self.jump_cooldown);
        }

        let grounded = self.is_grounded(&*body, probe);
        let vertical_velocity = body.linear_velocity().y;
        let launched = cooldown_expired && grounded && vertical_velocity < jump.max_vertical_velocity;

        if launched {
            let impulse = body_up(body.rotation_degrees()) * jump.impulse_magnitude();
            body.apply_impulse(impulse);
            debug!("jumped with impulse {impulse:?}");
        } else if cooldown_expired {
            debug!("jump withheld: grounded {grounded}, vertical velocity {vertical_velocity:.2}");
        }

        self.jump_cooldown = jump.cooldown;
        self.ramped_turn_rate = 0.0;
        if let Some(lock) = self.charge.take() {
            lock.release(body);
        }

        feedback.cue(MovementCue::Jumped { launched });
        launched
    }
}
