use bevy::prelude::{debug, Component};
use tj_common::components::{direction::Direction, player::Player};

use crate::body::{CharacterBody, RotationLock, SurfaceProbe};
use crate::config::{MovementConfig, PlayerTuning};
use crate::feedback::{MovementCue, MovementFeedback};
use crate::input::DirectionInput;

pub trait PlayerContext {
    fn is_real_player(&self) -> bool;
    fn is_dead(&self) -> bool;
}

impl PlayerContext for Player {
    fn is_real_player(&self) -> bool {
        self.is_real
    }

    fn is_dead(&self) -> bool {
        self.is_dead
    }
}

impl PlayerContext for Option<&Player> {
    fn is_real_player(&self) -> bool {
        self.map_or(false, |player| player.is_real)
    }

    fn is_dead(&self) -> bool {
        self.map_or(false, |player| player.is_dead)
    }
}

#[derive(Component, Debug)]
pub struct CharacterMovement {
    pub(crate) config: MovementConfig,
    pub(crate) turn_sensitivity: f32,
    pub(crate) enabled: bool,
    // Held for exactly as long as a charge is in progress.
    pub(crate) charge: Option<RotationLock>,
    pub(crate) facing: Direction,
    pub(crate) ramped_turn_rate: f32,
    pub(crate) jump_cooldown: f32,
    pub(crate) upright: bool,
    pub(crate) off_balance_time: f32,
}

impl Default for CharacterMovement {
    fn default() -> Self {
        Self::new(MovementConfig::default(), PlayerTuning::default())
    }
}

impl CharacterMovement {
    pub fn new(config: MovementConfig, tuning: PlayerTuning) -> Self {
        Self {
            config,
            turn_sensitivity: config.turn.base_sensitivity + tuning.turn_sensitivity_bonus,
            enabled: true,
            charge: None,
            facing: Direction::Right,
            ramped_turn_rate: 0.0,
            jump_cooldown: config.jump.cooldown,
            upright: false,
            off_balance_time: 0.0,
        }
    }

    pub fn set_tuning(&mut self, tuning: PlayerTuning) {
        self.turn_sensitivity = self.config.turn.base_sensitivity + tuning.turn_sensitivity_bonus;
    }

    pub fn config(&self) -> &MovementConfig {
        &self.config
    }

    pub fn turn_sensitivity(&self) -> f32 {
        self.turn_sensitivity
    }

    pub fn is_movement_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_charging(&self) -> bool {
        self.charge.is_some()
    }

    pub fn facing(&self) -> Direction {
        self.facing
    }

    pub fn ramped_turn_rate(&self) -> f32 {
        self.ramped_turn_rate
    }

    pub fn jump_cooldown(&self) -> f32 {
        self.jump_cooldown
    }

    pub fn cooldown_expired(&self) -> bool {
        self.jump_cooldown <= 0.0
    }

    pub fn is_upright(&self) -> bool {
        self.upright
    }

    pub fn off_balance_time(&self) -> f32 {
        self.off_balance_time
    }

    pub fn set_movement_enabled(&mut self, enabled: bool, body: &mut impl CharacterBody) {
        if !enabled {
            self.cancel_charge(body);
        }
        self.enabled = enabled;
    }

    pub fn force_direction(&mut self, right: bool, feedback: &mut impl MovementFeedback) {
        self.facing = Direction::from_right(right);
        feedback.cue(MovementCue::Mirrored {
            facing: self.facing,
            mirror_arm: false,
        });
    }

    pub fn on_frame(
        &mut self,
        dt: f32,
        body: &mut impl CharacterBody,
        probe: &impl SurfaceProbe,
        input: &impl DirectionInput,
        player: &impl PlayerContext,
        feedback: &mut impl MovementFeedback,
    ) {
        self.jump_cooldown = (self.jump_cooldown - dt).max(0.0);

        if !self.enabled {
            return;
        }

        self.damp_angular_velocity(body);

        if player.is_real_player() {
            self.poll_input(body, probe, input, feedback);
        }
    }

    pub fn on_physics_step(&mut self, step: f32, time_scale: f32, body: &mut impl CharacterBody) {
        if self.enabled && self.is_charging() {
            self.advance_turn(step, time_scale, body);
        }
    }

    pub fn on_ground_contact_persist(
        &mut self,
        dt: f32,
        body: &mut impl CharacterBody,
        player: &impl PlayerContext,
    ) {
        self.stabilize_upright(dt, body, player);
    }

    fn poll_input(
        &mut self,
        body: &mut impl CharacterBody,
        probe: &impl SurfaceProbe,
        input: &impl DirectionInput,
        feedback: &mut impl MovementFeedback,
    ) {
        if self.is_charging() {
            if input.was_released(self.facing) {
                self.jump(body, probe, feedback);
            }
            return;
        }

        if !self.cooldown_expired() {
            return;
        }

        for direction in Direction::ALL {
            if input.is_pressed(direction) && self.is_grounded(&*body, probe) {
                self.start_turn(direction, body, feedback);
                return;
            }
        }
    }

    fn cancel_charge(&mut self, body: &mut impl CharacterBody) {
        if let Some(lock) = self.charge.take() {
            lock.release(body);
            debug!("charge cancelled while facing {:?}", self.facing);
        }
        self.ramped_turn_rate = 0.0;
    }
}
